//! Parallel batch parsing
//!
//! Parses many independent source buffers concurrently. Each buffer gets its
//! own parser, so no state is shared between parses.

mod executor;

pub use executor::{parse_batch, ParallelConfig};
