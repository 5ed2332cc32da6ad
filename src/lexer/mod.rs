//! Lexical analysis
//!
//! Converts a source buffer into a stream of classified tokens, one per call.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
