//! S-expression parser
//!
//! Builds a forest of [`Expression`] nodes from the scanner's token stream.

mod ast;
mod sexpr_parser;

pub use ast::Expression;
pub use sexpr_parser::{parse, SExprParser};
