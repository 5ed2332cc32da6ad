//! # sexpr-reader - A Minimal S-expression Front-end
//!
//! Reads source text written in a small Lisp-like notation and produces its
//! syntax tree: a sequence of expressions built from lists, symbols, strings
//! and arbitrary-precision decimal numbers.
//!
//! There is no evaluator. The crate covers the two analysis stages only:
//!
//! ```text
//! Source bytes → Scanner → Tokens → Parser → Vec<Expression>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_reader::{parse, Expression};
//!
//! # fn main() -> sexpr_reader::Result<()> {
//! let exprs = parse(r#"(+ 1 2)()3(print "done!")"#)?;
//!
//! assert_eq!(exprs.len(), 4);
//! assert_eq!(exprs[0].to_string(), "(+ 1 2)");
//! assert_eq!(exprs[3].as_list().unwrap()[1], Expression::string("done!"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Notation
//!
//! - `(` and `)` delimit lists; lists nest freely.
//! - `"..."` is a string literal. There are no escapes: the next `"` always
//!   closes the literal.
//! - A token starting with a digit or `.` is a number: the longest run of
//!   digits and dots, parsed as an exact decimal.
//! - Anything else up to whitespace or a paren is a symbol.
//! - Whitespace is space, tab and newline only.
//!
//! ## Scanning by Hand
//!
//! ```rust
//! use sexpr_reader::{Scanner, TokenKind};
//!
//! # fn main() -> sexpr_reader::Result<()> {
//! let mut scanner = Scanner::new(b"(f 4.5)");
//! assert_eq!(scanner.scan()?.kind, TokenKind::LeftParen);
//! assert_eq!(scanner.scan()?.lexeme, "f");
//! assert_eq!(scanner.scan()?.kind, TokenKind::Number);
//! assert_eq!(scanner.scan()?.kind, TokenKind::RightParen);
//! assert_eq!(scanner.scan()?.kind, TokenKind::Eof);
//! assert_eq!(scanner.scan()?.kind, TokenKind::Eof);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The first error aborts the parse; no partial result is returned.
//!
//! ```rust
//! use sexpr_reader::{parse, Error};
//!
//! match parse("((()") {
//!     Err(Error::UnterminatedList { line, col }) => assert_eq!((line, col), (1, 2)),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! assert_eq!(parse(")(").unwrap_err().to_string(), "unexpected rparen");
//! ```
//!
//! ## Limits
//!
//! Lists are parsed recursively, so nesting depth is bounded by the stack of
//! the calling thread.

// Module declarations
/// Version of the reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parallel;
pub mod parser;

// Re-export main types
pub use error::{Error, ErrorStage, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parallel::{parse_batch, ParallelConfig};
pub use parser::{parse, Expression, SExprParser};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source bytes into tokens for the parser.
pub type Scanner<'a> = SExprScanner<'a>;

/// Type alias for the S-expression parser.
/// Converts tokens into expression trees.
pub type Parser<'a> = SExprParser<'a>;
