//! Error types for the S-expression reader

use thiserror::Error;

/// Reader errors
///
/// Every variant aborts the parse that produced it. The display text is the
/// bare diagnostic; positions are kept as structured fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// String literal opened but never closed
    ///
    /// **Triggered by:** a `"` with no matching `"` before end of input
    /// **Example:** `(print "hello)`
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Line of the opening quote
        line: usize,
        /// Column of the opening quote
        col: usize,
    },

    /// Numeric token that is not a valid decimal
    ///
    /// **Triggered by:** a run of digits and dots the decimal parser rejects
    /// **Example:** `42.42.42`
    #[error("parsing number {lexeme:?}: {reason}")]
    InvalidNumber {
        /// Offending lexeme, verbatim
        lexeme: String,
        /// Diagnostic from the decimal parser
        reason: String,
        /// Line of the lexeme
        line: usize,
        /// Column of the lexeme
        col: usize,
    },

    /// `)` where an expression was expected
    ///
    /// **Example:** `)(`
    #[error("unexpected rparen")]
    UnexpectedRparen {
        /// Line of the stray paren
        line: usize,
        /// Column of the stray paren
        col: usize,
    },

    /// End of input while a list is still open
    ///
    /// **Example:** `((()`
    #[error("unterminated list")]
    UnterminatedList {
        /// Line of the unclosed `(`
        line: usize,
        /// Column of the unclosed `(`
        col: usize,
    },

    /// Batch parsing could not start its worker pool
    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),
}

/// Which pipeline stage raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Raised by the scanner
    Lexical,
    /// Raised by the parser, including numeric literal validation
    Syntactic,
    /// Not tied to any input
    Environment,
}

impl Error {
    /// Classify the stage that produced this error
    pub fn classify(&self) -> ErrorStage {
        match self {
            Error::UnterminatedString { .. } => ErrorStage::Lexical,
            Error::InvalidNumber { .. }
            | Error::UnexpectedRparen { .. }
            | Error::UnterminatedList { .. } => ErrorStage::Syntactic,
            Error::ThreadPool(_) => ErrorStage::Environment,
        }
    }

    /// Source position (1-indexed line and column) the error points at
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnterminatedString { line, col }
            | Error::InvalidNumber { line, col, .. }
            | Error::UnexpectedRparen { line, col }
            | Error::UnterminatedList { line, col } => Some((*line, *col)),
            Error::ThreadPool(_) => None,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
