use serde::{Deserialize, Serialize};

/// A single token from the source buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Whether this token marks the end of input
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token classes of the S-expression notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Any run of non-delimiter bytes that is not a number or string
    Symbol,
    /// Run of digits and dots, not yet validated
    Number,
    /// Quoted string, lexeme includes both quotes
    String,
    /// End of input
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "`(`"),
            TokenKind::RightParen => write!(f, "`)`"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "`(`");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_is_eof() {
        assert!(Token::new(TokenKind::Eof, "", 1, 1).is_eof());
        assert!(!Token::new(TokenKind::Symbol, "eof", 1, 1).is_eof());
    }
}
