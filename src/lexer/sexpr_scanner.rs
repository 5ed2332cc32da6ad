use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for S-expression source
///
/// A cursor over a borrowed byte buffer. Each call to [`scan`](Self::scan)
/// produces one token and moves past it; the cursor never moves backwards.
pub struct SExprScanner<'a> {
    /// Source buffer
    source: &'a [u8],
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl<'a> SExprScanner<'a> {
    /// Creates a new S-expression scanner over `source`
    pub fn new(source: &'a [u8]) -> Self {
        SExprScanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Scans the next token
    ///
    /// Returns a [`TokenKind::Eof`] token once the input is exhausted, and
    /// keeps returning it on every later call.
    pub fn scan(&mut self) -> Result<Token> {
        self.skip_whitespace();

        self.start = self.current;
        let (line, column) = (self.line, self.column);

        if self.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, String::new(), line, column));
        }

        let kind = match self.advance() {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'"' => {
                self.scan_string(line, column)?;
                TokenKind::String
            }
            c if is_numeric(c) => {
                self.consume_while(is_numeric);
                TokenKind::Number
            }
            _ => {
                self.consume_while(|c| !is_delimiter(c));
                TokenKind::Symbol
            }
        };

        let token = Token::new(kind, self.lexeme(), line, column);
        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, line, column, "scanned token");
        Ok(token)
    }

    /// Scans all tokens from source and returns them, ending with `Eof`
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// No escape processing: the first `"` after the opening one closes the literal.
    fn scan_string(&mut self, line: usize, column: usize) -> Result<()> {
        self.consume_while(|c| c != b'"');

        if self.is_at_end() {
            return Err(Error::UnterminatedString { line, col: column });
        }

        self.advance(); // Closing "
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(is_whitespace);
    }

    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let c = self.source[self.current];
        self.current += 1;
        if c == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> u8 {
        self.source[self.current]
    }

    fn lexeme(&self) -> String {
        String::from_utf8_lossy(&self.source[self.start..self.current]).into_owned()
    }
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n')
}

fn is_delimiter(c: u8) -> bool {
    is_whitespace(c) || c == b'(' || c == b')'
}

fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}
