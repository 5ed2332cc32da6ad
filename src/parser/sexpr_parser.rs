use super::ast::Expression;
use crate::error::{Error, Result};
use crate::lexer::{SExprScanner, Token, TokenKind};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Recursive-descent parser for S-expressions
///
/// Pulls tokens from its scanner one at a time; there is no lookahead
/// buffer. List nesting recurses on the call stack, so the nesting depth
/// an input can use is bounded only by the thread's stack size.
pub struct SExprParser<'a> {
    scanner: SExprScanner<'a>,
}

impl<'a> SExprParser<'a> {
    /// Creates a new S-expression parser over `source`
    pub fn new(source: &'a [u8]) -> Self {
        SExprParser {
            scanner: SExprScanner::new(source),
        }
    }

    /// Parses every top-level expression in the source
    ///
    /// Either all expressions are returned or the first error is; a partial
    /// result is never produced.
    pub fn parse(&mut self) -> Result<Vec<Expression>> {
        let mut expressions = Vec::new();

        while let Some(expr) = self.parse_next()? {
            expressions.push(expr);
        }

        Ok(expressions)
    }

    /// Parse the next top-level expression, `None` at end of input
    fn parse_next(&mut self) -> Result<Option<Expression>> {
        let token = self.scanner.scan()?;
        self.parse_expression(token)
    }

    /// Build the expression that starts with `token`
    ///
    /// `Eof` yields `None`; whether that is an error is up to the caller.
    fn parse_expression(&mut self, token: Token) -> Result<Option<Expression>> {
        let expr = match token.kind {
            TokenKind::Symbol => Expression::Symbol(token.lexeme),
            TokenKind::String => Expression::StringLiteral(Self::strip_quotes(&token.lexeme)),
            TokenKind::Number => Self::parse_number(token)?,
            TokenKind::LeftParen => self.parse_list(&token)?,
            TokenKind::RightParen => {
                return Err(Error::UnexpectedRparen {
                    line: token.line,
                    col: token.column,
                })
            }
            TokenKind::Eof => return Ok(None),
        };

        Ok(Some(expr))
    }

    /// Parse list items up to the `)` matching `open`
    fn parse_list(&mut self, open: &Token) -> Result<Expression> {
        let mut items = Vec::new();

        loop {
            let token = self.scanner.scan()?;
            if token.kind == TokenKind::RightParen {
                break;
            }

            match self.parse_expression(token)? {
                Some(expr) => items.push(expr),
                None => {
                    return Err(Error::UnterminatedList {
                        line: open.line,
                        col: open.column,
                    })
                }
            }
        }

        Ok(Expression::List(items))
    }

    fn parse_number(token: Token) -> Result<Expression> {
        match BigDecimal::from_str(&token.lexeme) {
            Ok(value) => Ok(Expression::Number(value)),
            Err(e) => Err(Error::InvalidNumber {
                reason: e.to_string(),
                lexeme: token.lexeme,
                line: token.line,
                col: token.column,
            }),
        }
    }

    /// The scanner guarantees a leading and trailing `"`.
    fn strip_quotes(lexeme: &str) -> String {
        lexeme[1..lexeme.len() - 1].to_string()
    }
}

/// Parses a complete source buffer into its top-level expressions
pub fn parse(source: impl AsRef<[u8]>) -> Result<Vec<Expression>> {
    let source = source.as_ref();
    tracing::debug!(bytes = source.len(), "parsing source");

    match SExprParser::new(source).parse() {
        Ok(expressions) => {
            tracing::debug!(count = expressions.len(), "parsed expressions");
            Ok(expressions)
        }
        Err(e) => {
            tracing::debug!(error = %e, "parse failed");
            Err(e)
        }
    }
}
