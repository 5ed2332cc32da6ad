use bigdecimal::{BigDecimal, ParseBigDecimalError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed S-expression
///
/// Nodes are built bottom-up by the parser and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Parenthesized sequence, children in source order
    List(Vec<Expression>),
    /// Bare identifier, kept verbatim
    Symbol(String),
    /// String literal with its quotes removed
    StringLiteral(String),
    /// Arbitrary-precision decimal literal
    Number(BigDecimal),
}

impl Expression {
    /// Creates a list expression
    pub fn list(items: impl IntoIterator<Item = Expression>) -> Self {
        Expression::List(items.into_iter().collect())
    }

    /// Creates a symbol expression
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(name.into())
    }

    /// Creates a string literal expression
    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    /// Creates a number expression from its decimal text
    pub fn number(text: &str) -> Result<Self, ParseBigDecimalError> {
        BigDecimal::from_str(text).map(Expression::Number)
    }

    /// Whether this is a non-list expression
    pub fn is_atom(&self) -> bool {
        !matches!(self, Expression::List(_))
    }

    /// Children of a list, `None` for atoms
    pub fn as_list(&self) -> Option<&[Expression]> {
        match self {
            Expression::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of a symbol, `None` for anything else
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expression::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Expression::List(_) => "list",
            Expression::Symbol(_) => "symbol",
            Expression::StringLiteral(_) => "string",
            Expression::Number(_) => "number",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Expression::Symbol(name) => write!(f, "{}", name),
            // No re-escaping: the literal could never contain a quote
            Expression::StringLiteral(s) => write!(f, "\"{}\"", s),
            Expression::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Expression {
        Expression::number(s).unwrap()
    }

    #[test]
    fn test_display_atoms() {
        assert_eq!(Expression::symbol("+").to_string(), "+");
        assert_eq!(Expression::string("done!").to_string(), "\"done!\"");
        assert_eq!(Expression::string("").to_string(), "\"\"");
        assert_eq!(num("42").to_string(), "42");
        assert_eq!(num("4.5").to_string(), "4.5");
    }

    #[test]
    fn test_display_lists() {
        assert_eq!(Expression::List(vec![]).to_string(), "()");
        let expr = Expression::list([
            num("1"),
            Expression::string("2"),
            Expression::symbol("three"),
            Expression::list([num("4.5")]),
        ]);
        assert_eq!(expr.to_string(), "(1 \"2\" three (4.5))");
    }

    #[test]
    fn test_number_keeps_precision() {
        let text = "3.14159265358979323846264338327950288419716939937510";
        assert_eq!(num(text).to_string(), text);
        let big = "123456789012345678901234567890";
        assert_eq!(num(big).to_string(), big);
    }

    #[test]
    fn test_number_rejects_two_points() {
        assert!(Expression::number("42.42.42").is_err());
    }

    #[test]
    fn test_accessors() {
        let expr = Expression::list([Expression::symbol("f"), num("1")]);
        assert!(!expr.is_atom());
        assert_eq!(expr.as_list().map(|items| items.len()), Some(2));
        assert_eq!(expr.as_list().unwrap()[0].as_symbol(), Some("f"));
        assert_eq!(expr.as_list().unwrap()[1].type_name(), "number");
        assert!(Expression::string("s").is_atom());
        assert_eq!(Expression::string("s").as_symbol(), None);
    }
}
