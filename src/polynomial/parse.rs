use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::traits::FloatScalar;

use super::Polynomial;

/// Errors from parsing a polynomial out of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A term's coefficient is not a parsable number.
    InvalidCoefficient(String),
    /// A term's exponent is not a parsable non-negative integer.
    InvalidExponent(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCoefficient(tok) => {
                write!(f, "invalid coefficient: {tok:?}")
            }
            ParseError::InvalidExponent(tok) => write!(f, "invalid exponent: {tok:?}"),
        }
    }
}

impl<T: FloatScalar + FromStr> Polynomial<T> {
    /// Parse a polynomial from text.
    ///
    /// Each term is written `c`, `cx`, or `cx^p`, where `c` is a decimal
    /// coefficient, `x` is the variable named by `var`, and `p` is a
    /// non-negative integer power. Terms are joined with `+` or `-`; a
    /// coefficient may be omitted (implicitly `1` or `-1`), and a variable
    /// without a caret has power 1. Whitespace is ignored. Repeated powers
    /// accumulate.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidCoefficient`] or [`ParseError::InvalidExponent`]
    /// when a term's tokens fail to parse.
    ///
    /// # Example
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// let p: Polynomial<f64> = Polynomial::parse("x", "x^2 - 5x + 6").unwrap();
    /// assert_eq!(p.coefficients(), [6.0, -5.0, 1.0]);
    ///
    /// let q: Polynomial<f64> = Polynomial::parse("t", "-t^3 + 2.5").unwrap();
    /// assert_eq!(q.coefficient(3), -1.0);
    ///
    /// assert!(Polynomial::<f64>::parse("x", "ax^2").is_err());
    /// ```
    pub fn parse(var: &str, text: &str) -> Result<Self, ParseError> {
        // Normalize: strip spaces, carry signs into the terms themselves.
        let standard = text.replace(' ', "").replace('-', "+-");
        let caret = format!("{var}^");

        let mut result = Self::new();
        for term in standard.split('+') {
            // A leading sign produces an empty first chunk.
            if term.is_empty() {
                continue;
            }

            // Separate the term into coefficient and power tokens.
            let stripped: String;
            let (val_tok, pow_tok) = if term.contains(var) {
                if term.contains('^') {
                    match term.split_once(caret.as_str()) {
                        Some((val, pow)) => (val, pow),
                        None => return Err(ParseError::InvalidExponent(term.to_string())),
                    }
                } else {
                    stripped = term.replace(var, "");
                    (stripped.as_str(), "1")
                }
            } else {
                (term, "0")
            };

            let val = if val_tok.is_empty() {
                T::one()
            } else if val_tok == "-" {
                -T::one()
            } else {
                val_tok
                    .parse::<T>()
                    .map_err(|_| ParseError::InvalidCoefficient(val_tok.to_string()))?
            };

            let deg = pow_tok
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidExponent(pow_tok.to_string()))?;

            result.term_add(deg as i32, val);
        }

        Ok(result)
    }
}
