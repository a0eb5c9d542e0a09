//! Numeric literal grammar.
//!
//! Tried in order on a trimmed token:
//! ├ decimal  : `-?\d*\.?\d*` with at least one digit   (`5`, `2.5`, `.5`, `-3`)
//! ├ fraction : `-?\d+/\d+`                            (`3/4`)
//! └ mixed    : `-?(\d+\s+)?\d+/\d+`                   (`1 2/3`)
//!
//! A leading `-` negates the whole literal, so `-1 1/2` is `-1.5`.

use std::sync::LazyLock;

use regex::Regex;

use crate::inference::sample::Sample;
use crate::parsing::errors::ParseError;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d*$").expect("decimal grammar"));
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d+)/(\d+)$").expect("fraction grammar"));
static MIXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(?:(\d+)\s+)?(\d+)/(\d+)$").expect("mixed grammar"));


/// A classified token, borrowing its digit runs from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'s> {
    Decimal(&'s str),
    Fraction { negative: bool, numer: &'s str, denom: &'s str },
    Mixed    { negative: bool, whole: &'s str, numer: &'s str, denom: &'s str },
}

impl<'s> Literal<'s> {
    /// Classifies an already trimmed token.
    pub fn classify(token: &'s str) -> Result<Self, ParseError> {
        if DECIMAL.is_match(token) && token.bytes().any(|b| b.is_ascii_digit()) {
            return Ok(Literal::Decimal(token));
        }
        if let Some(caps) = FRACTION.captures(token) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            return Ok(Literal::Fraction {
                negative: !group(1).is_empty(),
                numer: group(2),
                denom: group(3),
            });
        }
        if let Some(caps) = MIXED.captures(token) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            return Ok(Literal::Mixed {
                negative: !group(1).is_empty(),
                whole: group(2),
                numer: group(3),
                denom: group(4),
            });
        }
        Err(ParseError::InvalidToken { token: token.to_owned() })
    }

    /// Value of the literal in the sample domain.
    ///
    /// # Errors
    /// - [`ParseError::ZeroDenominator`] for `n/0`.
    pub fn value<T: Sample>(&self, token: &str) -> Result<T, ParseError> {
        let digits = |text: &str| {
            T::parse_decimal(text).ok_or_else(|| ParseError::InvalidToken { token: token.to_owned() })
        };
        let ratio = |numer: &str, denom: &str| -> Result<T, ParseError> {
            let denom: T = digits(denom)?;
            if denom.is_zero() {
                return Err(ParseError::ZeroDenominator { token: token.to_owned() });
            }
            Ok(digits(numer)? / denom)
        };
        let signed = |negative: bool, v: T| if negative { T::zero() - v } else { v };

        match *self {
            Literal::Decimal(text) => digits(text),
            Literal::Fraction { negative, numer, denom } => Ok(signed(negative, ratio(numer, denom)?)),
            Literal::Mixed { negative, whole, numer, denom } => {
                let whole = if whole.is_empty() { T::zero() } else { digits(whole)? };
                Ok(signed(negative, whole + ratio(numer, denom)?))
            }
        }
    }
}


/// Trims and parses one token.
///
/// # Errors
/// - [`ParseError::InvalidToken`] if the token matches no grammar rule.
/// - [`ParseError::ZeroDenominator`] for a zero denominator.
pub fn parse_number<T: Sample>(token: &str) -> Result<T, ParseError> {
    let token = token.trim();
    Literal::classify(token)?.value(token)
}
