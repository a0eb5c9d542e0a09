//! Numeric domain of the inferrers.
//!
//! [`Sample`] is implemented for
//! ├ `f64`         : default, floating-point division (fractions are rounded)
//! └ `BigRational` : exact; every recovered coefficient is exact
//!
//! Both inferrers are generic over [`Sample`] so the choice of domain is made
//! once, by the caller, when the sample slice is built.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};


pub trait Sample:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Lifts an integer (sample index, factorial factor) into the domain.
    fn from_int(n: i64) -> Self;

    /// `self^exp`, negative exponents allowed for non-zero `self`.
    fn pow_int(&self, exp: i32) -> Self;

    /// Nearest `f64`; used for tolerance comparisons.
    fn as_f64(&self) -> f64;

    fn is_finite(&self) -> bool;

    /// Parses `-?\d*\.?\d*` (at least one digit) into the domain.
    fn parse_decimal(text: &str) -> Option<Self>;
}


impl Sample for f64 {
    #[inline]
    fn from_int(n: i64) -> Self { n as f64 }

    #[inline]
    fn pow_int(&self, exp: i32) -> Self { f64::powi(*self, exp) }

    #[inline]
    fn as_f64(&self) -> f64 { *self }

    #[inline]
    fn is_finite(&self) -> bool { f64::is_finite(*self) }

    fn parse_decimal(text: &str) -> Option<Self> {
        text.parse::<f64>().ok()
    }
}


impl Sample for BigRational {
    #[inline]
    fn from_int(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }

    #[inline]
    fn pow_int(&self, exp: i32) -> Self { self.pow(exp) }

    fn as_f64(&self) -> f64 {
        match (self.numer().to_f64(), self.denom().to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }

    #[inline]
    fn is_finite(&self) -> bool { true }

    // 0.3 must stay 3/10; going through f64 would give 5404319552844595/18014398509481984
    fn parse_decimal(text: &str) -> Option<Self> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None       => (false, text),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let digits = format!("{whole}{frac}");
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let numer: BigInt = digits.parse().ok()?;
        let denom = num_traits::pow(BigInt::from(10), frac.len());
        let value = BigRational::new(numer, denom);

        Some(if negative { -value } else { value })
    }
}
