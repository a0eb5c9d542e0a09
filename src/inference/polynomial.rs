//! Polynomial inference by finite differences.
//!
//! Recovers the lowest-degree polynomial reproducing a sample sequence, one
//! term at a time:
//!
//! 1. all samples equal → constant term, done
//! 2. [`find_degree`](crate::inference::differences::find_degree) → degree `d` and constant d-th difference `Δ`
//! 3. leading coefficient → `c = Δ / d!`
//! 4. residual → `values[i] - c * x_i^d`, back to 1.
//!
//! Each peeling step strictly lowers the degree, so at most `d + 1` terms are
//! produced. Both the differencing and the peeling are loops; recursion depth
//! never grows with the input.

use std::fmt;

use tracing::{debug, trace};

use crate::inference::algorithms::Algorithm;
use crate::inference::config::{impl_common_cfg, CommonCfg};
use crate::inference::differences::{all_equal, approx_equal, find_degree_counted, Degree};
use crate::inference::errors::InferenceError;
use crate::inference::report::InferenceReport;
use crate::inference::sample::Sample;

/// Difference levels allowed per peeling step unless overridden.
pub const DEFAULT_MAX_DEPTH: usize = 128;


/// One `coefficient * x^exponent` contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Term<T> {
    pub coefficient: T,
    pub exponent: u32,
}

impl<T: fmt::Display> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{coefficient: {}, exponent: {}}}", self.coefficient, self.exponent)
    }
}


/// Terms in strictly descending exponent order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    terms: Vec<Term<T>>,
}

impl<T> Polynomial<T> {
    pub fn terms(&self) -> &[Term<T>] { &self.terms }

    pub fn into_terms(self) -> Vec<Term<T>> { self.terms }

    /// Exponent of the leading term.
    pub fn degree(&self) -> u32 {
        self.terms.first().map_or(0, |t| t.exponent)
    }

    pub fn leading(&self) -> Option<&Term<T>> { self.terms.first() }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, "]")
    }
}


/// Polynomial inference configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`]
/// - `max_depth` : difference levels allowed while looking for a degree
///
/// # Construction
/// - Use [`PolynomialCfg::new`] then optional setters.
///
/// # Defaults
/// - `starting_at` [`crate::inference::config::DEFAULT_STARTING_AT`],
///   `tolerance` [`crate::inference::config::DEFAULT_TOLERANCE`] (strict),
///   `max_depth` [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct PolynomialCfg<'a, T> {
    common: CommonCfg<'a, T>,
    max_depth: usize,
}
impl<'a, T: Sample> PolynomialCfg<'a, T> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), max_depth: DEFAULT_MAX_DEPTH }
    }
    pub fn set_max_depth(mut self, v: usize) -> Result<Self, InferenceError> {
        if v == 0 {
            return Err(InferenceError::InvalidMaxDepth { got: v });
        }
        self.max_depth = v;
        Ok(self)
    }
    pub fn max_depth(&self) -> usize { self.max_depth }
}
impl<'a, T: Sample> Default for PolynomialCfg<'a, T> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(PolynomialCfg<'a, T>);


/// `n!` in the sample domain; `0! = 1`.
pub fn factorial<T: Sample>(n: usize) -> T {
    (2..=n).fold(T::one(), |acc, k| acc * T::from_int(k as i64))
}


/// Infers the polynomial generating `cfg`'s samples.
///
/// # Behavior
/// - The first term is the highest-degree term; every later term comes from
///   the residual left after subtracting all earlier terms.
/// - An all-zero residual ends the list without adding a `0 * x^0` term,
///   except when the input itself is all zeros.
/// - If the degree cannot be established at any step, the whole result is
///   "no pattern" (`found: None`); terms found so far are discarded.
/// - A residual whose degree does not drop below the previous term means
///   exact differencing broke down (floating-point residue) and is likewise
///   reported as "no pattern".
///
/// # Returns
/// [`InferenceReport`] containing
/// - `algorithm_name` : `"polynomial"`
/// - `n_provided`     : number of samples
/// - `starting_at`    : x-value of the first sample
/// - `levels`         : difference levels computed over all steps
/// - `found`          : the [`Polynomial`], or `None`
///
/// # Errors
/// - [`InferenceError::InsufficientData`] with fewer than 2 samples.
/// - [`InferenceError::DepthExceeded`] if a step needs more than `max_depth`
///   difference levels.
/// - [`InferenceError::NonFiniteCoefficient`] if `Δ / d!` is not finite.
pub fn infer<T: Sample>(
    cfg: PolynomialCfg<'_, T>,
) -> Result<InferenceReport<Polynomial<T>>, InferenceError> {
    cfg.common.validate()?;

    let values    = cfg.common.values();
    let tolerance = cfg.common.tolerance();

    let mut report = InferenceReport::new(
        Algorithm::Polynomial,
        values.len(),
        cfg.common.starting_at(),
    );

    let mut residual = values.to_vec();
    let mut terms    = Vec::<Term<T>>::new();

    loop {
        if all_equal(&residual, tolerance) {
            let constant = residual.swap_remove(0);
            if terms.is_empty() || !approx_equal(&constant, &T::zero(), tolerance) {
                terms.push(Term { coefficient: constant, exponent: 0 });
            }
            break;
        }

        let found = find_degree_counted(&residual, tolerance, cfg.max_depth, &mut report.levels)?;
        let Some(Degree { degree, nth_difference }) = found else {
            debug!(terms_so_far = terms.len(), "no constant difference; no pattern");
            return Ok(report);
        };

        let exponent = u32::try_from(degree)
            .map_err(|_| InferenceError::DepthExceeded { limit: cfg.max_depth })?;
        if terms.last().is_some_and(|prev| exponent >= prev.exponent) {
            debug!(exponent, "residual degree did not drop; no pattern");
            return Ok(report);
        }

        let coefficient = nth_difference.clone() / factorial::<T>(degree);
        if !coefficient.is_finite() {
            return Err(InferenceError::NonFiniteCoefficient { degree });
        }
        trace!(%coefficient, exponent, "peeled term");

        let stop = nth_difference.is_zero();
        terms.push(Term { coefficient: coefficient.clone(), exponent });
        if stop {
            break;
        }

        // exponent <= max_depth, which is far below i32::MAX in practice
        let power = i32::try_from(exponent)
            .map_err(|_| InferenceError::DepthExceeded { limit: cfg.max_depth })?;
        residual = residual
            .into_iter()
            .enumerate()
            .map(|(i, v)| v - coefficient.clone() * cfg.common.abscissa(i).pow_int(power))
            .collect();
    }

    debug!(n_terms = terms.len(), levels = report.levels, "polynomial found");
    report.found = Some(Polynomial { terms });
    Ok(report)
}
