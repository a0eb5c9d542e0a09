//! Exponential inference.
//!
//! Fits `y = stretch * ratio^x + asymptote` through the first three samples
//! and accepts the fit only if it reproduces every sample. Used as the
//! fallback when no polynomial pattern exists (e.g. `1, 2, 4, 8, 16`).
//!
//! With `x_0 = starting_at` and `d_0 = v1 - v0`:
//!
//! ```text
//! ratio     = (v2 - v1) / (v1 - v0)
//! stretch   = d_0 / (ratio^x_0 * (ratio - 1))
//! asymptote = v0 - stretch * ratio^x_0
//! ```

use std::fmt;

use tracing::debug;

use crate::inference::algorithms::Algorithm;
use crate::inference::config::{impl_common_cfg, CommonCfg};
use crate::inference::differences::approx_equal;
use crate::inference::errors::InferenceError;
use crate::inference::report::InferenceReport;
use crate::inference::sample::Sample;

/// Largest `|x|` a fit is attempted for; exact powers beyond it grow without bound.
pub const MAX_EXPONENT: u32 = 4096;


#[derive(Debug, Clone, PartialEq)]
pub struct Exponential<T> {
    pub stretch: T,
    pub ratio: T,
    pub asymptote: T,
}

impl<T: fmt::Display> fmt::Display for Exponential<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{stretch: {}, ratio: {}, asymptote: {}}}",
            self.stretch, self.ratio, self.asymptote
        )
    }
}


/// Exponential inference configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`ExponentialCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialCfg<'a, T> {
    common: CommonCfg<'a, T>,
}
impl<'a, T: Sample> ExponentialCfg<'a, T> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl<'a, T: Sample> Default for ExponentialCfg<'a, T> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ExponentialCfg<'a, T>);


/// Infers `stretch * ratio^x + asymptote` from `cfg`'s samples.
///
/// # Behavior
/// - fewer than 3 samples, `v0 == v1`, `ratio == 0` or `ratio == 1`
///   → `found: None`
/// - the fit must reproduce every sample (tolerance-aware), else `found: None`
/// - any `|x_i|` above [`MAX_EXPONENT`] → `found: None`
///
/// # Errors
/// - [`InferenceError::InsufficientData`] with fewer than 2 samples.
pub fn infer<T: Sample>(
    cfg: ExponentialCfg<'_, T>,
) -> Result<InferenceReport<Exponential<T>>, InferenceError> {
    cfg.common.validate()?;

    let values    = cfg.common.values();
    let tolerance = cfg.common.tolerance();

    let mut report = InferenceReport::new(
        Algorithm::Exponential,
        values.len(),
        cfg.common.starting_at(),
    );

    let [v0, v1, v2, ..] = values else {
        debug!(len = values.len(), "exponential fit needs 3 samples");
        return Ok(report);
    };
    if approx_equal(v0, v1, tolerance) {
        return Ok(report);
    }

    let step  = v1.clone() - v0.clone();
    let ratio = (v2.clone() - v1.clone()) / step.clone();
    if ratio.is_zero() || ratio.is_one() || !ratio.is_finite() {
        debug!(%ratio, "degenerate ratio");
        return Ok(report);
    }

    let Some(exponents) = (0..values.len())
        .map(|i| {
            i32::try_from(cfg.common.starting_at().saturating_add(i as i64))
                .ok()
                .filter(|e| e.unsigned_abs() <= MAX_EXPONENT)
        })
        .collect::<Option<Vec<i32>>>()
    else {
        debug!(starting_at = cfg.common.starting_at(), "x-values beyond exponent limit");
        return Ok(report);
    };

    let first     = ratio.pow_int(exponents[0]);
    let stretch   = step / (first.clone() * (ratio.clone() - T::one()));
    let asymptote = v0.clone() - stretch.clone() * first;

    let reproduces = values.iter().zip(&exponents).all(|(v, &e)| {
        let fitted = stretch.clone() * ratio.pow_int(e) + asymptote.clone();
        fitted.is_finite() && approx_equal(v, &fitted, tolerance)
    });
    if !reproduces {
        debug!("exponential fit does not reproduce samples");
        return Ok(report);
    }

    report.found = Some(Exponential { stretch, ratio, asymptote });
    Ok(report)
}
