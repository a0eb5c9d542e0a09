//! Shared configuration for inference algorithms.
//!
//! Provides [`CommonCfg`] with the default starting index [`DEFAULT_STARTING_AT`]
//! and the default equality tolerance [`DEFAULT_TOLERANCE`]. Shared by all
//! inferrers.
//!
//! [`CommonCfg`] — universal fields
//! - `values`      : samples, `values[i]` observed at `x_i = i + starting_at`
//! - `starting_at` : x-value of the first sample
//! - `tolerance`   : absolute tolerance for "equal" samples (0 = strict `==`)
//!
//! [`CommonCfg::new`] initializes configuration with an empty slice.


use crate::inference::errors::InferenceError;
use crate::inference::sample::Sample;

pub const DEFAULT_STARTING_AT: i64 = 1;
pub const DEFAULT_TOLERANCE: f64 = 0.0;


#[derive(Debug, Clone, Copy)]
pub struct CommonCfg<'a, T> {
    pub(crate) values      : &'a [T],
    pub(crate) starting_at : i64,
    pub(crate) tolerance   : f64,
}

impl<'a, T: Sample> CommonCfg<'a, T> {
    pub fn new() -> Self {
        Self {
            values      : &[],
            starting_at : DEFAULT_STARTING_AT,
            tolerance   : DEFAULT_TOLERANCE,
        }
    }
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.values.len() < 2 {
            return Err(InferenceError::InsufficientData { got: self.values.len() });
        }
        Ok(())
    }

    /// x-value of sample `i`.
    #[inline]
    pub fn abscissa(&self, i: usize) -> T {
        T::from_int(self.starting_at.saturating_add(i as i64))
    }

    // getters
    pub fn values(&self)      -> &'a [T] { self.values }
    pub fn starting_at(&self) -> i64 { self.starting_at }
    pub fn tolerance(&self)   -> f64 { self.tolerance }

    // setters
    pub(crate) fn with_values(&mut self, v: &'a [T]) { self.values = v; }
    pub(crate) fn with_starting_at(&mut self, v: i64) { self.starting_at = v; }
    pub(crate) fn with_tolerance(&mut self, v: f64) { self.tolerance = v; }
}

impl<'a, T: Sample> Default for CommonCfg<'a, T> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx<T: Sample>(xs: &[T]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a, T: $crate::inference::sample::Sample> $cfg {
            pub fn set_values(
                mut self,
                v: &'a [T],
            ) -> Result<Self, $crate::inference::errors::InferenceError> {
                use $crate::inference::errors::InferenceError;

                if v.len() < 2 {
                    return Err(InferenceError::InsufficientData { got: v.len() });
                }
                if let Some(idx) = $crate::inference::config::non_finite_idx(v) {
                    return Err(InferenceError::NonFiniteSample { idx });
                }

                self.common.with_values(v);
                Ok(self)
            }

            // zero and negative starts are fine: the residual never divides by x
            pub fn set_starting_at(mut self, v: i64) -> Self {
                self.common.with_starting_at(v);
                self
            }

            pub fn set_tolerance(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::inference::errors::InferenceError> {
                use $crate::inference::errors::InferenceError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InferenceError::InvalidTolerance { got: v });
                }

                self.common.with_tolerance(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::inference::config::CommonCfg<'a, T> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
