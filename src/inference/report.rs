//! Defines the struct returned by all inference algorithms.
//!
//! Defines the [`InferenceReport`] struct returned by all inferrers.
//!
//! The report carries the inferred model (or the "no pattern" sentinel)
//! together with metadata about the run.

use crate::inference::algorithms::Algorithm;

/// Summary of an inference run.
///
/// [`InferenceReport`]
/// - `algorithm_name` : name of the inferrer (e.g. `"polynomial"`)
/// - `n_provided`     : number of samples
/// - `starting_at`    : x-value of the first sample
/// - `levels`         : difference levels examined (polynomial only, else 0)
/// - `found`          : inferred model, `None` when no pattern was found
#[derive(Debug, Clone)]
pub struct InferenceReport<M> {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub starting_at: i64,
    pub levels: usize,
    pub found: Option<M>,
}

impl<M> InferenceReport<M> {
    pub fn new(algorithm: Algorithm, n_provided: usize, starting_at: i64) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            starting_at,
            levels: 0,
            found: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}
