//! Inference error types.
//!
//! [`InferenceError`]
//! ├ input errors
//! │   ├ too few samples
//! │   └ non-finite sample
//! ├ configuration errors (tolerance, max_depth)
//! └ runtime errors
//!     ├ difference-level bound exceeded
//!     └ non-finite leading coefficient
//!
//! "No pattern found" is not an error; it is the `found: None` sentinel of
//! [`crate::inference::report::InferenceReport`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("insufficient data: got {got} sample(s), need at least 2")]
    InsufficientData { got: usize },

    #[error("non-finite sample at index {idx}")]
    NonFiniteSample { idx: usize },

    #[error("invalid tolerance {got}: must be finite and >= 0")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_depth: must be >= 1. got max_depth={got}")]
    InvalidMaxDepth { got: usize },

    #[error("difference depth limit of {limit} levels exceeded")]
    DepthExceeded { limit: usize },

    #[error("leading coefficient of degree {degree} is not finite")]
    NonFiniteCoefficient { degree: usize },
}
