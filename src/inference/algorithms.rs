//! Defines the inference algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported inferrers.

/// Inference algorithm variants.
/// - [`Algorithm::Polynomial`]  finite-difference term peeling
/// - [`Algorithm::Exponential`] `stretch * ratio^x + asymptote` fit
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Polynomial,
    Exponential,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Polynomial  => "polynomial",
            Algorithm::Exponential => "exponential",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
