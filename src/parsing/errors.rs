use thiserror::Error;

/// Token errors. Both are per-line and recoverable; the session reports them
/// and prompts again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{token} is not a number")]
    InvalidToken { token: String },

    #[error("{token} divides by zero")]
    ZeroDenominator { token: String },
}
