//! Sequence pattern finding.
//!
//! ┌ [`inference`] : polynomial (finite-difference) and exponential inferrers
//! ├ [`parsing`]   : comma-separated number lines into samples
//! └ [`session`]   : prompt / infer / print loop used by the binary

pub mod inference;
pub mod parsing;
pub mod session;
