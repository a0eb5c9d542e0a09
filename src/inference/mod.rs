// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod sample;
pub use sample::Sample;

// inferrers
pub mod differences;
pub mod polynomial;
pub mod exponential;
