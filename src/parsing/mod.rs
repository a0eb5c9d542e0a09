//! Number-list input.
//!
//! A line is split on `,` and each trimmed token is read with the grammar in
//! [`literal`]. The first bad token fails the whole line.

pub mod errors;
pub mod literal;

pub use errors::ParseError;
pub use literal::{parse_number, Literal};

use crate::inference::sample::Sample;


/// Parses `"1, 4, 9, 16"` style input into samples.
///
/// # Errors
/// - [`ParseError`] for the first token that is not a number.
pub fn parse_line<T: Sample>(line: &str) -> Result<Vec<T>, ParseError> {
    line.split(',').map(parse_number).collect()
}
