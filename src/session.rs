//! Prompt / infer / print loop.
//!
//! Generic over the input and output streams so the binary can hand it
//! stdin/stdout and tests can hand it in-memory buffers. Every bad line is
//! reported as `Error: ...` and the loop keeps going; only I/O failures and
//! end of input stop it.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::inference::algorithms::Algorithm;
use crate::inference::config::{DEFAULT_STARTING_AT, DEFAULT_TOLERANCE};
use crate::inference::errors::InferenceError;
use crate::inference::exponential::{self, Exponential, ExponentialCfg};
use crate::inference::polynomial::{self, Polynomial, PolynomialCfg, DEFAULT_MAX_DEPTH};
use crate::inference::sample::Sample;
use crate::parsing::{parse_line, ParseError};

pub const PROMPT: &str = "Pattern: ";
pub const NO_PATTERN: &str = "No pattern found";


#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}


/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub starting_at: i64,
    pub tolerance: f64,
    pub max_depth: usize,
    /// Try `stretch * ratio^x + asymptote` when no polynomial is found.
    pub exponential: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_at: DEFAULT_STARTING_AT,
            tolerance: DEFAULT_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
            exponential: true,
        }
    }
}


/// What a line of samples turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Polynomial(Polynomial<T>),
    Exponential(Exponential<T>),
    NoPattern,
}

impl<T: std::fmt::Display> std::fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Polynomial(p)  => write!(f, "{p}"),
            Outcome::Exponential(e) => write!(f, "{e}"),
            Outcome::NoPattern      => write!(f, "{NO_PATTERN}"),
        }
    }
}


/// Polynomial first, then (if enabled) exponential.
pub fn find_pattern<T: Sample>(
    values: &[T],
    settings: &Settings,
) -> Result<Outcome<T>, InferenceError> {
    let cfg = PolynomialCfg::new()
        .set_values(values)?
        .set_starting_at(settings.starting_at)
        .set_tolerance(settings.tolerance)?
        .set_max_depth(settings.max_depth)?;

    // hitting the depth cap means no polynomial within reach, not a failed line
    match polynomial::infer(cfg) {
        Ok(report) => {
            if let Some(found) = report.found {
                debug!(degree = found.degree(), "polynomial found");
                return Ok(Outcome::Polynomial(found));
            }
        }
        Err(InferenceError::DepthExceeded { limit }) => {
            warn!(limit, "difference depth limit reached; treating as no polynomial");
        }
        Err(e) => return Err(e),
    }
    if !settings.exponential {
        return Ok(Outcome::NoPattern);
    }
    debug!(algorithm = %Algorithm::Exponential, "falling back");

    let cfg = ExponentialCfg::new()
        .set_values(values)?
        .set_starting_at(settings.starting_at)
        .set_tolerance(settings.tolerance)?;

    Ok(exponential::infer(cfg)?
        .found
        .map_or(Outcome::NoPattern, Outcome::Exponential))
}

/// Parses and answers one input line.
pub fn respond<T: Sample>(line: &str, settings: &Settings) -> Result<Outcome<T>, SessionError> {
    let values = parse_line::<T>(line)?;
    debug!(n = values.len(), "parsed samples");
    Ok(find_pattern(&values, settings)?)
}


/// Runs the loop until `input` is exhausted.
///
/// Returns the number of non-blank lines answered.
///
/// # Errors
/// - I/O errors from `input` or `output`. Parse and inference errors are
///   written to `output` instead.
pub fn run<T, R, W>(settings: &Settings, mut input: R, mut output: W) -> io::Result<usize>
where
    T: Sample,
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    let mut line     = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match respond::<T>(&line, settings) {
            Ok(outcome) => writeln!(output, "{outcome}")?,
            Err(e)      => writeln!(output, "Error: {e}")?,
        }
        answered += 1;
    }

    info!(answered, "input exhausted");
    Ok(answered)
}
