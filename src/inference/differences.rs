//! Finite differences and the degree finder.
//!
//! The n-th finite difference of a degree-`d` polynomial sampled at unit
//! steps is constant for `n = d` and equals `c * d!` where `c` is the leading
//! coefficient. [`find_degree`] differences a sequence until it becomes
//! constant and reports how many levels that took.
//!
//! ```text
//! values : 1  4  9  16  25
//! diff 1 :  3  5  7   9
//! diff 2 :   2  2  2          -> degree 2, nth difference 2
//! ```

use tracing::trace;

use crate::inference::errors::InferenceError;
use crate::inference::sample::Sample;


/// Degree of the generating polynomial and its constant d-th difference.
#[derive(Debug, Clone, PartialEq)]
pub struct Degree<T> {
    pub degree: usize,
    pub nth_difference: T,
}


/// `diff[i] = values[i + 1] - values[i]`
pub fn first_differences<T: Sample>(values: &[T]) -> Vec<T> {
    values
        .windows(2)
        .map(|w| w[1].clone() - w[0].clone())
        .collect()
}

/// Strict `==` when `tolerance == 0`, else `|a - b| <= tolerance`.
#[inline]
pub fn approx_equal<T: Sample>(a: &T, b: &T, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return a == b;
    }
    (a.clone() - b.clone()).as_f64().abs() <= tolerance
}

/// Every element equals the first one. Vacuously true for `[]`.
pub fn all_equal<T: Sample>(values: &[T], tolerance: f64) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| approx_equal(v, first, tolerance)),
        None => true,
    }
}


/// Finds the degree of the lowest-degree polynomial producing `values`.
///
/// # Behavior
/// - fewer than 3 values                → `Ok(None)`
/// - first differences all equal        → degree 1, constant `diff[0]`
/// - otherwise repeat on the differences, one degree higher per level
/// - sequence shrinks below 3 unresolved → `Ok(None)`
///
/// An all-equal *input* (degree 0) is not detected here; callers check it
/// first.
///
/// # Errors
/// - [`InferenceError::DepthExceeded`] if more than `max_depth` difference
///   levels would be needed.
pub fn find_degree<T: Sample>(
    values: &[T],
    tolerance: f64,
    max_depth: usize,
) -> Result<Option<Degree<T>>, InferenceError> {
    let mut levels = 0;
    find_degree_counted(values, tolerance, max_depth, &mut levels)
}

/// [`find_degree`] that also accumulates the number of difference levels
/// computed into `levels`.
pub(crate) fn find_degree_counted<T: Sample>(
    values: &[T],
    tolerance: f64,
    max_depth: usize,
    levels: &mut usize,
) -> Result<Option<Degree<T>>, InferenceError> {
    let mut current = values.to_vec();
    let mut degree  = 0;

    loop {
        if current.len() < 3 {
            trace!(degree, len = current.len(), "too few values left to difference");
            return Ok(None);
        }
        if degree == max_depth {
            return Err(InferenceError::DepthExceeded { limit: max_depth });
        }

        current = first_differences(&current);
        degree += 1;
        *levels += 1;

        if all_equal(&current, tolerance) {
            trace!(degree, "differences became constant");
            return Ok(Some(Degree {
                degree,
                nth_difference: current.swap_remove(0),
            }));
        }
    }
}
