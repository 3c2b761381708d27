//! Window statistics: mean, population variance, standard deviation.
//!
//! These are the primitives every band and ATR computation is built from.
//! All three reject an empty window with [`Error::EmptyInput`].
//!
//! # Mathematical Conventions
//!
//! - **Population variance**: divides by `n`, never `n - 1`.
//! - **Two-pass variance**: the mean is computed first and the squared
//!   deviations summed in a second pass over the window.
//!
//! # Example
//!
//! ```
//! use band_ta::kernels::stats::{mean, stddev, variance};
//!
//! let window = [1.0_f64, 3.0, 5.0, 7.0];
//! assert_eq!(mean(&window).unwrap(), 4.0);
//! assert_eq!(variance(&window).unwrap(), 5.0);
//! assert!((stddev(&window).unwrap() - 5.0_f64.sqrt()).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::{SeriesElement, ValidatedInput};

/// Computes the arithmetic mean of a window.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `xs` is empty.
#[must_use = "this returns a Result with the mean, which should be used"]
pub fn mean<T: SeriesElement>(xs: &[T]) -> Result<T> {
    xs.validate_not_empty()?;
    let n = T::from_usize(xs.len())?;
    let sum = xs.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(sum / n)
}

/// Computes the population variance of a window.
///
/// A one-element window has variance zero.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `xs` is empty.
#[must_use = "this returns a Result with the variance, which should be used"]
pub fn variance<T: SeriesElement>(xs: &[T]) -> Result<T> {
    let avg = mean(xs)?;
    let n = T::from_usize(xs.len())?;
    let total = xs.iter().fold(T::zero(), |acc, &x| {
        let diff = x - avg;
        acc + diff * diff
    });
    Ok(total / n)
}

/// Computes the population standard deviation of a window.
///
/// A NaN result (which a negative rounding residue in the variance would
/// produce) is clamped to zero.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `xs` is empty.
#[must_use = "this returns a Result with the standard deviation, which should be used"]
pub fn stddev<T: SeriesElement>(xs: &[T]) -> Result<T> {
    let res = variance(xs)?.sqrt();
    if res.is_nan() {
        Ok(T::zero())
    } else {
        Ok(res)
    }
}
