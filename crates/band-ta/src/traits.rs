//! Numeric element trait and input validation.
//!
//! Every operation in band-ta is written once against [`SeriesElement`],
//! which is blanket-implemented for `f32` and `f64`. The two precisions
//! share one algorithm and differ only by floating-point rounding.
//!
//! # Example
//!
//! ```
//! use band_ta::traits::{validate_lookback, SeriesElement, ValidatedInput};
//!
//! fn window_sum<T: SeriesElement>(data: &[T], lookback: usize) -> band_ta::Result<T> {
//!     validate_lookback(lookback)?;
//!     data.validate_not_empty()?;
//!     Ok(data.iter().take(lookback).fold(T::zero(), |acc, &x| acc + x))
//! }
//!
//! assert_eq!(window_sum(&[1.0_f64, 2.0, 3.0], 2).unwrap(), 3.0);
//! assert!(window_sum::<f32>(&[], 2).is_err());
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A type usable as an element of a price series.
///
/// Extends `num_traits::Float` with fallible conversions used when a window
/// length or period count enters the arithmetic.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the default EWMA smoothing factor `2 / (lookback + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validation helpers for input series.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a lookback or period count is non-zero.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `lookback` is zero.
#[inline]
pub const fn validate_lookback(lookback: usize) -> Result<()> {
    if lookback == 0 {
        Err(Error::InvalidPeriod {
            period: lookback,
            reason: "lookback must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates a series and lookback pair for a band or EWMA builder.
///
/// # Errors
///
/// - `Error::EmptyInput` if the series is empty
/// - `Error::InvalidPeriod` if the lookback is zero
#[inline]
pub fn validate_series_input<T: SeriesElement>(series: &[T], lookback: usize) -> Result<()> {
    series.validate_not_empty()?;
    validate_lookback(lookback)
}
