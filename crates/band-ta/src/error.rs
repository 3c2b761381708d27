//! Error types for band-ta.
//!
//! Genuinely invalid input (an empty series, a zero lookback, an out of range
//! smoothing factor) is reported through [`Error`]. Well-defined mathematical
//! degeneracies such as the variance of a one-element window, or the ATR of
//! zero periods, are values rather than errors.

use thiserror::Error;

/// The main error type for band-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input series or window is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The lookback or period parameter is invalid.
    ///
    /// Returned when a lookback of zero is given to an operation that needs
    /// at least one sample per window.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A custom EWMA smoothing factor is outside `(0, 1)`.
    #[error("invalid smoothing factor: {reason}")]
    InvalidSmoothing {
        /// Description of the accepted range.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// Occurs when a `usize` window length or period count cannot be
    /// represented in the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the band-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
