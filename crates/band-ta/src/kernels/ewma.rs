//! Exponentially weighted moving average recurrence.
//!
//! The single-step kernel [`rolling_ema`] is shared by every rolling
//! computation in the crate: the EWMA series, the EMA midpoint of
//! Bollinger Bands, and (with `λ = 1/n`) Wilder's ATR smoothing.
//!
//! # Formula
//!
//! ```text
//! EMA[lookback-1] = SMA(series[0..lookback])
//! EMA[i]          = λ × series[i] + (1 - λ) × EMA[i-1]
//! ```
//!
//! When the caller passes `λ = 0` the conventional default
//! `λ = 2 / (lookback + 1)` is used.
//!
//! # Caller-owned state
//!
//! Incremental users thread an [`EmaState`] through their loop. The state can
//! only be created by seeding it from a window, so there is no way to recurse
//! from an uninitialized "last" value.
//!
//! ```
//! use band_ta::kernels::ewma::{ewma_series, EmaState};
//!
//! let series = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let batch = ewma_series(&series, 0.5, 3).unwrap();
//!
//! let mut state = EmaState::seed(&series[..3], 0.5).unwrap();
//! assert_eq!(state.value(), batch[2]);
//! for (i, &v) in series.iter().enumerate().skip(3) {
//!     state = state.advance(v);
//!     assert_eq!(state.value(), batch[i]);
//! }
//! ```

use tracing::debug;

use crate::error::{Error, Result};
use crate::kernels::stats::mean;
use crate::traits::{validate_lookback, validate_series_input, SeriesElement};

/// Returns the number of leading zero sentinels in an EWMA series.
///
/// ```
/// use band_ta::kernels::ewma::ewma_lookback;
///
/// assert_eq!(ewma_lookback(10), 9);
/// assert_eq!(ewma_lookback(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn ewma_lookback(lookback: usize) -> usize {
    if lookback == 0 {
        0
    } else {
        lookback - 1
    }
}

/// Computes the next EWMA value from the current sample and the prior EWMA.
///
/// `v × λ + (1 - λ) × last`. Total and O(1); the caller is responsible for
/// `last` being a correctly seeded value.
///
/// ```
/// use band_ta::kernels::ewma::rolling_ema;
///
/// assert_eq!(rolling_ema(10.0_f64, 20.0, 0.5), 15.0);
/// ```
#[inline]
#[must_use]
pub fn rolling_ema<T: SeriesElement>(v: T, last: T, smoothing: T) -> T {
    v * smoothing + (T::one() - smoothing) * last
}

/// Returns the conventional smoothing factor `2 / (lookback + 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `lookback` is zero.
#[inline]
pub fn default_smoothing<T: SeriesElement>(lookback: usize) -> Result<T> {
    validate_lookback(lookback)?;
    Ok(T::two() / (T::from_usize(lookback)? + T::one()))
}

/// Resolves a caller-supplied smoothing factor.
///
/// Zero selects [`default_smoothing`] for `lookback`; any other value must
/// lie strictly between 0 and 1.
///
/// # Errors
///
/// - `Error::InvalidSmoothing` if a non-zero `smoothing` is outside `(0, 1)`
/// - `Error::InvalidPeriod` if the default is requested for a zero lookback
pub fn resolve_smoothing<T: SeriesElement>(smoothing: T, lookback: usize) -> Result<T> {
    if smoothing == T::zero() {
        return default_smoothing(lookback);
    }
    if smoothing > T::zero() && smoothing < T::one() {
        Ok(smoothing)
    } else {
        Err(Error::InvalidSmoothing {
            reason: "custom smoothing factor must be greater than 0 and less than 1",
        })
    }
}

/// Caller-owned EWMA recurrence state.
///
/// Holds the last EWMA value together with the smoothing factor it was
/// produced with. A fresh stream starts with [`seed`](Self::seed); a stream
/// interrupted after saving [`value`](Self::value) and
/// [`smoothing`](Self::smoothing) continues with [`resume`](Self::resume).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaState<T> {
    value: T,
    smoothing: T,
}

impl<T: SeriesElement> EmaState<T> {
    /// Seeds the recurrence with the simple mean of `window`.
    ///
    /// A zero `smoothing` selects the default for a lookback of
    /// `window.len()`.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if `window` is empty
    /// - `Error::InvalidSmoothing` if a non-zero `smoothing` is outside `(0, 1)`
    pub fn seed(window: &[T], smoothing: T) -> Result<Self> {
        let value = mean(window)?;
        let smoothing = resolve_smoothing(smoothing, window.len())?;
        Ok(Self { value, smoothing })
    }

    /// Rebuilds a state from a saved EWMA value and its smoothing factor.
    ///
    /// The factor must be the resolved one, strictly between 0 and 1; the
    /// zero default cannot be resolved without a lookback.
    ///
    /// ```
    /// use band_ta::kernels::ewma::EmaState;
    ///
    /// let live = EmaState::seed(&[2.0_f64, 4.0], 0.5).unwrap().advance(6.0);
    /// let restored = EmaState::resume(live.value(), live.smoothing()).unwrap();
    /// assert_eq!(restored.advance(8.0), live.advance(8.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSmoothing` if `smoothing` is not in `(0, 1)`.
    pub fn resume(value: T, smoothing: T) -> Result<Self> {
        if smoothing > T::zero() && smoothing < T::one() {
            Ok(Self { value, smoothing })
        } else {
            Err(Error::InvalidSmoothing {
                reason: "resumed smoothing factor must be greater than 0 and less than 1",
            })
        }
    }

    /// Consumes the state and applies one step of the recurrence.
    #[inline]
    #[must_use]
    pub fn advance(self, sample: T) -> Self {
        Self {
            value: rolling_ema(sample, self.value, self.smoothing),
            smoothing: self.smoothing,
        }
    }

    /// The current EWMA value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }

    /// The smoothing factor applied by [`advance`](Self::advance).
    #[inline]
    #[must_use]
    pub const fn smoothing(&self) -> T {
        self.smoothing
    }
}

/// Computes an EWMA series aligned index-for-index with the input.
///
/// The first `lookback - 1` entries are zero, the entry at `lookback - 1` is
/// the simple mean of the first `lookback` samples, and every later entry
/// applies [`rolling_ema`] to the sample at that index.
///
/// A `lookback` longer than the series is clamped to the series length, so
/// the only non-zero entry is then the last one (the mean of the whole
/// series).
///
/// # Errors
///
/// - `Error::EmptyInput` if `series` is empty
/// - `Error::InvalidPeriod` if `lookback` is zero
/// - `Error::InvalidSmoothing` if a non-zero `smoothing` is outside `(0, 1)`
///
/// # Example
///
/// ```
/// use band_ta::kernels::ewma::ewma_series;
///
/// let out = ewma_series(&[2.0_f64, 4.0, 6.0, 8.0], 0.5, 2).unwrap();
/// assert_eq!(out, vec![0.0, 3.0, 4.5, 6.25]);
/// ```
#[must_use = "this returns a Result with the EWMA values, which should be used"]
pub fn ewma_series<T: SeriesElement>(series: &[T], smoothing: T, lookback: usize) -> Result<Vec<T>> {
    validate_series_input(series, lookback)?;

    let size = series.len();
    let lookback = if lookback > size {
        debug!(lookback, size, "ewma lookback exceeds series length, clamping");
        size
    } else {
        lookback
    };

    let mut out = vec![T::zero(); size];
    let mut state = EmaState::seed(&series[..lookback], smoothing)?;
    out[lookback - 1] = state.value();

    for (i, &v) in series.iter().enumerate().skip(lookback) {
        state = state.advance(v);
        out[i] = state.value();
    }

    Ok(out)
}
