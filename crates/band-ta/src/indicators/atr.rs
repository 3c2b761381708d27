//! Average True Range (ATR) indicator.
//!
//! The Average True Range is a volatility indicator developed by J. Welles
//! Wilder Jr. Here it is computed over a single price series that is split
//! into consecutive, non-overlapping blocks ("periods") of a fixed number of
//! samples. Each complete block yields one True Range; the ATR is Wilder's
//! smoothing of those ranges.
//!
//! # Algorithm
//!
//! 1. Split the series into blocks of `block_size` samples. A trailing partial
//!    block is discarded; a true range needs a complete period.
//! 2. For each block compute the True Range against the last sample of the
//!    previous block (the first block has no prior close).
//! 3. Seed the ATR with the simple mean of the first `n` true ranges, then
//!    apply Wilder's recurrence to every later block.
//!
//! # Formula
//!
//! ```text
//! TR       = max(high, prior_close) - min(low, prior_close)
//! ATR[n-1] = SMA(TR[0..n])
//! ATR[i]   = (ATR[i-1] × (n - 1) + TR[i]) / n
//! ```
//!
//! # Degenerate inputs
//!
//! Wilder's recurrence has no meaning for `n = 0` or an empty block, so
//! [`rolling_atr`] and [`static_atr`] return zero in those cases instead of an
//! error. When there are not more complete blocks than `n`, [`static_atr`]
//! returns the simple mean of the available true ranges as an approximation.
//!
//! # Example
//!
//! ```
//! use band_ta::indicators::atr::{static_atr, true_range};
//!
//! assert_eq!(true_range(&[1.0_f64, 0.0, 4.0, 2.0, 7.0, 9.0, 4.0], None), 8.0);
//! assert_eq!(true_range(&[1.0_f64, 0.0, 4.0, 2.0, 7.0, 9.0, 4.0], Some(11.0)), 10.0);
//!
//! let series = [
//!     1.0_f64, 4.0, 2.0, 7.0, 9.0, 4.0, 5.0, 6.0, 7.0, 9.0,
//!     4.0, 7.0, 6.0, 9.0, 2.0, 3.0, 10.0, 12.0, 11.0, 15.0,
//! ];
//! let atr = static_atr(&series, 3, 5).unwrap();
//! assert!((atr - 8.777_777_777_777_779).abs() < 1e-12);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::kernels::stats::mean;
use crate::traits::{validate_lookback, SeriesElement, ValidatedInput};

/// Returns the number of leading zero sentinels in an [`atr_curve`].
///
/// The first ATR value needs `periods` true ranges, so the curve's first
/// valid entry is at block `periods - 1`.
///
/// ```
/// use band_ta::indicators::atr::atr_curve_lookback;
///
/// assert_eq!(atr_curve_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn atr_curve_lookback(periods: usize) -> usize {
    if periods == 0 {
        0
    } else {
        periods - 1
    }
}

/// Returns the minimum series length that yields a fully warmed-up ATR.
///
/// ```
/// use band_ta::indicators::atr::atr_min_len;
///
/// assert_eq!(atr_min_len(14, 1), 14);
/// assert_eq!(atr_min_len(3, 5), 15);
/// ```
#[inline]
#[must_use]
pub const fn atr_min_len(periods: usize, block_size: usize) -> usize {
    periods.saturating_mul(block_size)
}

/// Computes Wilder's True Range of one period.
///
/// `high` is the maximum of the window and `low` the minimum of its strictly
/// positive samples; non-positive samples are treated as placeholders and
/// never selected as the low.
///
/// - Without a prior close the range is `high - low`.
/// - With a prior close it is `max(high, prior) - min(low, prior)`.
///
/// A prior close of exactly zero means "no prior close". An empty window, or
/// a window without any positive sample, has a true range of zero. The result
/// is never negative.
///
/// ```
/// use band_ta::indicators::atr::true_range;
///
/// assert_eq!(true_range(&[5.0_f64, 5.0, 5.0], None), 0.0);
/// assert_eq!(true_range(&[2.0_f64, 3.0], Some(1.0)), 2.0);
/// assert_eq!(true_range(&[0.0_f64, 0.0], Some(10.0)), 0.0);
/// ```
#[must_use]
pub fn true_range<T: SeriesElement>(window: &[T], prior_close: Option<T>) -> T {
    let mut high: Option<T> = None;
    let mut low: Option<T> = None;

    for &v in window {
        if high.map_or(true, |h| v > h) {
            high = Some(v);
        }
        if v > T::zero() && low.map_or(true, |l| v < l) {
            low = Some(v);
        }
    }

    // No positive sample means no usable low
    let (Some(high), Some(low)) = (high, low) else {
        return T::zero();
    };

    let range = match prior_close.filter(|c| !c.is_zero()) {
        None => high - low,
        Some(close) => high.max(close) - low.min(close),
    };

    range.max(T::zero())
}

/// Computes the next ATR value with Wilder's smoothing.
///
/// `((n - 1) × last_atr + cur_tr) / n`. Returns zero when `periods` is zero.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `periods` cannot be represented in `T`.
///
/// ```
/// use band_ta::indicators::atr::rolling_atr;
///
/// assert_eq!(rolling_atr(8.0_f64, 3.0, 5).unwrap(), 7.0);
/// assert_eq!(rolling_atr(8.0_f64, 3.0, 0).unwrap(), 0.0);
/// ```
pub fn rolling_atr<T: SeriesElement>(last_atr: T, cur_tr: T, periods: usize) -> Result<T> {
    if periods == 0 {
        return Ok(T::zero());
    }
    let n = T::from_usize(periods)?;
    let n_minus_one = T::from_usize(periods - 1)?;
    Ok(wilder_step(last_atr, cur_tr, n, n_minus_one))
}

#[inline]
fn wilder_step<T: SeriesElement>(last_atr: T, cur_tr: T, n: T, n_minus_one: T) -> T {
    (last_atr * n_minus_one + cur_tr) / n
}

/// Caller-owned ATR recurrence state.
///
/// Created only by [`AtrState::seed`] from the warm-up true ranges, then
/// advanced one true range at a time.
///
/// ```
/// use band_ta::indicators::atr::{rolling_atr, AtrState};
///
/// let state = AtrState::seed(&[8.0_f64, 5.0, 7.0]).unwrap();
/// let next = state.advance(13.0);
/// assert_eq!(next.value(), rolling_atr(state.value(), 13.0, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtrState<T> {
    value: T,
    periods: usize,
    n: T,
    n_minus_one: T,
}

impl<T: SeriesElement> AtrState<T> {
    /// Seeds the ATR with the simple mean of the warm-up true ranges.
    ///
    /// The Wilder period count is the number of warm-up values.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if `warmup` is empty
    /// - `Error::NumericConversion` if the period count cannot be represented in `T`
    pub fn seed(warmup: &[T]) -> Result<Self> {
        let value = mean(warmup)?;
        let periods = warmup.len();
        Ok(Self {
            value,
            periods,
            n: T::from_usize(periods)?,
            n_minus_one: T::from_usize(periods - 1)?,
        })
    }

    /// Consumes the state and folds in the next period's true range.
    #[inline]
    #[must_use]
    pub fn advance(self, true_range: T) -> Self {
        Self {
            value: wilder_step(self.value, true_range, self.n, self.n_minus_one),
            ..self
        }
    }

    /// The current ATR value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }

    /// The Wilder period count `n`.
    #[inline]
    #[must_use]
    pub const fn periods(&self) -> usize {
        self.periods
    }
}

/// Computes one true range per complete, non-overlapping block of the series.
///
/// Each block's prior close is the last sample of the previous block. The
/// trailing partial block is discarded.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `block_size` is zero.
///
/// ```
/// use band_ta::indicators::atr::block_true_ranges;
///
/// let trs = block_true_ranges(&[1.0_f64, 4.0, 2.0, 7.0, 9.0, 4.0], 2).unwrap();
/// assert_eq!(trs, vec![3.0, 5.0, 5.0]);
/// ```
pub fn block_true_ranges<T: SeriesElement>(series: &[T], block_size: usize) -> Result<Vec<T>> {
    validate_lookback(block_size)?;

    Ok(series
        .chunks_exact(block_size)
        .enumerate()
        .map(|(b, block)| {
            let prior = (b > 0).then(|| series[b * block_size - 1]);
            true_range(block, prior)
        })
        .collect())
}

/// Computes a single ATR value from a full series.
///
/// `periods` is Wilder's `n` and `block_size` the number of samples in one
/// period. Returns zero if either is zero, or if the series holds no complete
/// block.
///
/// If the series holds `periods` complete blocks or fewer, the simple mean of
/// their true ranges is returned as an approximation; no Wilder recursion is
/// applied.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a count cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use band_ta::indicators::atr::static_atr;
///
/// let series = [1.0_f64, 4.0, 2.0, 7.0, 9.0, 4.0];
///
/// // One complete block of 5: the ATR is its true range
/// assert_eq!(static_atr(&series, 3, 5).unwrap(), 8.0);
/// // No complete block of 10
/// assert_eq!(static_atr(&series, 10, 10).unwrap(), 0.0);
/// ```
pub fn static_atr<T: SeriesElement>(series: &[T], periods: usize, block_size: usize) -> Result<T> {
    if periods == 0 || block_size == 0 {
        return Ok(T::zero());
    }

    let trs = block_true_ranges(series, block_size)?;

    if trs.len() <= periods {
        debug!(
            blocks = trs.len(),
            periods, "not enough complete blocks for a Wilder warm-up, using simple mean"
        );
        if trs.is_empty() {
            return Ok(T::zero());
        }
        return mean(&trs);
    }

    let seed = AtrState::seed(&trs[..periods])?;
    let state = trs[periods..]
        .iter()
        .fold(seed, |state, &tr| state.advance(tr));

    Ok(state.value())
}

/// Computes the full ATR curve of a series, one value per complete block.
///
/// Entries before block `periods - 1` are zero. The entry at `periods - 1` is
/// the simple mean of the first `periods` true ranges, and later entries
/// apply Wilder's recurrence. A series with fewer than `periods` complete
/// blocks yields only zeros.
///
/// Whenever the series holds at least `periods` complete blocks, the last
/// value equals [`static_atr`] for the same arguments.
///
/// # Errors
///
/// - `Error::EmptyInput` if `series` is empty
/// - `Error::InvalidPeriod` if `periods` or `block_size` is zero
///
/// ```
/// use band_ta::indicators::atr::atr_curve;
///
/// let curve = atr_curve(&[1.0_f64, 4.0, 2.0, 7.0, 9.0, 4.0], 2, 2).unwrap();
/// assert_eq!(curve, vec![0.0, 4.0, 4.5]);
/// ```
pub fn atr_curve<T: SeriesElement>(
    series: &[T],
    periods: usize,
    block_size: usize,
) -> Result<Vec<T>> {
    series.validate_not_empty()?;
    validate_lookback(periods)?;

    let trs = block_true_ranges(series, block_size)?;
    let mut curve = vec![T::zero(); trs.len()];

    if trs.len() < periods {
        return Ok(curve);
    }

    let mut state = AtrState::seed(&trs[..periods])?;
    curve[periods - 1] = state.value();

    for (i, &tr) in trs.iter().enumerate().skip(periods) {
        state = state.advance(tr);
        curve[i] = state.value();
    }

    Ok(curve)
}

/// Configuration for ATR computation.
///
/// Defaults to Wilder's conventional 14 periods of one sample each, which
/// makes the true range a close-to-close range.
///
/// ```
/// use band_ta::indicators::atr::Atr;
///
/// let series: Vec<f64> = (1..=40).map(f64::from).collect();
/// let atr = Atr::new().periods(3).block_size(5).compute(&series).unwrap();
/// assert!(atr > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atr {
    periods: usize,
    block_size: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self {
            periods: 14,
            block_size: 1,
        }
    }
}

impl Atr {
    /// Creates an ATR configuration with default parameters (14, 1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets Wilder's period count `n`.
    ///
    /// Default: 14
    #[must_use]
    pub const fn periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the number of samples per period.
    ///
    /// Default: 1
    #[must_use]
    pub const fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Computes the final ATR value with [`static_atr`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a count cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, series: &[T]) -> Result<T> {
        static_atr(series, self.periods, self.block_size)
    }

    /// Computes the ATR curve with [`atr_curve`].
    ///
    /// # Errors
    ///
    /// See [`atr_curve`].
    pub fn curve<T: SeriesElement>(&self, series: &[T]) -> Result<Vec<T>> {
        atr_curve(series, self.periods, self.block_size)
    }

    /// Returns the period count.
    #[must_use]
    pub const fn get_periods(&self) -> usize {
        self.periods
    }

    /// Returns the block size.
    #[must_use]
    pub const fn get_block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the minimum series length for a fully warmed-up ATR.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        atr_min_len(self.periods, self.block_size)
    }
}
