//! Bollinger Bands indicator.
//!
//! A Bollinger Bound is a midpoint plus and minus a multiple of the
//! population standard deviation of a window:
//!
//! ```text
//! leg   = stddev(window) × multiplier
//! lower = midpoint - leg
//! upper = midpoint + leg
//! ```
//!
//! A Band is one bound per input index. Indices without a complete window
//! hold [`Bound::empty`].
//!
//! # Midpoint strategies
//!
//! - [`Midpoint::Constant`]: a fixed level supplied by the caller, such as a
//!   target price.
//! - [`Midpoint::Sma`]: the simple mean of the window.
//! - [`Midpoint::Ema`]: an exponential moving average of the current
//!   (last) sample of each window, seeded with the mean of the first window.
//!
//! # Static and rolling modes
//!
//! [`bollinger_band`] builds a whole band from a complete series. Live feeds
//! instead drive the loop themselves, either through the
//! `rolling_bollinger_*` functions or through a [`RollingBollinger`]
//! accumulator. The static builder is a single forward pass over the same
//! accumulator, so both modes produce identical bounds at every aligned
//! index.
//!
//! # Example
//!
//! ```
//! use band_ta::indicators::bollinger::{bollinger_band, Midpoint, RollingBollinger};
//!
//! let series = [20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0];
//! let band = bollinger_band(&series, 4, Midpoint::Ema { smoothing: 0.0 }, 2.0).unwrap();
//!
//! // First 3 entries have no complete window
//! assert!(band[..3].iter().all(|b| b.is_empty()));
//!
//! // A live feed stepping through the same windows sees the same bounds
//! let mut rolling = RollingBollinger::new(Midpoint::Ema { smoothing: 0.0 }, 2.0);
//! for end in 4..=series.len() {
//!     let (bound, next) = rolling.step(&series[end - 4..end]).unwrap();
//!     assert_eq!(bound, band[end - 1]);
//!     rolling = next;
//! }
//! ```

use crate::error::{Error, Result};
use crate::kernels::ewma::{resolve_smoothing, EmaState};
use crate::kernels::stats::{mean, stddev};
use crate::traits::{validate_series_input, SeriesElement};

/// Returns the number of leading [`Bound::empty`] entries in a band.
///
/// ```
/// use band_ta::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// assert_eq!(bollinger_lookback(5), 4);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(lookback: usize) -> usize {
    if lookback == 0 {
        0
    } else {
        lookback - 1
    }
}

/// Returns the minimum series length producing at least one bound.
///
/// ```
/// use band_ta::indicators::bollinger::bollinger_min_len;
///
/// assert_eq!(bollinger_min_len(20), 20);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_min_len(lookback: usize) -> usize {
    lookback
}

/// One Bollinger Band observation.
///
/// `upper - midpoint == midpoint - lower` for every bound produced by
/// [`bollinger_bound`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bound<T> {
    /// Midpoint minus the leg.
    pub lower: T,
    /// Center of the bound.
    pub midpoint: T,
    /// Midpoint plus the leg.
    pub upper: T,
}

/// A Bollinger Band: one [`Bound`] per input index.
pub type Band<T> = Vec<Bound<T>>;

impl<T: SeriesElement> Bound<T> {
    /// The all-zero sentinel used where no complete window exists.
    ///
    /// A computed bound can also be all zeros, for example a constant
    /// midpoint of zero over a window of zeros. Positional information
    /// ([`bollinger_lookback`]) is the reliable way to locate sentinels in
    /// a band when such inputs are possible.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lower: T::zero(),
            midpoint: T::zero(),
            upper: T::zero(),
        }
    }

    /// Returns true if every component is zero.
    ///
    /// This cannot distinguish the sentinel from a computed all-zero bound;
    /// see [`Bound::empty`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_zero() && self.midpoint.is_zero() && self.upper.is_zero()
    }

    /// Distance between the upper and lower bounds.
    #[inline]
    #[must_use]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Returns true if this bound is strictly wider than `other`.
    ///
    /// ```
    /// use band_ta::indicators::bollinger::Bound;
    ///
    /// let wide = Bound { lower: -5.0_f32, midpoint: 0.0, upper: 5.0 };
    /// let narrow = Bound { lower: 2.0_f32, midpoint: 4.0, upper: 6.0 };
    /// assert!(wide.is_wider_than(&narrow));
    /// assert!(!narrow.is_wider_than(&wide));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_wider_than(&self, other: &Self) -> bool {
        self.width() > other.width()
    }
}

/// Midpoint strategy of a Bollinger Band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Midpoint<T> {
    /// A fixed midpoint for every bound.
    Constant(T),
    /// The simple mean of each window.
    Sma,
    /// An exponential moving average of the latest sample.
    ///
    /// A smoothing factor of zero selects `2 / (lookback + 1)`.
    Ema {
        /// Smoothing factor λ, in `(0, 1)` or zero for the default.
        smoothing: T,
    },
}

/// Computes one Bollinger Bound from a window and a midpoint.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `window` is empty.
///
/// # Example
///
/// ```
/// use band_ta::indicators::bollinger::bollinger_bound;
///
/// let b = bollinger_bound(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], 4.0, 2.0).unwrap();
/// assert_eq!(b.midpoint, 4.0);
/// assert!((b.lower - -1.656_854_249).abs() < 1e-8);
/// assert!((b.upper - 9.656_854_249).abs() < 1e-8);
/// ```
#[must_use = "this returns a Result with the bound, which should be used"]
pub fn bollinger_bound<T: SeriesElement>(window: &[T], k: T, multiplier: T) -> Result<Bound<T>> {
    let leg = stddev(window)? * multiplier;
    Ok(Bound {
        lower: k - leg,
        midpoint: k,
        upper: k + leg,
    })
}

/// Computes the bound of one window around a constant midpoint `k`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `window` is empty.
pub fn rolling_bollinger_const<T: SeriesElement>(
    window: &[T],
    k: T,
    multiplier: T,
) -> Result<Bound<T>> {
    bollinger_bound(window, k, multiplier)
}

/// Computes the bound of one window around its simple mean.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `window` is empty.
pub fn rolling_bollinger_sma<T: SeriesElement>(window: &[T], multiplier: T) -> Result<Bound<T>> {
    let k = mean(window)?;
    bollinger_bound(window, k, multiplier)
}

/// Computes the bound of one window around an exponential moving average.
///
/// On the first call of a sequence pass `prev = None`: the midpoint is seeded
/// with the mean of the window and `smoothing` (zero for the default of
/// `2 / (window.len() + 1)`) is fixed into the returned state. On every later
/// call pass the state returned by the previous call; the midpoint is then
/// the EMA of the window's last sample and `smoothing` is not consulted.
///
/// # Errors
///
/// - `Error::EmptyInput` if `window` is empty
/// - `Error::InvalidSmoothing` if a seeding `smoothing` is outside `(0, 1)`
///
/// # Example
///
/// ```
/// use band_ta::indicators::bollinger::rolling_bollinger_ema;
///
/// let (first, state) = rolling_bollinger_ema(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], None, 0.5, 2.0).unwrap();
/// assert_eq!(first.midpoint, 5.0);
///
/// let (second, _) = rolling_bollinger_ema(&[3.0, 5.0, 7.0, 9.0, 11.0], Some(state), 0.5, 2.0).unwrap();
/// assert_eq!(second.midpoint, 8.0);
/// ```
pub fn rolling_bollinger_ema<T: SeriesElement>(
    window: &[T],
    prev: Option<EmaState<T>>,
    smoothing: T,
    multiplier: T,
) -> Result<(Bound<T>, EmaState<T>)> {
    let state = match (prev, window.last()) {
        (_, None) => return Err(Error::EmptyInput),
        (None, Some(_)) => EmaState::seed(window, smoothing)?,
        (Some(state), Some(&current)) => state.advance(current),
    };
    let bound = bollinger_bound(window, state.value(), multiplier)?;
    Ok((bound, state))
}

/// Caller-owned accumulator for a rolling Bollinger Band.
///
/// Each [`step`](Self::step) consumes the accumulator and returns the bound
/// together with the accumulator for the next window, so the EMA chain can
/// neither be skipped nor restarted by accident.
///
/// ```
/// use band_ta::indicators::bollinger::{Midpoint, RollingBollinger};
///
/// let rolling = RollingBollinger::new(Midpoint::Sma, 2.0_f64);
/// let (bound, rolling) = rolling.step(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(bound.midpoint, 2.0);
/// assert_eq!(rolling.last_midpoint(), Some(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingBollinger<T> {
    midpoint: Midpoint<T>,
    multiplier: T,
    ema: Option<EmaState<T>>,
    last: Option<T>,
}

impl<T: SeriesElement> RollingBollinger<T> {
    /// Starts a new rolling sequence.
    #[must_use]
    pub const fn new(midpoint: Midpoint<T>, multiplier: T) -> Self {
        Self {
            midpoint,
            multiplier,
            ema: None,
            last: None,
        }
    }

    /// Computes the bound of the next window.
    ///
    /// `window` should end at the newest observation.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if `window` is empty
    /// - `Error::InvalidSmoothing` if the EMA strategy's smoothing is outside `(0, 1)`
    pub fn step(self, window: &[T]) -> Result<(Bound<T>, Self)> {
        let (bound, ema) = match self.midpoint {
            Midpoint::Constant(k) => (rolling_bollinger_const(window, k, self.multiplier)?, None),
            Midpoint::Sma => (rolling_bollinger_sma(window, self.multiplier)?, None),
            Midpoint::Ema { smoothing } => {
                let (bound, state) =
                    rolling_bollinger_ema(window, self.ema, smoothing, self.multiplier)?;
                (bound, Some(state))
            }
        };

        let next = Self {
            ema,
            last: Some(bound.midpoint),
            ..self
        };
        Ok((bound, next))
    }

    /// Midpoint of the most recent bound, if any step has run.
    #[inline]
    #[must_use]
    pub const fn last_midpoint(&self) -> Option<T> {
        self.last
    }

    /// The midpoint strategy of this sequence.
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> Midpoint<T> {
        self.midpoint
    }
}

/// Builds a Bollinger Band over a whole series.
///
/// With `j = i + 1`, index `i` holds [`Bound::empty`] while `j < lookback`,
/// and otherwise the bound of the window `series[j - lookback..j]`, which
/// ends at and includes the current sample. A `lookback` longer than the
/// series yields a band of sentinels only.
///
/// # Errors
///
/// - `Error::EmptyInput` if `series` is empty
/// - `Error::InvalidPeriod` if `lookback` is zero
/// - `Error::InvalidSmoothing` if the EMA strategy's smoothing is outside `(0, 1)`
///
/// # Example
///
/// ```
/// use band_ta::indicators::bollinger::{bollinger_band, Midpoint};
///
/// let series = [1.0_f64, 3.0, 5.0, 7.0, 9.0];
/// let band = bollinger_band(&series, 5, Midpoint::Sma, 2.0).unwrap();
///
/// assert!(band[3].is_empty());
/// assert_eq!(band[4].midpoint, 5.0);
/// ```
#[must_use = "this returns a Result with the band, which should be used"]
pub fn bollinger_band<T: SeriesElement>(
    series: &[T],
    lookback: usize,
    midpoint: Midpoint<T>,
    multiplier: T,
) -> Result<Band<T>> {
    validate_series_input(series, lookback)?;
    if let Midpoint::Ema { smoothing } = midpoint {
        resolve_smoothing(smoothing, lookback)?;
    }

    let mut band = vec![Bound::empty(); series.len()];
    let mut rolling = RollingBollinger::new(midpoint, multiplier);

    for j in lookback..=series.len() {
        let (bound, next) = rolling.step(&series[j - lookback..j])?;
        band[j - 1] = bound;
        rolling = next;
    }

    Ok(band)
}

/// Builds a band around a constant midpoint `k`.
///
/// # Errors
///
/// See [`bollinger_band`].
pub fn static_bollinger_const<T: SeriesElement>(
    series: &[T],
    lookback: usize,
    k: T,
    multiplier: T,
) -> Result<Band<T>> {
    bollinger_band(series, lookback, Midpoint::Constant(k), multiplier)
}

/// Builds a band around the simple moving average.
///
/// # Errors
///
/// See [`bollinger_band`].
pub fn static_bollinger_sma<T: SeriesElement>(
    series: &[T],
    lookback: usize,
    multiplier: T,
) -> Result<Band<T>> {
    bollinger_band(series, lookback, Midpoint::Sma, multiplier)
}

/// Builds a band around an exponential moving average.
///
/// A `smoothing` of zero selects `2 / (lookback + 1)`.
///
/// # Errors
///
/// See [`bollinger_band`].
pub fn static_bollinger_ema<T: SeriesElement>(
    series: &[T],
    lookback: usize,
    smoothing: T,
    multiplier: T,
) -> Result<Band<T>> {
    bollinger_band(series, lookback, Midpoint::Ema { smoothing }, multiplier)
}

/// Configuration for Bollinger Bands.
///
/// Defaults to the conventional 20-sample lookback, a multiplier of 2.0 and a
/// simple moving average midpoint.
///
/// ```
/// use band_ta::indicators::bollinger::{Bollinger, Midpoint};
///
/// let series: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i % 7)).collect();
/// let band = Bollinger::new()
///     .lookback(10)
///     .midpoint(Midpoint::Ema { smoothing: 0.0 })
///     .compute(&series)
///     .unwrap();
/// assert_eq!(band.len(), series.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    lookback: usize,
    multiplier: f64,
    midpoint: Midpoint<f64>,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            lookback: 20,
            multiplier: 2.0,
            midpoint: Midpoint::Sma,
        }
    }
}

impl Bollinger {
    /// Creates a configuration with standard parameters (20, 2.0, SMA).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window size.
    ///
    /// Default: 20
    #[must_use]
    pub const fn lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Sets the standard deviation multiplier.
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the midpoint strategy.
    ///
    /// Default: [`Midpoint::Sma`]
    #[must_use]
    pub const fn midpoint(mut self, midpoint: Midpoint<f64>) -> Self {
        self.midpoint = midpoint;
        self
    }

    /// Builds the band over a whole series with [`bollinger_band`].
    ///
    /// # Errors
    ///
    /// See [`bollinger_band`]; additionally `Error::NumericConversion` if a
    /// parameter cannot be represented in `T`.
    pub fn compute<T: SeriesElement>(&self, series: &[T]) -> Result<Band<T>> {
        bollinger_band(
            series,
            self.lookback,
            self.typed_midpoint()?,
            T::from_f64(self.multiplier)?,
        )
    }

    /// Starts a [`RollingBollinger`] sequence with these parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a parameter cannot be represented in `T`.
    pub fn rolling<T: SeriesElement>(&self) -> Result<RollingBollinger<T>> {
        Ok(RollingBollinger::new(
            self.typed_midpoint()?,
            T::from_f64(self.multiplier)?,
        ))
    }

    fn typed_midpoint<T: SeriesElement>(&self) -> Result<Midpoint<T>> {
        Ok(match self.midpoint {
            Midpoint::Constant(k) => Midpoint::Constant(T::from_f64(k)?),
            Midpoint::Sma => Midpoint::Sma,
            Midpoint::Ema { smoothing } => Midpoint::Ema {
                smoothing: T::from_f64(smoothing)?,
            },
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn get_lookback(&self) -> usize {
        self.lookback
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the midpoint strategy.
    #[must_use]
    pub const fn get_midpoint(&self) -> Midpoint<f64> {
        self.midpoint
    }

    /// Returns the number of leading sentinels for this configuration.
    #[must_use]
    pub const fn sentinel_count(&self) -> usize {
        bollinger_lookback(self.lookback)
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        bollinger_min_len(self.lookback)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::kernels::ewma::ewma_series;

    fn approx_eq<T: num_traits::Float>(a: T, b: T, epsilon: T) -> bool {
        (a - b).abs() < epsilon
    }

    const EPSILON: f64 = 1e-10;
    const EPSILON_F32: f32 = 1e-5;

    fn sample_series() -> Vec<f64> {
        vec![
            20.0, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5, 22.0, 23.5,
        ]
    }

    // ==================== Bound Calculator ====================

    #[test]
    fn test_bollinger_bound_known_values() {
        let b = bollinger_bound(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], 4.0, 2.0).unwrap();
        let leg = 2.0 * 8.0_f64.sqrt();
        assert_eq!(b.midpoint, 4.0);
        assert!(approx_eq(b.lower, 4.0 - leg, EPSILON));
        assert!(approx_eq(b.upper, 4.0 + leg, EPSILON));
        assert!(approx_eq(b.lower, -1.6568542494923806, EPSILON));
        assert!(approx_eq(b.upper, 9.656854249492381, EPSILON));
    }

    #[test]
    fn test_bollinger_bound_f32() {
        let b = bollinger_bound(&[1.0_f32, 3.0, 5.0, 7.0, 9.0], 4.0, 2.0).unwrap();
        assert_eq!(b.midpoint, 4.0);
        assert!(approx_eq(b.lower, -1.656_854_2, EPSILON_F32));
        assert!(approx_eq(b.upper, 9.656_854, EPSILON_F32));
    }

    #[test]
    fn test_bollinger_bound_single_sample_collapses() {
        let b = bollinger_bound(&[12.0_f64], 10.0, 2.0).unwrap();
        assert_eq!(b.lower, 10.0);
        assert_eq!(b.upper, 10.0);
    }

    #[test]
    fn test_bollinger_bound_empty_window() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            bollinger_bound(&empty, 1.0, 2.0),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_bound_symmetry() {
        let b = bollinger_bound(&[3.0_f64, 8.5, 1.25, 9.0], 6.0, 1.5).unwrap();
        assert!(approx_eq(b.upper - b.midpoint, b.midpoint - b.lower, EPSILON));
    }

    #[test]
    fn test_bound_empty_sentinel() {
        let e: Bound<f64> = Bound::empty();
        assert!(e.is_empty());
        assert_eq!(e, Bound::default());
        assert_eq!(e.width(), 0.0);

        let b = Bound {
            lower: 0.0_f64,
            midpoint: 0.0,
            upper: 1.0,
        };
        assert!(!b.is_empty());
    }

    #[test]
    fn test_bound_computed_zero_looks_empty() {
        // A genuine bound over a flat zero window is indistinguishable
        // from the sentinel; only its position tells them apart
        let band = static_bollinger_const(&[0.0_f64; 4], 2, 0.0, 2.0).unwrap();
        assert!(band.iter().all(Bound::is_empty));
        assert_eq!(bollinger_lookback(2), 1);

        let computed = rolling_bollinger_const(&[0.0_f64, 0.0], 0.0, 2.0).unwrap();
        assert_eq!(computed, Bound::empty());
    }

    #[test]
    fn test_bound_is_wider_than() {
        let first = Bound {
            lower: -5.0_f32,
            midpoint: 0.0,
            upper: 5.0,
        };
        let second = Bound {
            lower: 2.0_f32,
            midpoint: 4.0,
            upper: 6.0,
        };
        assert!(first.is_wider_than(&second));
        assert!(!second.is_wider_than(&first));
        assert!(!first.is_wider_than(&first));
    }

    // ==================== Rolling Strategies ====================

    #[test]
    fn test_rolling_const() {
        let b = rolling_bollinger_const(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], 4.0, 2.0).unwrap();
        assert_eq!(b, bollinger_bound(&[1.0, 3.0, 5.0, 7.0, 9.0], 4.0, 2.0).unwrap());
    }

    #[test]
    fn test_rolling_sma() {
        let b = rolling_bollinger_sma(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], 2.0).unwrap();
        assert_eq!(b.midpoint, 5.0);
        assert!(approx_eq(b.upper, 5.0 + 2.0 * 8.0_f64.sqrt(), EPSILON));
    }

    #[test]
    fn test_rolling_ema_seed_then_recurse() {
        let (first, state) =
            rolling_bollinger_ema(&[1.0_f64, 3.0, 5.0, 7.0, 9.0], None, 0.5, 2.0).unwrap();
        assert_eq!(first.midpoint, 5.0);
        assert_eq!(state.value(), 5.0);

        let (second, state) =
            rolling_bollinger_ema(&[3.0, 5.0, 7.0, 9.0, 11.0], Some(state), 0.5, 2.0).unwrap();
        assert_eq!(second.midpoint, 8.0);
        assert_eq!(state.value(), 8.0);
        // Stddev of the second window is the same as the first
        assert!(approx_eq(second.width(), first.width(), EPSILON));
    }

    #[test]
    fn test_rolling_ema_default_smoothing_from_window() {
        // Window of 3 => λ = 0.5
        let (_, state) = rolling_bollinger_ema(&[1.0_f64, 2.0, 3.0], None, 0.0, 2.0).unwrap();
        assert!(approx_eq(state.smoothing(), 0.5, EPSILON));
    }

    #[test]
    fn test_rolling_ema_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            rolling_bollinger_ema(&empty, None, 0.5, 2.0),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            rolling_bollinger_ema(&[1.0_f64, 2.0], None, 2.0, 2.0),
            Err(Error::InvalidSmoothing { .. })
        ));
    }

    #[test]
    fn test_rolling_accumulator_tracks_last_midpoint() {
        let rolling = RollingBollinger::new(Midpoint::Constant(10.0_f64), 1.0);
        assert_eq!(rolling.last_midpoint(), None);
        let (_, rolling) = rolling.step(&[9.0, 11.0]).unwrap();
        assert_eq!(rolling.last_midpoint(), Some(10.0));
        assert_eq!(rolling.midpoint(), Midpoint::Constant(10.0));
    }

    #[test]
    fn test_rolling_accumulator_empty_window() {
        let rolling = RollingBollinger::new(Midpoint::Sma, 2.0_f64);
        let empty: [f64; 0] = [];
        assert!(matches!(rolling.step(&empty), Err(Error::EmptyInput)));
    }

    // ==================== Static Band ====================

    #[test]
    fn test_band_sentinel_prefix_and_length() {
        let series = sample_series();
        let band = static_bollinger_sma(&series, 5, 2.0).unwrap();
        assert_eq!(band.len(), series.len());
        for b in &band[..bollinger_lookback(5)] {
            assert!(b.is_empty());
        }
        for b in &band[bollinger_lookback(5)..] {
            assert!(!b.is_empty());
        }
    }

    #[test]
    fn test_band_window_includes_current_sample() {
        let series = sample_series();
        let band = static_bollinger_sma(&series, 5, 2.0).unwrap();
        for i in 4..series.len() {
            let expected = rolling_bollinger_sma(&series[i - 4..=i], 2.0).unwrap();
            assert_eq!(band[i], expected);
        }
    }

    #[test]
    fn test_band_const_midpoint() {
        let band = static_bollinger_const(&sample_series(), 4, 21.0, 2.0).unwrap();
        for b in &band[3..] {
            assert_eq!(b.midpoint, 21.0);
        }
    }

    #[test]
    fn test_band_ema_matches_ewma_series() {
        let series = sample_series();
        let band = static_bollinger_ema(&series, 5, 0.0, 2.0).unwrap();
        let ewma = ewma_series(&series, 0.0, 5).unwrap();
        for i in 4..series.len() {
            assert_eq!(band[i].midpoint, ewma[i]);
        }
    }

    #[test]
    fn test_band_ema_first_bound_is_mean() {
        let series = sample_series();
        let band = static_bollinger_ema(&series, 5, 0.3, 2.0).unwrap();
        assert!(approx_eq(band[4].midpoint, 21.4, EPSILON));
        let expected = 0.3 * series[5] + 0.7 * band[4].midpoint;
        assert!(approx_eq(band[5].midpoint, expected, EPSILON));
    }

    #[test]
    fn test_band_symmetry() {
        let band = static_bollinger_ema(&sample_series(), 4, 0.0, 2.5).unwrap();
        for b in band.iter().filter(|b| !b.is_empty()) {
            assert!(approx_eq(b.upper - b.midpoint, b.midpoint - b.lower, 1e-9));
        }
    }

    #[test]
    fn test_band_lookback_longer_than_series() {
        let band = static_bollinger_sma(&[1.0_f64, 2.0, 3.0], 10, 2.0).unwrap();
        assert_eq!(band.len(), 3);
        assert!(band.iter().all(Bound::is_empty));
    }

    #[test]
    fn test_band_lookback_one() {
        let band = static_bollinger_sma(&[4.0_f64, 6.0], 1, 2.0).unwrap();
        assert_eq!(band[0].midpoint, 4.0);
        assert_eq!(band[1].width(), 0.0);
    }

    #[test]
    fn test_band_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            static_bollinger_sma(&empty, 5, 2.0),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            static_bollinger_sma(&[1.0_f64], 0, 2.0),
            Err(Error::InvalidPeriod { .. })
        ));
        // Rejected even when no window is complete
        assert!(matches!(
            static_bollinger_ema(&[1.0_f64], 5, 1.5, 2.0),
            Err(Error::InvalidSmoothing { .. })
        ));
    }

    #[test]
    fn test_band_idempotent() {
        let series = sample_series();
        let a = static_bollinger_ema(&series, 5, 0.0, 2.0).unwrap();
        let b = static_bollinger_ema(&series, 5, 0.0, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_band_f32() {
        let series: Vec<f32> = sample_series().iter().map(|&x| x as f32).collect();
        let band32 = static_bollinger_ema(&series, 5, 0.0, 2.0).unwrap();
        let band64 = static_bollinger_ema(&sample_series(), 5, 0.0, 2.0).unwrap();
        for (b32, b64) in band32.iter().zip(&band64) {
            assert!(approx_eq(b32.midpoint, b64.midpoint as f32, 1e-4));
            assert!(approx_eq(b32.upper, b64.upper as f32, 1e-4));
        }
    }

    // ==================== Configuration ====================

    #[test]
    fn test_config_defaults() {
        let cfg = Bollinger::default();
        assert_eq!(cfg.get_lookback(), 20);
        assert_eq!(cfg.get_multiplier(), 2.0);
        assert_eq!(cfg.get_midpoint(), Midpoint::Sma);
        assert_eq!(cfg.sentinel_count(), 19);
        assert_eq!(cfg.min_len(), 20);
    }

    #[test]
    fn test_config_compute_matches_function() {
        let series = sample_series();
        let cfg = Bollinger::new()
            .lookback(4)
            .multiplier(1.5)
            .midpoint(Midpoint::Ema { smoothing: 0.25 });
        assert_eq!(
            cfg.compute(&series).unwrap(),
            static_bollinger_ema(&series, 4, 0.25, 1.5).unwrap()
        );
    }

    #[test]
    fn test_config_rolling_f32() {
        let cfg = Bollinger::new().lookback(2).midpoint(Midpoint::Constant(1.0));
        let rolling = cfg.rolling::<f32>().unwrap();
        let (b, _) = rolling.step(&[1.0, 3.0]).unwrap();
        assert_eq!(b.midpoint, 1.0);
        assert_eq!(b.upper, 3.0);
    }
}
