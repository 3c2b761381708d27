//! Volatility indicators.
//!
//! # Overview
//!
//! Both indicators are generic over `f32` and `f64` via
//! [`SeriesElement`](crate::traits::SeriesElement) and come in two modes:
//!
//! - **Static**: the whole series is available up front and the indicator
//!   returns a value or an index-aligned series.
//! - **Rolling**: the caller owns the loop and threads a small state value
//!   from one call to the next, as a live feed would.
//!
//! Both modes share one recurrence and agree at every aligned index.
//!
//! # Indicators
//!
//! - [`atr`] - Average True Range over fixed-size blocks with Wilder smoothing
//! - [`bollinger`] - Bollinger Bands with constant, SMA or EMA midpoints
//!
//! # Example
//!
//! ```
//! use band_ta::indicators::{static_atr, static_bollinger_sma};
//!
//! let closes: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i % 5)).collect();
//!
//! let atr = static_atr(&closes, 3, 5).unwrap();
//! assert!(atr >= 0.0);
//!
//! let band = static_bollinger_sma(&closes, 10, 2.0).unwrap();
//! assert_eq!(band.len(), closes.len());
//! ```
//!
//! # Sentinels
//!
//! Indices that have no complete window hold zero (ATR curves and EWMA
//! series) or [`Bound::empty`] (bands), so outputs stay aligned with their
//! inputs.
//!
//! # Error Handling
//!
//! - Empty input data ([`EmptyInput`](crate::error::Error::EmptyInput))
//! - Zero lookbacks ([`InvalidPeriod`](crate::error::Error::InvalidPeriod))
//! - Smoothing outside `(0, 1)`
//!   ([`InvalidSmoothing`](crate::error::Error::InvalidSmoothing))

pub mod atr;
pub mod bollinger;

pub use atr::{
    atr_curve, atr_curve_lookback, atr_min_len, block_true_ranges, rolling_atr, static_atr,
    true_range, Atr, AtrState,
};
pub use bollinger::{
    bollinger_band, bollinger_bound, bollinger_lookback, bollinger_min_len,
    rolling_bollinger_const, rolling_bollinger_ema, rolling_bollinger_sma, static_bollinger_const,
    static_bollinger_ema, static_bollinger_sma, Band, Bollinger, Bound, Midpoint,
    RollingBollinger,
};
