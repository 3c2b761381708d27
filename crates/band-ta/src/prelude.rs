//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let closes = vec![10.0_f64, 12.0, 11.0, 13.0, 12.5, 14.0, 13.0, 15.0, 14.5, 16.0];
//!
//! let atr = static_atr(&closes, 2, 5).unwrap();
//! let band = static_bollinger_ema(&closes, 5, 0.0, 2.0).unwrap();
//! let ewma = ewma_series(&closes, 0.0, 5).unwrap();
//! assert_eq!(band[9].midpoint, ewma[9]);
//! assert!(atr > 0.0);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`] and [`ValidatedInput`]
//! - Window statistics and the EWMA kernel
//! - ATR and Bollinger Band functions, states and configuration builders

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Kernels
pub use crate::kernels::{ewma_series, mean, rolling_ema, stddev, variance, EmaState};

// Indicators
pub use crate::indicators::{
    atr_curve, block_true_ranges, bollinger_band, bollinger_bound, rolling_atr,
    rolling_bollinger_const, rolling_bollinger_ema, rolling_bollinger_sma, static_atr,
    static_bollinger_const, static_bollinger_ema, static_bollinger_sma, true_range, Atr,
    AtrState, Band, Bollinger, Bound, Midpoint, RollingBollinger,
};

// Lookback functions
pub use crate::indicators::{atr_curve_lookback, atr_min_len, bollinger_lookback, bollinger_min_len};
pub use crate::kernels::ewma_lookback;
