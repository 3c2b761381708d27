//! Shared numeric kernels.
//!
//! # Kernels
//!
//! - [`stats`]: mean, population variance and standard deviation of a window
//! - [`ewma`]: the exponential smoothing recurrence and its series driver
//!
//! Indicators in [`crate::indicators`] are composed from these kernels.

pub mod ewma;
pub mod stats;

pub use ewma::{
    default_smoothing, ewma_lookback, ewma_series, resolve_smoothing, rolling_ema, EmaState,
};
pub use stats::{mean, stddev, variance};
