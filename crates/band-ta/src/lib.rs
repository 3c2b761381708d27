//! band-ta: volatility indicators over price series
//!
//! This crate provides Average True Range and Bollinger Bands, built on a
//! small set of window statistics (mean, population variance, standard
//! deviation) and an exponentially weighted moving average.
//!
//! # Features
//!
//! - **Two modes**: static computation over a whole series, and rolling
//!   computation driven one window at a time by the caller
//! - **Consistency**: both modes share one recurrence and agree at every
//!   aligned index
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Safety**: typed errors for empty input, zero lookbacks and invalid
//!   smoothing factors
//!
//! # Quick Start
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let closes = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0];
//! let band = static_bollinger_sma(&closes, 4, 2.0).unwrap();
//!
//! // First 3 bounds have no complete window
//! assert!(band[..3].iter().all(Bound::is_empty));
//! assert!((band[3].midpoint - 21.125).abs() < 1e-10);
//! ```
//!
//! # Available Operations
//!
//! ## Statistics
//! - [`kernels::mean()`], [`kernels::variance()`], [`kernels::stddev()`]
//! - [`kernels::ewma_series()`]: EWMA series with mean seeding
//!
//! ## Volatility
//! - [`indicators::static_atr()`]: Average True Range over fixed blocks
//! - [`indicators::bollinger_band()`]: Bollinger Bands with a chosen midpoint
//!
//! # Error Handling
//!
//! ```
//! use band_ta::prelude::*;
//!
//! let empty: Vec<f64> = vec![];
//! assert_eq!(mean(&empty), Err(Error::EmptyInput));
//!
//! // A zero lookback is rejected
//! assert!(static_bollinger_sma(&[1.0_f64, 2.0], 0, 2.0).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, EPSILON};
