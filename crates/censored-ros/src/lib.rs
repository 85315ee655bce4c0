//! Regression on order statistics for censored data
//!
//! This crate imputes left-censored observations ("nondetects") using the
//! regression-on-order-statistics procedure of Hirsch and Stedinger (1987):
//! plotting positions that honor every detection limit, quantile scores from
//! a configurable distribution family, and a least-squares fit of the
//! detected values used to estimate the censored ones.
//!
//! # Example
//!
//! ```rust
//! use censored_ros::{ImputationStrategy, Observation, RosEstimator};
//!
//! let observations = vec![
//!     Observation::nondetect(0, 5.0),
//!     Observation::detected(1, 3.0),
//!     Observation::detected(2, 6.0),
//!     Observation::detected(3, 9.0),
//!     Observation::detected(4, 12.0),
//! ];
//!
//! let result = RosEstimator::new().estimate(&observations).unwrap();
//! assert_eq!(result.strategy(), ImputationStrategy::Regression);
//! assert_eq!(result.n_censored(), 1);
//!
//! // The nondetect "<5" is replaced by a positive estimate below its limit.
//! let imputed = result.censored_records()[0].final_value;
//! assert!(imputed > 0.0 && imputed < 5.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: count detection-limit entries with rayon. Useful for data
//!   sets with many distinct limits; results are identical either way.

pub mod cohn;
pub mod estimator;
pub mod sort;
pub mod types;

mod position;
mod rank;
mod regression;

pub use cohn::{CohnTable, DetectionLimit};
pub use estimator::{RosEstimator, MAX_CENSORED_FRACTION, MIN_DETECTS};
pub use sort::ros_sort;
pub use types::{ImputationStrategy, LineFit, RosRecord, RosResult};

// Core types, re-exported so callers need only this crate.
pub use censored_core::{Error, Observation, QuantileFamily, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
