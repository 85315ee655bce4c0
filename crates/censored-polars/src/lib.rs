//! Polars integration for censored-data estimation
//!
//! This crate connects the ROS estimator to Polars DataFrames through an
//! extension trait: point it at a value column and a qualifier column and
//! it returns frames with imputed values and diagnostics.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use censored_polars::{CensoredStatsExt, RosConfig};
//!
//! let df = df![
//!     "res" => [2.0, 4.0, 3.0, 5.0, 6.0, 10.0],
//!     "qual" => ["ND", "ND", "", "", "", ""],
//! ]?;
//!
//! let imputed = df.ros_impute(&RosConfig::default())?;
//! ```

mod config;
mod error;
mod frames;
mod traits;

pub use config::RosConfig;
pub use error::{Error, Result};
pub use frames::RosAnalysis;
pub use traits::CensoredStatsExt;

// Re-export commonly used types from dependencies
pub use censored_core::{Observation, QuantileFamily};
pub use censored_ros::{ImputationStrategy, RosEstimator, RosResult};
