//! Core types and error handling for censored-data estimation
//!
//! This crate holds the pieces every censored-stats crate builds on: the
//! [`Observation`] input type with its validation rules, the unified
//! [`Error`] taxonomy, and the [`QuantileFamily`] strategy that maps
//! plotting positions to quantile scores.
//!
//! # Example
//!
//! ```rust
//! use censored_core::{observation, Observation, QuantileFamily};
//!
//! let data = vec![
//!     Observation::nondetect(0, 0.5),
//!     Observation::detected(1, 1.2),
//! ];
//! observation::validate(&data).unwrap();
//!
//! // z-score of the median
//! let z = QuantileFamily::Normal.quantile(0.5).unwrap();
//! assert!(z.abs() < 1e-12);
//! ```

// Re-export submodules
pub mod distribution;
pub mod error;
pub mod observation;

// Re-export core types
pub use distribution::QuantileFamily;
pub use error::{Error, Result};
pub use observation::Observation;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
