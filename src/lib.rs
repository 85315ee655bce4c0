//! Censored-data statistics toolkit
//!
//! Environmental measurements are often reported only as "below a detection
//! limit". This workspace estimates those censored values with regression on
//! order statistics (ROS) after Hirsch and Stedinger (1987), handling data
//! sets with several different detection limits.
//!
//! The root crate re-exports the member crates:
//!
//! - [`censored_core`]: input types, validation, error taxonomy, and the
//!   quantile-family strategy used for scoring plotting positions
//! - [`censored_ros`]: the ROS pipeline itself (detection-limit table, ranks,
//!   exceedance probabilities, regression, imputation)
//!
//! DataFrame users should depend on `censored-polars` directly.
//!
//! # Example
//!
//! ```rust
//! use censored_stats::{ImputationStrategy, Observation, RosEstimator};
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
//! for record in result.records() {
//!     println!("{:>8.3} (censored: {})", record.final_value, record.censored);
//! }
//! ```

// Re-export workspace crates
pub use censored_core::{Error, Observation, QuantileFamily, Result};
pub use censored_ros::{
    CohnTable, DetectionLimit, ImputationStrategy, LineFit, RosEstimator, RosRecord, RosResult,
};
