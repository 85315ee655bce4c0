//! Error types for censored-data estimation
//!
//! Provides a unified error type for all censored-stats crates.

use thiserror::Error;

/// Core error type for censored-data operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The estimation produced a value the method cannot work with
    #[error("Degenerate estimation at limit entry {index}: {reason}")]
    DegenerateEstimation { index: usize, reason: String },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a duplicated observation id
    pub fn duplicate_id(id: u64) -> Self {
        Self::InvalidInput(format!("Observation id {id} appears more than once"))
    }

    /// Create an error for a non-positive observation value
    pub fn non_positive(id: u64, value: f64) -> Self {
        Self::InvalidInput(format!(
            "Observation {id} has value {value}; all values must be positive"
        ))
    }

    /// Create an error for NaN/Inf observation values
    pub fn non_finite_value(id: u64) -> Self {
        Self::InvalidInput(format!("Observation {id} has a NaN or infinite value"))
    }

    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidInput(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for an unrecognized distribution family name
    pub fn unknown_family(name: &str) -> Self {
        Self::Configuration(format!("Unknown distribution family: {name}"))
    }
}
