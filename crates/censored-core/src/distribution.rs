//! Quantile families for scoring plotting positions
//!
//! ROS converts plotting positions into quantile scores through the inverse
//! CDF of an assumed continuous distribution. The family is a strategy value
//! selected per estimation run; nothing here holds state.

use crate::{Error, Result};
use statrs::distribution::{Cauchy, ContinuousCDF, Laplace, Normal, StudentsT, Uniform};
use std::fmt;
use std::str::FromStr;

/// Continuous distribution family used for quantile scores
///
/// All families are standardized (location 0, scale 1). The default is
/// [`QuantileFamily::Normal`], matching the usual ROS formulation where
/// plotting positions map to z-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantileFamily {
    /// Standard normal distribution
    Normal,
    /// Student's t distribution with `df` degrees of freedom
    StudentsT { df: f64 },
    /// Standard Cauchy distribution
    Cauchy,
    /// Standard Laplace distribution
    Laplace,
    /// Uniform distribution on (0, 1)
    Uniform,
}

impl Default for QuantileFamily {
    fn default() -> Self {
        Self::Normal
    }
}

impl QuantileFamily {
    /// Inverse CDF of the family at probability `p`
    ///
    /// `p` must lie strictly inside (0, 1); the families have unbounded
    /// quantiles at the endpoints.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability(p));
        }

        let score = match *self {
            Self::Normal => Normal::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {}", e)))?
                .inverse_cdf(p),
            Self::StudentsT { df } => StudentsT::new(0.0, 1.0, df)
                .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {}", e)))?
                .inverse_cdf(p),
            Self::Cauchy => Cauchy::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create Cauchy distribution: {}", e)))?
                .inverse_cdf(p),
            Self::Laplace => Laplace::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create Laplace distribution: {}", e)))?
                .inverse_cdf(p),
            Self::Uniform => Uniform::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create uniform distribution: {}", e)))?
                .inverse_cdf(p),
        };

        Ok(score)
    }

    /// CDF of the family at `x`
    pub fn cdf(&self, x: f64) -> Result<f64> {
        let p = match *self {
            Self::Normal => Normal::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {}", e)))?
                .cdf(x),
            Self::StudentsT { df } => StudentsT::new(0.0, 1.0, df)
                .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {}", e)))?
                .cdf(x),
            Self::Cauchy => Cauchy::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create Cauchy distribution: {}", e)))?
                .cdf(x),
            Self::Laplace => Laplace::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create Laplace distribution: {}", e)))?
                .cdf(x),
            Self::Uniform => Uniform::new(0.0, 1.0)
                .map_err(|e| Error::Computation(format!("Failed to create uniform distribution: {}", e)))?
                .cdf(x),
        };

        Ok(p)
    }
}

impl fmt::Display for QuantileFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::StudentsT { df } => write!(f, "students-t(df={})", df),
            Self::Cauchy => write!(f, "cauchy"),
            Self::Laplace => write!(f, "laplace"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

impl FromStr for QuantileFamily {
    type Err = Error;

    /// Parse a family name as it would appear in configuration
    ///
    /// `StudentsT` is excluded here since it needs a degrees-of-freedom
    /// parameter; construct it directly instead.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "norm" | "normal" | "gaussian" => Ok(Self::Normal),
            "cauchy" => Ok(Self::Cauchy),
            "laplace" => Ok(Self::Laplace),
            "uniform" => Ok(Self::Uniform),
            other => Err(Error::unknown_family(other)),
        }
    }
}
