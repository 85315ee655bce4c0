//! Input type for censored data sets

use crate::{Error, Result};
use std::collections::HashSet;
use std::fmt;

/// A single measurement that is either detected or censored
///
/// A censored observation ("non-detect") carries its detection limit in
/// `value`: the true quantity is known only to lie below that limit. A
/// detected observation carries the measured value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Caller-assigned identity, unique within one data set
    pub id: u64,
    /// Measured value, or the detection limit when censored
    pub value: f64,
    /// Whether this observation is censored
    pub censored: bool,
}

impl Observation {
    /// Create a detected observation
    pub fn detected(id: u64, value: f64) -> Self {
        Self {
            id,
            value,
            censored: false,
        }
    }

    /// Create a censored observation reported at `limit`
    pub fn nondetect(id: u64, limit: f64) -> Self {
        Self {
            id,
            value: limit,
            censored: true,
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.censored {
            write!(f, "<{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Validate a data set before estimation
///
/// Every value must be finite and strictly positive, and every id must be
/// unique. The offending observation id is reported in the error.
pub fn validate(observations: &[Observation]) -> Result<()> {
    let mut seen = HashSet::with_capacity(observations.len());
    for obs in observations {
        if !obs.value.is_finite() {
            return Err(Error::non_finite_value(obs.id));
        }
        if obs.value <= 0.0 {
            return Err(Error::non_positive(obs.id, obs.value));
        }
        if !seen.insert(obs.id) {
            return Err(Error::duplicate_id(obs.id));
        }
    }
    Ok(())
}
