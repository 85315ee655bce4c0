//! Detection-limit table ("Cohn table") construction
//!
//! One entry per distinct censoring threshold, carrying the interval
//! `[lower, upper)` it governs and the three counts the Hirsch-Stedinger
//! recursion needs:
//!
//! - `detects` (A): detected observations with value in `[lower, upper)`
//! - `below` (B): censored observations at or below `lower` plus detected
//!   observations strictly below `lower`
//! - `censored_at` (C): censored observations reported exactly at `lower`
//!
//! A trailing sentinel entry with zero exceedance terminates the backward
//! recursion over the table.

use censored_core::Observation;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One distinct detection limit and its Cohn quantities
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionLimit {
    /// The censoring threshold this entry describes
    pub limit: f64,
    /// Lower bound of the governed interval (equals `limit`)
    pub lower: f64,
    /// Upper bound of the governed interval; the next limit, or infinity
    pub upper: f64,
    /// Number of detected observations in `[lower, upper)`
    pub detects: usize,
    /// Number of observations at or below `lower` (censored at `lower`
    /// counts, detected at `lower` does not)
    pub below: usize,
    /// Number of censored observations reported exactly at `lower`
    pub censored_at: usize,
    /// Probability of exceeding `lower`, filled in by the recursion
    pub exceedance: f64,
}

impl DetectionLimit {
    fn sentinel() -> Self {
        Self {
            limit: f64::INFINITY,
            lower: f64::INFINITY,
            upper: f64::INFINITY,
            detects: 0,
            below: 0,
            censored_at: 0,
            exceedance: 0.0,
        }
    }
}

/// Table of distinct detection limits in ascending order
///
/// Empty when the data set has no censored observations. A non-empty table
/// always ends with a sentinel entry whose exceedance probability is zero.
#[derive(Debug, Clone, Default)]
pub struct CohnTable {
    entries: Vec<DetectionLimit>,
}

impl CohnTable {
    /// Build the table for a data set
    ///
    /// The distinct censored values become the limits. When the smallest
    /// observed value (censored or not) lies below the smallest limit, it is
    /// inserted as an extra limit so that every observation has a governing
    /// entry.
    pub fn build(observations: &[Observation]) -> Self {
        let mut limits: Vec<f64> = observations
            .iter()
            .filter(|o| o.censored)
            .map(|o| o.value)
            .collect();

        if limits.is_empty() {
            return Self::default();
        }

        limits.sort_by(f64::total_cmp);
        limits.dedup();

        let min_value = observations
            .iter()
            .map(|o| o.value)
            .fold(f64::INFINITY, f64::min);
        if min_value < limits[0] {
            limits.insert(0, min_value);
        }

        let mut entries = count_entries(observations, &limits);
        entries.push(DetectionLimit::sentinel());

        Self { entries }
    }

    /// Whether the data set had any censored observations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries including the trailing sentinel
    pub fn entries(&self) -> &[DetectionLimit] {
        &self.entries
    }

    /// The real entries, without the sentinel
    pub fn real_entries(&self) -> &[DetectionLimit] {
        if self.entries.is_empty() {
            &self.entries
        } else {
            &self.entries[..self.entries.len() - 1]
        }
    }

    /// Number of distinct detection limits
    pub fn num_limits(&self) -> usize {
        self.real_entries().len()
    }

    /// Index of the greatest entry whose lower bound does not exceed `value`
    ///
    /// Total for validated data: the minimum-value insertion guarantees the
    /// first lower bound is at or below every observation.
    pub fn index_for(&self, value: f64) -> usize {
        let real = self.real_entries();
        real.partition_point(|e| e.lower <= value).saturating_sub(1)
    }

    /// Attach exceedance probabilities to the entries
    ///
    /// `probabilities` must have one element per entry, sentinel included.
    pub(crate) fn with_exceedances(mut self, probabilities: &[f64]) -> Self {
        assert_eq!(
            self.entries.len(),
            probabilities.len(),
            "one probability per table entry"
        );
        for (entry, &pe) in self.entries.iter_mut().zip(probabilities) {
            entry.exceedance = pe;
        }
        self
    }

    /// The real entries as an owned vector, dropping the sentinel
    pub(crate) fn into_real_entries(mut self) -> Vec<DetectionLimit> {
        self.entries.pop();
        self.entries
    }
}

fn count_entries(observations: &[Observation], limits: &[f64]) -> Vec<DetectionLimit> {
    let build_entry = |i: usize| -> DetectionLimit {
        let lower = limits[i];
        let upper = if i + 1 < limits.len() {
            limits[i + 1]
        } else {
            f64::INFINITY
        };

        let mut detects = 0;
        let mut below = 0;
        let mut censored_at = 0;
        for obs in observations {
            if obs.censored {
                if obs.value <= lower {
                    below += 1;
                }
                if obs.value == lower {
                    censored_at += 1;
                }
            } else {
                if obs.value >= lower && obs.value < upper {
                    detects += 1;
                }
                if obs.value < lower {
                    below += 1;
                }
            }
        }

        DetectionLimit {
            limit: lower,
            lower,
            upper,
            detects,
            below,
            censored_at,
            exceedance: 0.0,
        }
    };

    #[cfg(feature = "parallel")]
    let entries = (0..limits.len()).into_par_iter().map(build_entry).collect();
    #[cfg(not(feature = "parallel"))]
    let entries = (0..limits.len()).map(build_entry).collect();

    entries
}
