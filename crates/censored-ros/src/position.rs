//! Exceedance probabilities, plotting positions, and quantile scores

use crate::cohn::CohnTable;
use censored_core::{Error, Observation, QuantileFamily, Result};

/// Compute exceedance probabilities for every table entry
///
/// Backward recursion from the sentinel (probability zero) to the first
/// entry:
///
/// ```text
/// pe[i] = pe[i+1] + (a[i] / (a[i] + b[i])) * (1 - pe[i+1])
/// ```
///
/// Returns one probability per entry, sentinel included. A zero-count
/// denominator is reported as a degenerate estimation instead of dividing;
/// validated input cannot produce one (every recorded limit counts its own
/// censored observations in `b`, and a synthetic minimum entry counts the
/// minimum detect in `a`).
pub(crate) fn exceedance_probabilities(table: &CohnTable) -> Result<Vec<f64>> {
    let entries = table.entries();
    let mut pe = vec![0.0; entries.len()];

    for i in (0..entries.len().saturating_sub(1)).rev() {
        let entry = &entries[i];
        let denominator = entry.detects + entry.below;
        if denominator == 0 {
            return Err(Error::DegenerateEstimation {
                index: i,
                reason: "no observations counted at or below this limit".to_string(),
            });
        }
        let fraction = entry.detects as f64 / denominator as f64;
        pe[i] = pe[i + 1] + fraction * (1.0 - pe[i + 1]);
    }

    Ok(pe)
}

/// Compute the plotting position of every row
///
/// Requires a table with exceedance probabilities attached. Positions are
/// checked to lie strictly inside (0, 1); anything else is a degenerate
/// configuration and errors rather than being clamped.
pub(crate) fn plotting_positions(
    sorted: &[Observation],
    indices: &[usize],
    raw_ranks: &[u32],
    table: &CohnTable,
) -> Result<Vec<f64>> {
    let entries = table.entries();
    let mut positions = Vec::with_capacity(sorted.len());

    for n in 0..sorted.len() {
        let i = indices[n];
        let rank = raw_ranks[n] as f64;
        let entry = &entries[i];
        // the sentinel guarantees a successor for every real entry
        let successor = &entries[i + 1];

        let position = if sorted[n].censored {
            (1.0 - entry.exceedance) * rank / (entry.censored_at as f64 + 1.0)
        } else {
            (1.0 - entry.exceedance)
                + (entry.exceedance - successor.exceedance) * rank / (entry.detects as f64 + 1.0)
        };

        if !(position > 0.0 && position < 1.0) {
            return Err(Error::DegenerateEstimation {
                index: i,
                reason: format!(
                    "plotting position {} for observation {} lies outside (0, 1)",
                    position, sorted[n].id
                ),
            });
        }
        positions.push(position);
    }

    Ok(positions)
}

/// Map plotting positions to quantile scores of the configured family
pub(crate) fn quantile_scores(positions: &[f64], family: QuantileFamily) -> Result<Vec<f64>> {
    positions.iter().map(|&p| family.quantile(p)).collect()
}
