//! Rank assignment within detection-limit groups
//!
//! Ranks restart at 1 whenever the governing limit index or the censorship
//! flag changes from the previous row of the canonically sorted data. The
//! raw ranks drive the plotting positions; detected rows additionally get a
//! tie-averaged rank over equal values within the same limit group, which is
//! purely diagnostic.

use crate::cohn::CohnTable;
use censored_core::Observation;
use std::collections::HashMap;

/// Map each observation to the index of its governing detection limit
pub(crate) fn limit_indices(sorted: &[Observation], table: &CohnTable) -> Vec<usize> {
    sorted.iter().map(|o| table.index_for(o.value)).collect()
}

/// Raw ranks over the canonically sorted data
///
/// `rank[n] = rank[n-1] + 1` while the row shares its limit index and
/// censorship with the previous row; otherwise the rank resets to 1.
/// Canonical order keeps those groups contiguous.
pub(crate) fn raw_ranks(sorted: &[Observation], indices: &[usize]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted.len());
    for n in 0..sorted.len() {
        let rank = if n == 0
            || indices[n] != indices[n - 1]
            || sorted[n].censored != sorted[n - 1].censored
        {
            1
        } else {
            ranks[n - 1] + 1
        };
        ranks.push(rank);
    }
    ranks
}

/// Tie-averaged ranks
///
/// Detected rows sharing a limit index and value get the mean of their raw
/// ranks; censored rows keep their raw rank.
pub(crate) fn averaged_ranks(
    sorted: &[Observation],
    indices: &[usize],
    raw: &[u32],
) -> Vec<f64> {
    // key detected ties by (limit index, value bits); values are finite
    let mut groups: HashMap<(usize, u64), (f64, u32)> = HashMap::new();
    for n in 0..sorted.len() {
        if !sorted[n].censored {
            let entry = groups
                .entry((indices[n], sorted[n].value.to_bits()))
                .or_insert((0.0, 0));
            entry.0 += raw[n] as f64;
            entry.1 += 1;
        }
    }

    (0..sorted.len())
        .map(|n| {
            if sorted[n].censored {
                raw[n] as f64
            } else {
                let (sum, count) = groups[&(indices[n], sorted[n].value.to_bits())];
                sum / count as f64
            }
        })
        .collect()
}
