//! Canonical ordering of censored data sets

use censored_core::Observation;

/// Sort observations into canonical ROS order
///
/// Censored observations come first, ascending by detection limit, followed
/// by detected observations ascending by value. The sort is stable, so
/// observations with equal value and censorship keep their input order;
/// that order has no effect on the estimates.
pub fn ros_sort(observations: &[Observation]) -> Vec<Observation> {
    let (mut censored, mut detected): (Vec<Observation>, Vec<Observation>) =
        observations.iter().copied().partition(|o| o.censored);

    // values are validated finite before sorting, total_cmp is belt and braces
    censored.sort_by(|a, b| a.value.total_cmp(&b.value));
    detected.sort_by(|a, b| a.value.total_cmp(&b.value));

    censored.extend(detected);
    censored
}
