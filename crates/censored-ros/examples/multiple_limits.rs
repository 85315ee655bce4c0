//! Imputation with several detection limits
//!
//! Shows the detection-limit table, the plotting positions, and how the
//! quantile family changes the imputed values.

use censored_ros::{Observation, QuantileFamily, RosEstimator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Multiple Detection Limits ===\n");

    // Lab reports with limits that improved over time: 10, then 4, then 2.
    let observations = vec![
        Observation::nondetect(0, 10.0),
        Observation::nondetect(1, 4.0),
        Observation::nondetect(2, 4.0),
        Observation::nondetect(3, 2.0),
        Observation::detected(4, 3.0),
        Observation::detected(5, 5.0),
        Observation::detected(6, 6.0),
        Observation::detected(7, 10.0),
        Observation::detected(8, 12.0),
        Observation::detected(9, 40.0),
        Observation::detected(10, 78.0),
        Observation::detected(11, 120.0),
    ];

    let result = RosEstimator::new().estimate(&observations)?;

    println!("1. Detection-limit table");
    println!(
        "{:>8} {:>8} {:>8} {:>8} {:>12}",
        "limit", "detects", "below", "at", "exceedance"
    );
    for entry in result.detection_limits() {
        println!(
            "{:>8.2} {:>8} {:>8} {:>8} {:>12.4}",
            entry.limit, entry.detects, entry.below, entry.censored_at, entry.exceedance
        );
    }

    println!("\n2. Plotting positions and imputed values");
    println!(
        "{:>8} {:>10} {:>10} {:>12}",
        "reported", "censored", "position", "final"
    );
    for record in result.records() {
        println!(
            "{:>8.2} {:>10} {:>10.4} {:>12.4}",
            record.value,
            if record.censored { "yes" } else { "no" },
            record.plotting_position.unwrap_or(f64::NAN),
            record.final_value
        );
    }

    println!("\n3. Sensitivity to the quantile family");
    for family in [
        QuantileFamily::Normal,
        QuantileFamily::Laplace,
        QuantileFamily::Cauchy,
    ] {
        let result = RosEstimator::new()
            .with_family(family)
            .estimate(&observations)?;
        let imputed: Vec<String> = result
            .censored_records()
            .iter()
            .map(|r| format!("{:.4}", r.final_value))
            .collect();
        println!("  {:<10} -> [{}]", family.to_string(), imputed.join(", "));
    }

    Ok(())
}
