//! Imputing nondetects straight from a DataFrame

use censored_polars::{CensoredStatsExt, RosConfig};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Lab results: values in `res`, nondetects flagged with "ND" in `qual`.
    let df = df![
        "res" => [2.0, 4.0, 4.0, 10.0, 3.0, 5.0, 6.0, 10.0, 12.0, 40.0, 78.0, 120.0],
        "qual" => ["ND", "ND", "ND", "ND", "", "", "", "", "", "", "", ""],
    ]?;

    println!("=== Input ===\n{}\n", df);

    // Compact output: imputed values next to the reported ones.
    let imputed = df.ros_impute(&RosConfig::default())?;
    println!("=== Imputed ===\n{}\n", imputed);

    // Full analysis keeps the detection-limit table and diagnostics.
    let analysis = df.ros_analysis(&RosConfig::default())?;
    println!("=== Detection limits ===\n{}\n", analysis.limits_frame()?);
    println!("=== Diagnostics ===\n{}\n", analysis.diagnostics_frame()?);

    if let Some(fit) = analysis.result().fit() {
        println!("Fit: {}", fit);
    }

    Ok(())
}
