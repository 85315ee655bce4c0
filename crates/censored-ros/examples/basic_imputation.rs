//! Basic censored-data imputation example

use censored_ros::{Observation, RosEstimator};

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ROS Imputation Example ===\n");

    // A small water-quality style data set: three nondetects reported at
    // their detection limit, seven quantified values.
    let observations = vec![
        Observation::nondetect(0, 1.0),
        Observation::nondetect(1, 1.0),
        Observation::nondetect(2, 2.5),
        Observation::detected(3, 1.8),
        Observation::detected(4, 3.2),
        Observation::detected(5, 4.6),
        Observation::detected(6, 6.0),
        Observation::detected(7, 8.7),
        Observation::detected(8, 12.0),
        Observation::detected(9, 19.5),
    ];

    let result = RosEstimator::new().estimate(&observations)?;

    println!("Strategy: {}", result.strategy());
    println!(
        "Observations: {} total, {} censored\n",
        result.n_total(),
        result.n_censored()
    );

    println!("{:>8} {:>10} {:>12}", "reported", "censored", "final");
    for record in result.records() {
        println!(
            "{:>8.2} {:>10} {:>12.4}",
            record.value,
            if record.censored { "yes" } else { "no" },
            record.final_value
        );
    }

    if let Some(fit) = result.fit() {
        println!(
            "\nFit: slope {:.4}, intercept {:.4}, correlation {:.4}",
            fit.slope, fit.intercept, fit.correlation
        );
    }

    // Compare against the common half-limit substitution.
    let ros_mean = mean(&result.final_values());
    let substituted: Vec<f64> = observations
        .iter()
        .map(|o| if o.censored { 0.5 * o.value } else { o.value })
        .collect();
    println!("\nMean with ROS imputation:        {:.4}", ros_mean);
    println!("Mean with half-limit substitution: {:.4}", mean(&substituted));

    Ok(())
}
