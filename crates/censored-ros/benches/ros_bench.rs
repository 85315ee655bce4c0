use censored_ros::{Observation, QuantileFamily, RosEstimator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::LogNormal;

/// Generate lognormal data censored at a fixed set of detection limits.
///
/// Each draw below the randomly chosen limit becomes a nondetect recorded at
/// that limit, which yields roughly the requested censored fraction.
fn generate_censored_data(size: usize, limits: &[f64], seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lognormal = LogNormal::new(1.0, 1.0).unwrap();

    (0..size)
        .map(|i| {
            let value: f64 = lognormal.sample(&mut rng);
            let limit = limits[rng.gen_range(0..limits.len())];
            if value < limit {
                Observation::nondetect(i as u64, limit)
            } else {
                Observation::detected(i as u64, value)
            }
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("RosEstimator");
    let sizes = [50, 200, 1000, 5000];
    let limits = [0.5, 1.0, 2.0];
    let data_cache: Vec<_> = sizes
        .iter()
        .map(|&size| generate_censored_data(size, &limits, 42))
        .collect();

    let estimator = RosEstimator::new();

    for (i, &size) in sizes.iter().enumerate() {
        let data = &data_cache[i];

        group.bench_with_input(BenchmarkId::new("estimate", size), data, |b, data| {
            b.iter(|| estimator.estimate(black_box(data)))
        });
    }

    group.finish();
}

fn bench_many_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("ManyLimits");

    // More distinct limits mean more table entries to count and recurse over.
    for &n_limits in &[5usize, 20, 50] {
        let limits: Vec<f64> = (1..=n_limits).map(|i| 0.1 * i as f64).collect();
        let data = generate_censored_data(2000, &limits, 7);

        let estimator = RosEstimator::new();
        group.bench_with_input(
            BenchmarkId::new("estimate", n_limits),
            &data,
            |b, data| b.iter(|| estimator.estimate(black_box(data))),
        );
    }

    group.finish();
}

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("QuantileFamilies");
    let data = generate_censored_data(1000, &[0.5, 1.0, 2.0], 42);

    let families = [
        ("normal", QuantileFamily::Normal),
        ("cauchy", QuantileFamily::Cauchy),
        ("laplace", QuantileFamily::Laplace),
        ("uniform", QuantileFamily::Uniform),
    ];
    for (name, family) in families {
        let estimator = RosEstimator::new().with_family(family);
        group.bench_with_input(BenchmarkId::new("estimate", name), &data, |b, data| {
            b.iter(|| estimator.estimate(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_estimate, bench_many_limits, bench_families);
criterion_main!(benches);
