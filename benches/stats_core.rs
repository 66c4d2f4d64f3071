use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fundrisk::config::EngineConfig;
use fundrisk::data::ReturnSeries;
use fundrisk::probability::{normal_quantile, standard_normal_cdf};
use fundrisk::stats::{central_moments, compute_stats, mean, normality_test, percentile, stddev};

// Helper to generate sample data
fn generate_sample_data(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.01).sin() * 0.02).collect()
}

fn bench_moments(c: &mut Criterion) {
    let sizes = [100, 1000, 10000];

    for &size in &sizes {
        let data = generate_sample_data(size);

        let mut group = c.benchmark_group(format!("moments_{}", size));

        group.bench_function("mean", |b| {
            b.iter(|| black_box(mean(black_box(&data))))
        });

        group.bench_function("stddev", |b| {
            b.iter(|| black_box(stddev(black_box(&data))))
        });

        group.bench_function("central_moments", |b| {
            b.iter(|| black_box(central_moments(black_box(&data))))
        });

        group.finish();
    }
}

fn bench_percentile(c: &mut Criterion) {
    let data = generate_sample_data(2520);

    c.bench_function("percentile_2520", |b| {
        b.iter(|| black_box(percentile(black_box(&data), 0.01)))
    });
}

fn bench_full_stats(c: &mut Criterion) {
    let series = ReturnSeries::new(generate_sample_data(2520), 30).unwrap();
    let config = EngineConfig::default();

    c.bench_function("compute_stats_2520", |b| {
        b.iter(|| black_box(compute_stats(black_box(&series), &config)))
    });

    c.bench_function("normality_test_2520", |b| {
        b.iter(|| black_box(normality_test(black_box(series.values()))))
    });
}

fn bench_normal_functions(c: &mut Criterion) {
    c.bench_function("normal_quantile", |b| {
        b.iter(|| black_box(normal_quantile(black_box(0.01))))
    });

    c.bench_function("normal_cdf", |b| {
        b.iter(|| black_box(standard_normal_cdf(black_box(-2.33))))
    });
}

criterion_group!(
    benches,
    bench_moments,
    bench_percentile,
    bench_full_stats,
    bench_normal_functions
);
criterion_main!(benches);
