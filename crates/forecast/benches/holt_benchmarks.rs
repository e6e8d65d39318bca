use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stocklens_forecast::HoltLinear;

fn synthetic_series(days: usize) -> Vec<f64> {
    (0..days)
        .map(|i| 20.0 + 0.3 * i as f64 + if i % 7 == 0 { 5.0 } else { 0.0 })
        .collect()
}

fn bench_fit_auto(c: &mut Criterion) {
    let mut group = c.benchmark_group("holt_fit_auto");
    for days in [30usize, 90, 365] {
        let values = synthetic_series(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &values, |b, v| {
            b.iter(|| HoltLinear::fit_auto(black_box(v)).unwrap());
        });
    }
    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let values = synthetic_series(365);
    let model = HoltLinear::fit_auto(&values).unwrap();
    c.bench_function("holt_forecast_90", |b| {
        b.iter(|| model.forecast(black_box(90)));
    });
}

criterion_group!(benches, bench_fit_auto, bench_forecast);
criterion_main!(benches);
