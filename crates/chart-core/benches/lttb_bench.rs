// File: crates/chart-core/benches/lttb_bench.rs
// Summary: Benchmark LTTB downsampling across input sizes.

use chart_core::lttb;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn make_points(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[10_000usize, 100_000usize] {
        let pts = make_points(n);
        group.bench_function(format!("n_{n}_to_2000"), |b| {
            b.iter(|| {
                let out = lttb(black_box(&pts), 2000);
                black_box(out);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lttb);
criterion_main!(benches);
