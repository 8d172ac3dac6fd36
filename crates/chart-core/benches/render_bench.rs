// File: crates/chart-core/benches/render_bench.rs
// Summary: Benchmark PNG rendering throughput for line and scatter series.

use anyhow::Result;
use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skia_safe as skia;

fn build_chart(series_type: SeriesType, n: usize) -> Chart {
    let mut ch = Chart::new();
    let data: Vec<(f64, f64)> = (0..n)
        .map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0))
        .collect();
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", -12.0, 12.0);
    ch.add_series(Series::with_data(
        series_type,
        "y",
        skia::Color::from_argb(255, 69, 184, 255),
        data,
    ));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(kind, name) in &[(SeriesType::Line, "line"), (SeriesType::Scatter, "scatter")] {
        for &n in &[2_000usize, 10_000usize] {
            group.bench_function(format!("{name}_{n}"), |b| {
                let ch = build_chart(kind, n);
                let mut opts = RenderOptions::default();
                opts.width = 800;
                opts.height = 500;
                opts.draw_labels = false;
                b.iter(|| -> Result<()> {
                    let bytes = ch.render_to_png_bytes(&opts)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
