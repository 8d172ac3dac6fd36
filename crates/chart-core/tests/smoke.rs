// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use skia_safe as skia;

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        "y",
        skia::Color::from_argb(255, 69, 184, 255),
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1024, 640));
}

#[test]
fn render_smoke_every_kind() {
    let kinds = [SeriesType::Bar, SeriesType::Line, SeriesType::Scatter, SeriesType::Area];
    for kind in kinds {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data(
            kind,
            "v",
            skia::Color::from_argb(255, 255, 75, 75),
            vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)],
        ));
        chart.autoscale_axes();
        let mut opts = RenderOptions::default();
        opts.width = 400;
        opts.height = 300;
        let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "kind {kind:?}");
    }
}

#[test]
fn render_smoke_donut() {
    use chart_core::Slice;
    let mut chart = Chart::new();
    let colors = chart_core::palette::Palette::vibrant();
    let slices = vec![
        Slice { label: "alpha".into(), value: 4.0, color: colors.color(0) },
        Slice { label: "beta".into(), value: 3.0, color: colors.color(1) },
        Slice { label: "gamma".into(), value: 1.0, color: colors.color(2) },
    ];
    chart.add_series(Series::from_slices("share", slices));

    let bytes = chart
        .render_to_png_bytes(&RenderOptions::default())
        .expect("donut render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
