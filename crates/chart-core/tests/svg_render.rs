// File: crates/chart-core/tests/svg_render.rs
// Purpose: Validate SVG output structure for each series type.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType, Slice};
use skia_safe as skia;

fn red() -> skia::Color {
    skia::Color::from_argb(255, 255, 75, 75)
}

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.width = 400;
    o.height = 300;
    o
}

#[test]
fn svg_line_has_polyline() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(
        SeriesType::Line,
        "y",
        red(),
        vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)],
    ));
    chart.autoscale_axes();
    let svg = chart.render_to_svg_string(&opts());
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("#ff4b4b"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_scatter_has_circles() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(
        SeriesType::Scatter,
        "y",
        red(),
        vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)],
    ));
    chart.autoscale_axes();
    let svg = chart.render_to_svg_string(&opts());
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn svg_bar_has_one_rect_per_bar() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("c", vec!["a".into(), "b".into()]);
    chart.add_series(Series::with_data(SeriesType::Bar, "v", red(), vec![(0.0, 2.0), (1.0, 3.0)]));
    chart.autoscale_axes();
    let svg = chart.render_to_svg_string(&opts());
    // background + panel + 2 bars
    assert!(svg.matches("<rect").count() >= 4);
}

#[test]
fn svg_area_fills_with_opacity() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(
        SeriesType::Area,
        "y",
        red(),
        vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)],
    ));
    chart.autoscale_axes();
    let svg = chart.render_to_svg_string(&opts());
    assert!(svg.contains("fill-opacity"));
    assert!(svg.contains("<path"));
}

#[test]
fn svg_donut_has_one_path_per_slice_and_legend() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_slices(
        "share",
        vec![
            Slice { label: "alpha".into(), value: 2.0, color: red() },
            Slice { label: "beta".into(), value: 1.0, color: red() },
            Slice { label: "skipped".into(), value: 0.0, color: red() },
        ],
    ));
    let svg = chart.render_to_svg_string(&opts());
    assert_eq!(svg.matches("<path").count(), 2, "one annular path per positive slice");
    assert!(svg.contains("alpha"));
    assert!(!svg.contains("skipped"), "zero-value slices are dropped");
}

#[test]
fn svg_escapes_labels() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("a < b & c", 0.0, 1.0);
    chart.add_series(Series::with_data(SeriesType::Line, "y", red(), vec![(0.0, 0.0), (1.0, 1.0)]));
    let svg = chart.render_to_svg_string(&opts());
    assert!(svg.contains("a &lt; b &amp; c"));
}
