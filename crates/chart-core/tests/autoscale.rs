// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and stacked bars.

use chart_core::{Axis, Chart, Series, SeriesType};
use skia_safe as skia;

fn color() -> skia::Color {
    skia::Color::from_argb(255, 64, 160, 255)
}

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    chart.add_series(Series::with_data(
        SeriesType::Line,
        "a",
        color(),
        vec![(0.0, 1.0), (5.0, 3.0)],
    ));
    chart.add_series(Series::with_data(
        SeriesType::Scatter,
        "b",
        color(),
        vec![(2.0, -1.0), (3.0, 6.0)],
    ));

    chart.autoscale_axes();

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= -1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_uses_stacked_bar_sums() {
    let mut chart = Chart::new();
    // Two bar series sharing x positions stack to 5.0 at x=0.
    chart.add_series(Series::with_data(
        SeriesType::Bar,
        "g1",
        color(),
        vec![(0.0, 2.0), (1.0, 1.0)],
    ));
    chart.add_series(Series::with_data(
        SeriesType::Bar,
        "g2",
        color(),
        vec![(0.0, 3.0), (1.0, 1.5)],
    ));

    chart.autoscale_axes();

    assert!(chart.y_axis.max >= 5.0 - 1e-9, "max {} should cover the stack", chart.y_axis.max);
    // Bars are zero-based.
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
}

#[test]
fn autoscale_keeps_categorical_slots() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("region", vec!["n".into(), "s".into(), "w".into()]);
    chart.add_series(Series::with_data(
        SeriesType::Bar,
        "v",
        color(),
        vec![(0.0, 2.0), (1.0, 4.0), (2.0, 1.0)],
    ));

    chart.autoscale_axes();

    assert_eq!(chart.x_axis.min, -0.5);
    assert_eq!(chart.x_axis.max, 2.5);
    assert!(chart.y_axis.max >= 4.0 - 1e-9);
}

#[test]
fn autoscale_empty_chart_falls_back_to_unit_ranges() {
    let mut chart = Chart::new();
    chart.autoscale_axes();
    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 1.0);
    assert_eq!(chart.y_axis.min, 0.0);
    assert_eq!(chart.y_axis.max, 1.0);
}
