// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType, Theme};
use skia_safe as skia;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        "y",
        skia::Color::from_argb(255, 64, 160, 255),
        vec![(0.0, 0.0), (4.0, 4.0)],
    ));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn bar_pixels_carry_series_color() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("g", vec!["only".into()]);
    chart.y_axis = Axis::new("v", 0.0, 1.0);
    chart.add_series(Series::with_data(
        SeriesType::Bar,
        "v",
        skia::Color::from_argb(255, 255, 75, 75),
        vec![(0.0, 1.0)],
    ));

    let mut opts = RenderOptions::default();
    opts.width = 200;
    opts.height = 200;
    opts.insets = chart_core::types::Insets::new(20, 20, 20, 20);
    opts.draw_labels = false;
    opts.draw_legend = false;
    opts.theme = Theme::dark();

    let (px, w, _h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    // Sample the middle of the plot: the single full-height bar covers it.
    let (sx, sy) = (w as usize / 2, 100usize);
    let i = sy * stride + sx * 4;
    assert_eq!((px[i], px[i + 1], px[i + 2]), (255, 75, 75));
}
