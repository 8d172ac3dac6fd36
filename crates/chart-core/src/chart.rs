// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::collections::HashMap;

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

/// Fraction of a bar slot occupied by the bar body.
pub(crate) const BAR_FILL: f64 = 0.7;
/// Donut hole radius as a fraction of the outer radius.
pub(crate) const DONUT_HOLE: f64 = 0.3;
/// Slices below this share of the total get no outside label.
pub(crate) const DONUT_MIN_LABEL_FRAC: f64 = 0.04;
/// Legend rows are cut off past this many entries.
pub(crate) const MAX_LEGEND_ENTRIES: usize = 12;

pub(crate) const AREA_ALPHA: u8 = 96;
const LABEL_SIZE: f32 = 13.0;
const TITLE_SIZE: f32 = 16.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            draw_legend: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data (stacked bar sums included). A categorical
    /// X axis keeps its slot range.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    pub fn has_donut(&self) -> bool {
        self.series.iter().any(|s| s.series_type == SeriesType::Donut)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_all(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_all(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render the chart as SVG markup.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        crate::svg::render(self, opts)
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let markup = self.render_to_svg_string(opts);
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, markup)?;
        Ok(())
    }

    fn draw_all(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);
        let shaper = TextShaper::new();

        if self.has_donut() {
            self.draw_donut(canvas, opts, &shaper);
        } else {
            let frame = layout_frame(self, opts);
            draw_frame(canvas, &frame, theme);

            let slot = bar_slot_width(self);
            let mut stacks = BarStacks::new();

            canvas.save();
            canvas.clip_rect(
                skia::Rect::from_ltrb(frame.l, frame.t, frame.r, frame.b),
                None,
                true,
            );
            for s in &self.series {
                match s.series_type {
                    SeriesType::Bar => draw_bar_series(canvas, &frame, s, &mut stacks, slot),
                    SeriesType::Line => draw_line_series(canvas, &frame, s),
                    SeriesType::Scatter => draw_scatter_series(canvas, &frame, s),
                    SeriesType::Area => draw_area_series(canvas, &frame, s),
                    SeriesType::Donut => {}
                }
            }
            canvas.restore();

            if opts.draw_labels {
                draw_axis_labels(canvas, &frame, self, theme, &shaper);
            }
        }

        if opts.draw_legend {
            let entries = legend_entries(self);
            if !entries.is_empty() {
                let right = (opts.width - opts.insets.right as i32) as f32;
                let top = opts.insets.top as f32;
                draw_legend(canvas, right, top, &entries, theme, &shaper);
            }
        }
    }

    fn draw_donut(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: &TextShaper) {
        let arcs = donut_slices(self);
        if arcs.is_empty() {
            return;
        }
        let (cx, cy, outer, inner) = donut_geometry(opts);
        let outer_rect = skia::Rect::from_xywh(cx - outer, cy - outer, outer * 2.0, outer * 2.0);
        let inner_rect = skia::Rect::from_xywh(cx - inner, cy - inner, inner * 2.0, inner * 2.0);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);

        for arc in &arcs {
            // A full single-slice ring would collapse its arc endpoints.
            let sweep = arc.sweep.min(359.99) as f32;
            let mut path = skia::PathBuilder::new();
            path.arc_to(outer_rect, arc.start as f32, sweep, true);
            path.arc_to(inner_rect, arc.start as f32 + sweep, -sweep, false);
            path.close();
            paint.set_color(arc.color);
            canvas.draw_path(&path.detach(), &paint);
        }

        if opts.draw_labels {
            for arc in arcs.iter().filter(|a| a.frac >= DONUT_MIN_LABEL_FRAC) {
                let mid = (arc.start + arc.sweep * 0.5).to_radians();
                let lx = cx + outer * 1.12 * mid.cos() as f32;
                let ly = cy + outer * 1.12 * mid.sin() as f32 + 4.0;
                let text = format!("{} {:.0}%", arc.label, arc.frac * 100.0);
                if mid.cos() >= 0.0 {
                    shaper.draw_left(canvas, &text, lx, ly, LABEL_SIZE, opts.theme.axis_label);
                } else {
                    shaper.draw_right(canvas, &text, lx, ly, LABEL_SIZE, opts.theme.axis_label);
                }
            }
        }
    }
}

// ---- shared layout ----------------------------------------------------------

pub(crate) struct Frame {
    pub l: f32,
    pub t: f32,
    pub r: f32,
    pub b: f32,
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
}

pub(crate) fn layout_frame(chart: &Chart, opts: &RenderOptions) -> Frame {
    let l = opts.insets.left as f32;
    let r = (opts.width - opts.insets.right as i32) as f32;
    let t = opts.insets.top as f32;
    let b = (opts.height - opts.insets.bottom as i32) as f32;
    Frame {
        l,
        t,
        r,
        b,
        x: LinearScale::new(chart.x_axis.min, chart.x_axis.max, l, r),
        y: LinearScale::new(chart.y_axis.min, chart.y_axis.max, b, t),
        x_ticks: chart.x_axis.ticks(8),
        y_ticks: chart.y_axis.ticks(6),
    }
}

/// Width of one bar slot in domain units: a category slot, or the minimum
/// gap between distinct bar X positions.
pub(crate) fn bar_slot_width(chart: &Chart) -> f64 {
    if chart.x_axis.is_categorical() {
        return 1.0;
    }
    let mut xs: Vec<f64> = chart
        .series
        .iter()
        .filter(|s| s.series_type == SeriesType::Bar)
        .flat_map(|s| s.data_xy.iter().map(|&(x, _)| x))
        .collect();
    if xs.is_empty() {
        return 1.0;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup();
    let mut gap = f64::INFINITY;
    for w in xs.windows(2) {
        gap = gap.min(w[1] - w[0]);
    }
    if !gap.is_finite() || gap <= 0.0 {
        // single bar position: a tenth of the axis span
        return ((chart.x_axis.max - chart.x_axis.min) / 10.0).max(1e-9);
    }
    gap
}

/// Per-x running sums so consecutive bar series stack instead of overdraw.
pub(crate) struct BarStacks {
    pos: HashMap<u64, f64>,
    neg: HashMap<u64, f64>,
}

impl BarStacks {
    pub(crate) fn new() -> Self {
        Self { pos: HashMap::new(), neg: HashMap::new() }
    }

    /// Stack a bar of height `v` at `x`; returns the (from, to) value span.
    pub(crate) fn push(&mut self, x: f64, v: f64) -> (f64, f64) {
        let key = x.to_bits();
        let slot = if v >= 0.0 {
            self.pos.entry(key).or_insert(0.0)
        } else {
            self.neg.entry(key).or_insert(0.0)
        };
        let from = *slot;
        *slot += v;
        (from, *slot)
    }
}

#[derive(Clone)]
pub(crate) struct DonutArc {
    pub label: String,
    pub color: skia::Color,
    /// Degrees, 0 at 3 o'clock, clockwise; slices begin at 12 o'clock.
    pub start: f64,
    pub sweep: f64,
    pub frac: f64,
}

pub(crate) fn donut_slices(chart: &Chart) -> Vec<DonutArc> {
    let Some(series) = chart.series.iter().find(|s| s.series_type == SeriesType::Donut) else {
        return Vec::new();
    };
    let total: f64 = series
        .data_slices
        .iter()
        .filter(|s| s.value > 0.0)
        .map(|s| s.value)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -90.0;
    let mut out = Vec::new();
    for sl in &series.data_slices {
        if sl.value <= 0.0 {
            continue;
        }
        let frac = sl.value / total;
        let sweep = frac * 360.0;
        out.push(DonutArc { label: sl.label.clone(), color: sl.color, start, sweep, frac });
        start += sweep;
    }
    out
}

pub(crate) fn donut_geometry(opts: &RenderOptions) -> (f32, f32, f32, f32) {
    let l = opts.insets.left as f32;
    let r = (opts.width - opts.insets.right as i32) as f32;
    let t = opts.insets.top as f32;
    let b = (opts.height - opts.insets.bottom as i32) as f32;
    let cx = (l + r) * 0.5;
    let cy = (t + b) * 0.5;
    let outer = 0.5 * (r - l).min(b - t) * 0.85;
    let inner = outer * DONUT_HOLE as f32;
    (cx, cy, outer, inner)
}

/// Legend rows: donut slices, or series names when there are 2+ series.
pub(crate) fn legend_entries(chart: &Chart) -> Vec<(String, skia::Color)> {
    let mut entries: Vec<(String, skia::Color)> =
        if let Some(d) = chart.series.iter().find(|s| s.series_type == SeriesType::Donut) {
            d.data_slices
                .iter()
                .filter(|s| s.value > 0.0)
                .map(|s| (s.label.clone(), s.color))
                .collect()
        } else if chart.series.len() >= 2 {
            chart.series.iter().map(|s| (s.name.clone(), s.color)).collect()
        } else {
            Vec::new()
        };
    entries.truncate(MAX_LEGEND_ENTRIES);
    entries
}

// ---- drawing helpers --------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut panel = skia::Paint::default();
    panel.set_style(skia::paint::Style::Fill);
    panel.set_color(theme.panel);
    canvas.draw_rect(skia::Rect::from_ltrb(frame.l, frame.t, frame.r, frame.b), &panel);

    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);
    for (v, _) in &frame.x_ticks {
        let x = frame.x.map(*v);
        canvas.draw_line((x, frame.t), (x, frame.b), &grid);
    }
    for (v, _) in &frame.y_ticks {
        let y = frame.y.map(*v);
        canvas.draw_line((frame.l, y), (frame.r, y), &grid);
    }

    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.5);
    canvas.draw_line((frame.l, frame.b), (frame.r, frame.b), &axis);
    canvas.draw_line((frame.l, frame.t), (frame.l, frame.b), &axis);
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    frame: &Frame,
    series: &Series,
    stacks: &mut BarStacks,
    slot: f64,
) {
    let half = slot * BAR_FILL * 0.5;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(series.color);

    for &(x, y) in &series.data_xy {
        if y == 0.0 {
            continue;
        }
        let (v0, v1) = stacks.push(x, y);
        let x0 = frame.x.map(x - half);
        let x1 = frame.x.map(x + half);
        let p0 = frame.y.map(v0);
        let p1 = frame.y.map(v1);
        let rect = skia::Rect::from_ltrb(x0, p0.min(p1), x1, p0.max(p1));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, frame: &Frame, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    path.move_to((frame.x.map(x0), frame.y.map(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((frame.x.map(x), frame.y.map(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.color);
    canvas.draw_path(&path.detach(), &stroke);
}

fn draw_scatter_series(canvas: &skia::Canvas, frame: &Frame, series: &Series) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(series.color);
    for &(x, y) in &series.data_xy {
        canvas.draw_circle((frame.x.map(x), frame.y.map(y)), 3.5, &paint);
    }
}

fn draw_area_series(canvas: &skia::Canvas, frame: &Frame, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }
    let base = frame.y.map(0.0);

    let mut fill_path = skia::PathBuilder::new();
    fill_path.move_to((frame.x.map(data[0].0), base));
    for &(x, y) in data.iter() {
        fill_path.line_to((frame.x.map(x), frame.y.map(y)));
    }
    fill_path.line_to((frame.x.map(data[data.len() - 1].0), base));
    fill_path.close();

    let c = series.color;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(skia::Color::from_argb(AREA_ALPHA, c.r(), c.g(), c.b()));
    canvas.draw_path(&fill_path.detach(), &fill);

    draw_line_series(canvas, frame, series);
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    frame: &Frame,
    chart: &Chart,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for (v, label) in &frame.x_ticks {
        let x = frame.x.map(*v);
        canvas.draw_line((x, frame.b), (x, frame.b + 4.0), &tick_paint);
        shaper.draw_center(canvas, label, x, frame.b + 18.0, LABEL_SIZE, theme.tick);
    }
    for (v, label) in &frame.y_ticks {
        let y = frame.y.map(*v);
        canvas.draw_line((frame.l - 4.0, y), (frame.l, y), &tick_paint);
        shaper.draw_right(canvas, label, frame.l - 8.0, y + 4.0, LABEL_SIZE, theme.tick);
    }

    shaper.draw_center(
        canvas,
        &chart.x_axis.label,
        (frame.l + frame.r) * 0.5,
        frame.b + 44.0,
        14.0,
        theme.axis_label,
    );
    shaper.draw_left(canvas, &chart.y_axis.label, 8.0, frame.t - 10.0, 14.0, theme.axis_label);

    if !chart.title.is_empty() {
        shaper.draw_center(
            canvas,
            &chart.title,
            (frame.l + frame.r) * 0.5,
            frame.t - 10.0,
            TITLE_SIZE,
            theme.axis_label,
        );
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    right: f32,
    top: f32,
    entries: &[(String, skia::Color)],
    theme: &Theme,
    shaper: &TextShaper,
) {
    let line_h = 20.0;
    let swatch = 12.0;
    let pad = 10.0;
    let text_w = entries
        .iter()
        .map(|(n, _)| shaper.measure_width(n, LABEL_SIZE))
        .fold(0f32, f32::max);
    let w = swatch + 8.0 + text_w + pad * 2.0;
    let h = entries.len() as f32 * line_h + pad;
    let x0 = right - w - 8.0;
    let y0 = top + 8.0;

    let p = theme.panel;
    let mut backing = skia::Paint::default();
    backing.set_anti_alias(true);
    backing.set_style(skia::paint::Style::Fill);
    backing.set_color(skia::Color::from_argb(200, p.r(), p.g(), p.b()));
    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, w, h), &backing);

    let mut swatch_paint = skia::Paint::default();
    swatch_paint.set_anti_alias(true);
    swatch_paint.set_style(skia::paint::Style::Fill);

    let mut y = y0 + pad * 0.5;
    for (name, color) in entries {
        swatch_paint.set_color(*color);
        canvas.draw_rect(skia::Rect::from_xywh(x0 + pad, y + 3.0, swatch, swatch), &swatch_paint);
        shaper.draw_left(canvas, name, x0 + pad + swatch + 8.0, y + 14.0, LABEL_SIZE, theme.axis_label);
        y += line_h;
    }
}
