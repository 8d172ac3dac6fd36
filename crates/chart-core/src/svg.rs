// File: crates/chart-core/src/svg.rs
// Summary: SVG rendering; reuses the frame/stack/arc arithmetic of the Skia pipeline.

use std::fmt::Write as _;

use skia_safe as skia;

use crate::chart::{
    bar_slot_width, donut_geometry, donut_slices, layout_frame, legend_entries, BarStacks, Chart,
    Frame, RenderOptions, AREA_ALPHA, BAR_FILL, DONUT_MIN_LABEL_FRAC,
};
use crate::palette::to_hex;
use crate::series::SeriesType;

const LABEL_SIZE: f32 = 13.0;
const FONT: &str = "'Segoe UI', Arial, Helvetica, sans-serif";

pub(crate) fn render(chart: &Chart, opts: &RenderOptions) -> String {
    let theme = &opts.theme;
    let mut svg = Svg::new(opts.width, opts.height, theme.background);

    if chart.has_donut() {
        render_donut(&mut svg, chart, opts);
    } else {
        render_xy(&mut svg, chart, opts);
    }
    render_legend(&mut svg, chart, opts);

    svg.finish()
}

fn render_xy(svg: &mut Svg, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let frame = layout_frame(chart, opts);

    svg.rect(frame.l, frame.t, frame.r - frame.l, frame.b - frame.t, theme.panel, None);
    for (v, _) in &frame.x_ticks {
        let x = frame.x.map(*v);
        svg.line(x, frame.t, x, frame.b, theme.grid, 1.0);
    }
    for (v, _) in &frame.y_ticks {
        let y = frame.y.map(*v);
        svg.line(frame.l, y, frame.r, y, theme.grid, 1.0);
    }
    svg.line(frame.l, frame.b, frame.r, frame.b, theme.axis_line, 1.5);
    svg.line(frame.l, frame.t, frame.l, frame.b, theme.axis_line, 1.5);

    svg.clip_rect("plot", frame.l, frame.t, frame.r - frame.l, frame.b - frame.t);
    svg.open_group("url(#plot)");
    let slot = bar_slot_width(chart);
    let mut stacks = BarStacks::new();
    for s in &chart.series {
        match s.series_type {
            SeriesType::Bar => bar_marks(svg, &frame, s, &mut stacks, slot),
            SeriesType::Line => line_marks(svg, &frame, s),
            SeriesType::Scatter => scatter_marks(svg, &frame, s),
            SeriesType::Area => area_marks(svg, &frame, s),
            SeriesType::Donut => {}
        }
    }
    svg.close_group();

    if opts.draw_labels {
        for (v, label) in &frame.x_ticks {
            let x = frame.x.map(*v);
            svg.line(x, frame.b, x, frame.b + 4.0, theme.axis_line, 1.0);
            svg.text(x, frame.b + 18.0, "middle", LABEL_SIZE, theme.tick, label);
        }
        for (v, label) in &frame.y_ticks {
            let y = frame.y.map(*v);
            svg.line(frame.l - 4.0, y, frame.l, y, theme.axis_line, 1.0);
            svg.text(frame.l - 8.0, y + 4.0, "end", LABEL_SIZE, theme.tick, label);
        }
        svg.text(
            (frame.l + frame.r) * 0.5,
            frame.b + 44.0,
            "middle",
            14.0,
            theme.axis_label,
            &chart.x_axis.label,
        );
        svg.text(8.0, frame.t - 10.0, "start", 14.0, theme.axis_label, &chart.y_axis.label);
        if !chart.title.is_empty() {
            svg.text(
                (frame.l + frame.r) * 0.5,
                frame.t - 10.0,
                "middle",
                16.0,
                theme.axis_label,
                &chart.title,
            );
        }
    }
}

fn bar_marks(svg: &mut Svg, frame: &Frame, s: &crate::series::Series, stacks: &mut BarStacks, slot: f64) {
    let half = slot * BAR_FILL * 0.5;
    for &(x, y) in &s.data_xy {
        if y == 0.0 {
            continue;
        }
        let (v0, v1) = stacks.push(x, y);
        let x0 = frame.x.map(x - half);
        let x1 = frame.x.map(x + half);
        let p0 = frame.y.map(v0);
        let p1 = frame.y.map(v1);
        svg.rect(x0, p0.min(p1), x1 - x0, (p0 - p1).abs(), s.color, None);
    }
}

fn line_marks(svg: &mut Svg, frame: &Frame, s: &crate::series::Series) {
    if s.data_xy.len() < 2 {
        return;
    }
    let pts: Vec<(f32, f32)> = s
        .data_xy
        .iter()
        .map(|&(x, y)| (frame.x.map(x), frame.y.map(y)))
        .collect();
    svg.polyline(&pts, s.color, 2.0);
}

fn scatter_marks(svg: &mut Svg, frame: &Frame, s: &crate::series::Series) {
    for &(x, y) in &s.data_xy {
        svg.circle(frame.x.map(x), frame.y.map(y), 3.5, s.color);
    }
}

fn area_marks(svg: &mut Svg, frame: &Frame, s: &crate::series::Series) {
    if s.data_xy.len() < 2 {
        return;
    }
    let base = frame.y.map(0.0);
    let mut d = String::new();
    let _ = write!(d, "M{:.1},{:.1}", frame.x.map(s.data_xy[0].0), base);
    for &(x, y) in &s.data_xy {
        let _ = write!(d, " L{:.1},{:.1}", frame.x.map(x), frame.y.map(y));
    }
    let _ = write!(d, " L{:.1},{:.1} Z", frame.x.map(s.data_xy[s.data_xy.len() - 1].0), base);
    svg.fill_path(&d, s.color, Some(AREA_ALPHA as f32 / 255.0));
    line_marks(svg, frame, s);
}

fn render_donut(svg: &mut Svg, chart: &Chart, opts: &RenderOptions) {
    let arcs = donut_slices(chart);
    if arcs.is_empty() {
        return;
    }
    let (cx, cy, outer, inner) = donut_geometry(opts);

    for arc in &arcs {
        // A full single-slice ring would collapse its arc endpoints.
        let sweep = arc.sweep.min(359.99);
        let a0 = arc.start.to_radians();
        let a1 = (arc.start + sweep).to_radians();
        let large = if sweep > 180.0 { 1 } else { 0 };
        let (ox0, oy0) = (cx + outer * a0.cos() as f32, cy + outer * a0.sin() as f32);
        let (ox1, oy1) = (cx + outer * a1.cos() as f32, cy + outer * a1.sin() as f32);
        let (ix0, iy0) = (cx + inner * a1.cos() as f32, cy + inner * a1.sin() as f32);
        let (ix1, iy1) = (cx + inner * a0.cos() as f32, cy + inner * a0.sin() as f32);
        let d = format!(
            "M{ox0:.1},{oy0:.1} A{outer:.1},{outer:.1} 0 {large} 1 {ox1:.1},{oy1:.1} \
             L{ix0:.1},{iy0:.1} A{inner:.1},{inner:.1} 0 {large} 0 {ix1:.1},{iy1:.1} Z"
        );
        svg.fill_path(&d, arc.color, None);
    }

    if opts.draw_labels {
        for arc in arcs.iter().filter(|a| a.frac >= DONUT_MIN_LABEL_FRAC) {
            let mid = (arc.start + arc.sweep * 0.5).to_radians();
            let lx = cx + outer * 1.12 * mid.cos() as f32;
            let ly = cy + outer * 1.12 * mid.sin() as f32 + 4.0;
            let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };
            let text = format!("{} {:.0}%", arc.label, arc.frac * 100.0);
            svg.text(lx, ly, anchor, LABEL_SIZE, opts.theme.axis_label, &text);
        }
    }
}

fn render_legend(svg: &mut Svg, chart: &Chart, opts: &RenderOptions) {
    if !opts.draw_legend {
        return;
    }
    let entries = legend_entries(chart);
    if entries.is_empty() {
        return;
    }
    let theme = &opts.theme;
    let line_h = 20.0;
    let swatch = 12.0;
    let pad = 10.0;
    // Close enough to the shaped-text width used by the raster path.
    let text_w = entries
        .iter()
        .map(|(n, _)| n.chars().count() as f32 * LABEL_SIZE * 0.58)
        .fold(0f32, f32::max);
    let w = swatch + 8.0 + text_w + pad * 2.0;
    let h = entries.len() as f32 * line_h + pad;
    let right = (opts.width - opts.insets.right as i32) as f32;
    let x0 = right - w - 8.0;
    let y0 = opts.insets.top as f32 + 8.0;

    svg.rect(x0, y0, w, h, theme.panel, Some(200.0 / 255.0));
    let mut y = y0 + pad * 0.5;
    for (name, color) in &entries {
        svg.rect(x0 + pad, y + 3.0, swatch, swatch, *color, None);
        svg.text(x0 + pad + swatch + 8.0, y + 14.0, "start", LABEL_SIZE, theme.axis_label, name);
        y += line_h;
    }
}

// ---- markup builder ---------------------------------------------------------

struct Svg {
    out: String,
}

impl Svg {
    fn new(width: i32, height: i32, background: skia::Color) -> Self {
        let mut out = String::with_capacity(4096);
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"{FONT}\">"
        );
        let _ = writeln!(
            out,
            "  <rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            to_hex(background)
        );
        Self { out }
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: skia::Color, opacity: Option<f32>) {
        let op = opacity
            .map(|o| format!(" fill-opacity=\"{o:.3}\""))
            .unwrap_or_default();
        let _ = writeln!(
            self.out,
            "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" fill=\"{}\"{op}/>",
            to_hex(fill)
        );
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: skia::Color, width: f32) {
        let _ = writeln!(
            self.out,
            "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
             stroke=\"{}\" stroke-width=\"{width}\"/>",
            to_hex(stroke)
        );
    }

    fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: skia::Color) {
        let _ = writeln!(
            self.out,
            "  <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r}\" fill=\"{}\"/>",
            to_hex(fill)
        );
    }

    fn polyline(&mut self, pts: &[(f32, f32)], stroke: skia::Color, width: f32) {
        let mut points = String::with_capacity(pts.len() * 12);
        for (x, y) in pts {
            let _ = write!(points, "{x:.1},{y:.1} ");
        }
        let _ = writeln!(
            self.out,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\" \
             stroke-linejoin=\"round\"/>",
            points.trim_end(),
            to_hex(stroke)
        );
    }

    fn fill_path(&mut self, d: &str, fill: skia::Color, opacity: Option<f32>) {
        let op = opacity
            .map(|o| format!(" fill-opacity=\"{o:.3}\""))
            .unwrap_or_default();
        let _ = writeln!(self.out, "  <path d=\"{d}\" fill=\"{}\"{op}/>", to_hex(fill));
    }

    fn text(&mut self, x: f32, y: f32, anchor: &str, size: f32, fill: skia::Color, s: &str) {
        let _ = writeln!(
            self.out,
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"{anchor}\" font-size=\"{size}\" \
             fill=\"{}\">{}</text>",
            to_hex(fill),
            escape(s)
        );
    }

    fn clip_rect(&mut self, id: &str, x: f32, y: f32, w: f32, h: f32) {
        let _ = writeln!(
            self.out,
            "  <clipPath id=\"{id}\"><rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" \
             height=\"{h:.1}\"/></clipPath>"
        );
    }

    fn open_group(&mut self, clip: &str) {
        let _ = writeln!(self.out, "  <g clip-path=\"{clip}\">");
    }

    fn close_group(&mut self) {
        let _ = writeln!(self.out, "  </g>");
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
