// File: crates/chart-plot/src/builder.rs
// Summary: Builds a renderable chart from a table and a plot spec.

use std::collections::HashMap;

use chart_core::{palette, Axis, Chart, Series, SeriesType, Slice};
use chart_data::{ColumnKind, Table};

use crate::error::{PlotError, Result};
use crate::spec::{PlotKind, PlotSpec};

/// Line/scatter/area series above this size are LTTB-downsampled.
pub const MAX_POINTS_PER_SERIES: usize = 2_000;

/// Group label used for rows whose grouping cell is empty.
const BLANK_GROUP: &str = "(blank)";

/// Build a chart for `spec` over `table`.
///
/// Numeric X columns plot at their values; text X columns become a
/// categorical axis in first-appearance order. `color_by` splits rows into
/// one series per distinct value, colored by the palette in group order.
pub fn build_chart(table: &Table, spec: &PlotSpec) -> Result<Chart> {
    let y_col = table.require(&spec.y)?;
    if !y_col.is_numeric() {
        return Err(PlotError::NonNumericY(spec.y.clone()));
    }

    if spec.kind == PlotKind::Donut {
        return build_donut(table, spec);
    }

    let x_col = table.require(&spec.x)?;
    let pal = palette::find(&spec.palette);
    let ys = y_col.numbers();

    let (xs, x_axis) = if x_col.is_numeric() {
        let axis = match x_col.kind {
            ColumnKind::Date => Axis::date(&spec.x, 0.0, 1.0),
            _ => Axis::new(&spec.x, 0.0, 1.0),
        };
        (x_col.numbers(), axis)
    } else {
        categorical_positions(&spec.x, &x_col.labels())
    };

    let series_type = match spec.kind {
        PlotKind::Bar => SeriesType::Bar,
        PlotKind::Line => SeriesType::Line,
        PlotKind::Scatter => SeriesType::Scatter,
        PlotKind::Area => SeriesType::Area,
        PlotKind::Donut => unreachable!("handled above"),
    };

    // Group rows: one bucket (series) per distinct grouping value, keeping
    // first-appearance order and skipping rows with a null X or Y.
    let group_labels: Option<Vec<String>> = match &spec.color_by {
        Some(col) => Some(table.require(col)?.labels()),
        None => None,
    };

    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<(f64, f64)>> = HashMap::new();
    let mut total_points = 0usize;
    for (i, (x, y)) in xs.iter().zip(&ys).enumerate() {
        let (Some(x), Some(y)) = (x, y) else { continue };
        let key = match &group_labels {
            Some(labels) => {
                let l = labels[i].as_str();
                if l.is_empty() { BLANK_GROUP.to_string() } else { l.to_string() }
            }
            None => spec.y.clone(),
        };
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        buckets.entry(key).or_default().push((*x, *y));
        total_points += 1;
    }
    if total_points == 0 {
        return Err(PlotError::NoRows);
    }

    let downsample = matches!(
        spec.kind,
        PlotKind::Line | PlotKind::Scatter | PlotKind::Area
    );

    let mut chart = Chart::new();
    for (i, name) in order.iter().enumerate() {
        let points = buckets.remove(name).unwrap_or_default();
        let mut series = Series::with_data(series_type, name.clone(), pal.color(i), points);
        if downsample {
            series = series.downsample_xy_lttb(MAX_POINTS_PER_SERIES);
        }
        chart.add_series(series);
    }

    chart.x_axis = x_axis;
    chart.y_axis = Axis::new(&spec.y, 0.0, 1.0);
    chart.autoscale_axes();
    Ok(chart)
}

/// Donut: slices keyed by X label with Y values summed per label; the
/// grouping column is ignored since X already names the slices.
fn build_donut(table: &Table, spec: &PlotSpec) -> Result<Chart> {
    let x_col = table.require(&spec.x)?;
    let y_col = table.require(&spec.y)?;
    let pal = palette::find(&spec.palette);

    let labels = x_col.labels();
    let ys = y_col.numbers();

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();
    for (label, y) in labels.iter().zip(&ys) {
        let Some(y) = y else { continue };
        if label.is_empty() {
            continue;
        }
        if !sums.contains_key(label) {
            order.push(label.clone());
        }
        *sums.entry(label.clone()).or_insert(0.0) += y;
    }
    if order.is_empty() {
        return Err(PlotError::NoRows);
    }

    let slices: Vec<Slice> = order
        .iter()
        .enumerate()
        .map(|(i, label)| Slice { label: label.clone(), value: sums[label], color: pal.color(i) })
        .collect();

    let mut chart = Chart::new();
    chart.add_series(Series::from_slices(spec.y.clone(), slices));
    Ok(chart)
}

/// Map text labels onto category slot indices in first-appearance order.
fn categorical_positions(axis_label: &str, labels: &[String]) -> (Vec<Option<f64>>, Axis) {
    let mut cats: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut xs = Vec::with_capacity(labels.len());
    for l in labels {
        if l.is_empty() {
            xs.push(None);
            continue;
        }
        let i = match index.get(l) {
            Some(&i) => i,
            None => {
                index.insert(l.clone(), cats.len());
                cats.push(l.clone());
                cats.len() - 1
            }
        };
        xs.push(Some(i as f64));
    }
    (xs, Axis::categorical(axis_label, cats))
}
