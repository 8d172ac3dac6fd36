// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV (or a built-in sample) and renders every chart kind to PNG and SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{theme, RenderOptions};
use chart_data::{ColumnKind, Table};
use chart_plot::{build_chart, PlotKind, PlotSpec};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
            Table::load(&path, &bytes)?
        }
        None => sample_table()?,
    };
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_names().len(),
        "table loaded"
    );

    let columns = table.column_names();
    let numeric = table.numeric_columns();
    let text_cols: Vec<String> = columns
        .iter()
        .filter(|c| !numeric.contains(c))
        .cloned()
        .collect();
    let date_col = table
        .columns()
        .iter()
        .find(|c| c.kind == ColumnKind::Date)
        .map(|c| c.name.clone());

    // Column picks: Y is the first non-date numeric column, X prefers a date
    // column, the donut and grouping use the first text column.
    let y = numeric
        .iter()
        .find(|c| Some(*c) != date_col.as_ref())
        .or_else(|| numeric.first())
        .context("table has no numeric columns")?
        .clone();
    let x = date_col
        .or_else(|| columns.iter().find(|c| **c != y).cloned())
        .context("table has no X column candidate")?;
    let donut_x = text_cols.first().cloned().unwrap_or_else(|| x.clone());
    let color = text_cols.iter().find(|c| **c != x).cloned();

    let out_dir = PathBuf::from("target/out");
    for kind in PlotKind::all() {
        let mut spec = match kind {
            PlotKind::Donut => PlotSpec::new(kind, donut_x.clone(), y.clone()),
            _ => PlotSpec::new(kind, x.clone(), y.clone()),
        };
        if kind != PlotKind::Donut {
            spec.color_by = color.clone();
        }

        let chart = build_chart(&table, &spec)
            .with_context(|| format!("building {} chart", kind.token()))?;
        let mut opts = RenderOptions::default();
        opts.theme = theme::find(&spec.theme);

        let png = out_dir.join(format!("chart_{}.png", kind.token()));
        chart.render_to_png(&opts, &png)?;
        let svg = png.with_extension("svg");
        chart.render_to_svg(&opts, &svg)?;
        tracing::info!("wrote {} and {}", png.display(), svg.display());
    }

    Ok(())
}

/// Small built-in dataset so the demo runs without any input file.
fn sample_table() -> Result<Table> {
    const SAMPLE: &str = "\
region,month,revenue,units
north,2024-01-01,1200.50,34
south,2024-01-01,980.00,27
west,2024-01-01,1130.25,31
north,2024-02-01,1340.75,38
south,2024-02-01,1010.00,29
west,2024-02-01,1205.00,33
north,2024-03-01,1290.00,36
south,2024-03-01,1150.40,30
west,2024-03-01,1320.10,35
";
    Ok(Table::from_csv(SAMPLE.as_bytes())?)
}
