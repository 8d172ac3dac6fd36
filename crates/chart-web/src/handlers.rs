// File: crates/chart-web/src/handlers.rs
// Summary: Request handlers: upload flow, chart workbench page, chart endpoints.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use uuid::Uuid;

use chart_core::{palette, theme, RenderOptions};
use chart_data::Table;
use chart_plot::{build_chart, PlotKind, PlotSpec};

use crate::error::{Result, WebError};
use crate::models::{chart_url, ChartQuery};
use crate::state::AppState;
use crate::templates::{
    ColumnOption, DatasetTemplate, IndexTemplate, KindOption, PaletteView, ThemeOption,
};

/// Rows shown in the data table preview.
const PREVIEW_ROWS: usize = 50;

pub async fn index() -> IndexTemplate {
    IndexTemplate { error: None, palettes: palette_views("vibrant") }
}

pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let mut filename: Option<String> = None;
    let mut bytes = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            bytes = Some(field.bytes().await?);
        }
    }
    let (Some(filename), Some(bytes)) = (filename, bytes) else {
        return Err(WebError::BadRequest("choose a CSV or Excel file first".into()));
    };

    match Table::load(&filename, &bytes) {
        Ok(table) => {
            let id = state.insert(filename.clone(), table);
            tracing::info!(%id, file = %filename, stored = state.len(), "dataset uploaded");
            Ok(Redirect::to(&format!("/d/{id}")).into_response())
        }
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "upload rejected");
            let page = IndexTemplate {
                error: Some(e.to_string()),
                palettes: palette_views("vibrant"),
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

pub async fn dataset_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(q): Query<ChartQuery>,
) -> Result<DatasetTemplate> {
    let ds = state.get(&id).ok_or(WebError::NotFound)?;
    let spec = q.resolve(&ds.table).ok_or_else(no_numeric_columns)?;
    let show_table = q.show_table();

    let columns = ds.table.column_names();
    let numeric = ds.table.numeric_columns();

    let kinds = PlotKind::all()
        .into_iter()
        .map(|k| KindOption { token: k.token(), label: k.label(), selected: k == spec.kind })
        .collect();
    let x_options = columns
        .iter()
        .map(|c| ColumnOption { name: c.clone(), selected: *c == spec.x })
        .collect();
    let y_options = numeric
        .iter()
        .map(|c| ColumnOption { name: c.clone(), selected: *c == spec.y })
        .collect();
    let color_options = columns
        .iter()
        .map(|c| ColumnOption {
            name: c.clone(),
            selected: spec.color_by.as_deref() == Some(c.as_str()),
        })
        .collect();
    let themes = theme::presets()
        .into_iter()
        .map(|t| ThemeOption {
            name: t.name.to_string(),
            selected: t.name.eq_ignore_ascii_case(&spec.theme),
        })
        .collect();

    let id_str = id.to_string();
    Ok(DatasetTemplate {
        chart_url: chart_url(&id_str, "svg", &spec),
        png_url: chart_url(&id_str, "png", &spec),
        id: id_str,
        name: ds.name.clone(),
        uploaded: ds.uploaded_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        row_count: ds.table.row_count(),
        column_count: columns.len(),
        kinds,
        x_options,
        y_options,
        color_none_selected: spec.color_by.is_none(),
        color_options,
        palettes: palette_views(&spec.palette),
        themes,
        show_table,
        headers: columns,
        preview: if show_table { ds.table.preview(PREVIEW_ROWS) } else { Vec::new() },
    })
}

pub async fn chart_svg(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(q): Query<ChartQuery>,
) -> Result<Response> {
    let (chart, spec) = build_for(&state, &id, &q)?;
    let markup = chart.render_to_svg_string(&render_options(&spec));
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], markup).into_response())
}

pub async fn chart_png(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(q): Query<ChartQuery>,
) -> Result<Response> {
    let (chart, spec) = build_for(&state, &id, &q)?;
    let bytes = chart.render_to_png_bytes(&render_options(&spec))?;
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>"))
}

fn build_for(
    state: &AppState,
    id: &Uuid,
    q: &ChartQuery,
) -> Result<(chart_core::Chart, PlotSpec)> {
    let ds = state.get(id).ok_or(WebError::NotFound)?;
    let spec = q.resolve(&ds.table).ok_or_else(no_numeric_columns)?;
    let chart = build_chart(&ds.table, &spec)?;
    Ok((chart, spec))
}

fn render_options(spec: &PlotSpec) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&spec.theme);
    opts
}

fn no_numeric_columns() -> WebError {
    WebError::BadRequest("dataset has no numeric columns to plot".into())
}

pub(crate) fn palette_views(selected: &str) -> Vec<PaletteView> {
    palette::presets()
        .into_iter()
        .map(|p| PaletteView {
            name: p.name.to_string(),
            label: p.label.to_string(),
            swatches: p.hex_colors(),
            checked: p.name.eq_ignore_ascii_case(selected),
        })
        .collect()
}
