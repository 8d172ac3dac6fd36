// File: crates/chart-web/src/templates.rs
// Summary: Askama template structs for the upload page and chart workbench.

use askama::Template;

/// One palette radio row with its swatch preview.
pub struct PaletteView {
    pub name: String,
    pub label: String,
    pub swatches: Vec<String>,
    pub checked: bool,
}

pub struct ColumnOption {
    pub name: String,
    pub selected: bool,
}

pub struct KindOption {
    pub token: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct ThemeOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
    pub palettes: Vec<PaletteView>,
}

#[derive(Template)]
#[template(path = "dataset.html")]
pub struct DatasetTemplate {
    pub id: String,
    pub name: String,
    pub uploaded: String,
    pub row_count: usize,
    pub column_count: usize,
    pub kinds: Vec<KindOption>,
    pub x_options: Vec<ColumnOption>,
    pub y_options: Vec<ColumnOption>,
    pub color_options: Vec<ColumnOption>,
    pub color_none_selected: bool,
    pub palettes: Vec<PaletteView>,
    pub themes: Vec<ThemeOption>,
    pub show_table: bool,
    pub chart_url: String,
    pub png_url: String,
    pub headers: Vec<String>,
    pub preview: Vec<Vec<String>>,
}
