// File: crates/chart-plot/src/spec.rs
// Summary: Chart kind and plot spec types carried from the UI to the builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    #[default]
    Bar,
    Line,
    Scatter,
    Area,
    Donut,
}

impl PlotKind {
    pub fn all() -> [PlotKind; 5] {
        [PlotKind::Bar, PlotKind::Line, PlotKind::Scatter, PlotKind::Area, PlotKind::Donut]
    }

    /// Stable token used in URLs and config.
    pub fn token(self) -> &'static str {
        match self {
            PlotKind::Bar => "bar",
            PlotKind::Line => "line",
            PlotKind::Scatter => "scatter",
            PlotKind::Area => "area",
            PlotKind::Donut => "donut",
        }
    }

    /// Human-facing label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            PlotKind::Bar => "Bar",
            PlotKind::Line => "Line",
            PlotKind::Scatter => "Scatter",
            PlotKind::Area => "Area",
            PlotKind::Donut => "Donut",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|k| k.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown chart kind: {s}"))
    }
}

/// Everything the UI selects for one chart.
#[derive(Clone, Debug)]
pub struct PlotSpec {
    pub kind: PlotKind,
    /// X axis column; also names donut slices.
    pub x: String,
    /// Y axis column; must be numeric.
    pub y: String,
    /// Optional grouping column: one series (and color) per distinct value.
    pub color_by: Option<String>,
    /// Palette token, resolved through `chart_core::palette::find`.
    pub palette: String,
    /// Theme token, resolved at render time through `chart_core::theme::find`.
    pub theme: String,
}

impl PlotSpec {
    pub fn new(kind: PlotKind, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            kind,
            x: x.into(),
            y: y.into(),
            color_by: None,
            palette: "vibrant".to_string(),
            theme: "dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens_roundtrip() {
        for kind in PlotKind::all() {
            assert_eq!(kind.token().parse::<PlotKind>().unwrap(), kind);
        }
        assert!("pie".parse::<PlotKind>().is_err());
    }

    #[test]
    fn kind_deserializes_from_lowercase() {
        let k: PlotKind = serde_json::from_str("\"donut\"").unwrap();
        assert_eq!(k, PlotKind::Donut);
    }
}
