// File: crates/chart-core/src/series.rs
// Summary: Series model for bar, line, scatter, area, and donut data.
// Notes:
// - XY charts and the donut share one `Series` type with two data layouts:
//   `data_xy` for Bar/Line/Scatter/Area, `data_slices` for Donut. Exactly
//   one layout is populated for a given series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Bar,       // vertical bars from baseline 0; multiple bar series stack
    Line,
    Scatter,
    Area,      // line plus translucent fill down to baseline 0
    Donut,     // ring segments from `data_slices`
}

/// One donut segment. Non-positive values are skipped at render time.
#[derive(Clone, Debug)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: skia::Color,
}

#[derive(Clone)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub color: skia::Color,
    pub data_xy: Vec<(f64, f64)>,     // used by Bar/Line/Scatter/Area
    pub data_slices: Vec<Slice>,      // used by Donut
}

impl Series {
    pub fn new(series_type: SeriesType, name: impl Into<String>, color: skia::Color) -> Self {
        Self {
            name: name.into(),
            series_type,
            color,
            data_xy: Vec::new(),
            data_slices: Vec::new(),
        }
    }

    pub fn with_data(
        series_type: SeriesType,
        name: impl Into<String>,
        color: skia::Color,
        data: Vec<(f64, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            series_type,
            color,
            data_xy: data,
            data_slices: Vec::new(),
        }
    }

    pub fn from_slices(name: impl Into<String>, slices: Vec<Slice>) -> Self {
        let color = slices
            .first()
            .map(|s| s.color)
            .unwrap_or(skia::Color::from_argb(255, 255, 255, 255));
        Self {
            name: name.into(),
            series_type: SeriesType::Donut,
            color,
            data_xy: Vec::new(),
            data_slices: slices,
        }
    }

    /// Downsample XY data using LTTB to at most `max_points`. Donut series
    /// pass through unchanged.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        match self.series_type {
            SeriesType::Bar | SeriesType::Line | SeriesType::Scatter | SeriesType::Area => {
                let data = if self.data_xy.len() > max_points && max_points >= 2 {
                    lttb(&self.data_xy, max_points)
                } else {
                    self.data_xy.clone()
                };
                Series {
                    name: self.name.clone(),
                    series_type: self.series_type,
                    color: self.color,
                    data_xy: data,
                    data_slices: Vec::new(),
                }
            }
            SeriesType::Donut => self.clone(),
        }
    }
}
