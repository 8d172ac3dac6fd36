// File: crates/chart-core/src/view.rs
// Summary: Data-driven view ranges: stacked-aware extents and autoscale.

use std::collections::HashMap;

use crate::chart::Chart;
use crate::series::SeriesType;

#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;
        let mut zero_based = false;

        // Bar series stack in series order, so their Y extents come from the
        // per-x running sums rather than from individual values.
        let mut pos: HashMap<u64, f64> = HashMap::new();
        let mut neg: HashMap<u64, f64> = HashMap::new();

        for s in &chart.series {
            match s.series_type {
                SeriesType::Line | SeriesType::Scatter | SeriesType::Area => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                        any = true;
                    }
                    if s.series_type == SeriesType::Area {
                        zero_based = true;
                    }
                }
                SeriesType::Bar => {
                    zero_based = true;
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        let key = x.to_bits();
                        if y >= 0.0 {
                            *pos.entry(key).or_insert(0.0) += y;
                        } else {
                            *neg.entry(key).or_insert(0.0) += y;
                        }
                        any = true;
                    }
                }
                SeriesType::Donut => {}
            }
        }

        for &v in pos.values() {
            y_max = y_max.max(v);
            y_min = y_min.min(v);
        }
        for &v in neg.values() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if zero_based {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }

        if !any || !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        // Categorical X keeps its slot range.
        if !chart.x_axis.is_categorical() {
            chart.x_axis.min = self.x_min;
            chart.x_axis.max = self.x_max;
        }
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
