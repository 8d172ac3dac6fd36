// File: crates/chart-core/src/axis.rs
// Summary: Axis model: linear or date-valued ranges, optional categorical labels.

use chrono::NaiveDate;

use crate::grid::{nice_ticks, ticks_at};

/// How tick values are interpreted when formatting labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    /// Values are days since the Common Era (chrono `num_days_from_ce`).
    Date,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// When set the axis is categorical: positions are the indices
    /// 0..categories.len() and ticks carry the category text.
    pub categories: Option<Vec<String>>,
}

/// Categorical axes thin their tick labels past this many categories.
const MAX_CATEGORY_TICKS: usize = 20;

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, categories: None }
    }

    pub fn date(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Date, categories: None }
    }

    /// Categorical axis with one unit-wide slot per category, half a slot of
    /// breathing room on each side.
    pub fn categorical(label: impl Into<String>, categories: Vec<String>) -> Self {
        let n = categories.len().max(1) as f64;
        Self {
            label: label.into(),
            min: -0.5,
            max: n - 0.5,
            kind: ScaleKind::Linear,
            categories: Some(categories),
        }
    }

    pub fn default_x() -> Self {
        Self::new("Index", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    pub fn is_categorical(&self) -> bool {
        self.categories.is_some()
    }

    /// Tick positions with display labels, aiming for roughly `target` ticks.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        if let Some(cats) = &self.categories {
            if cats.is_empty() {
                return Vec::new();
            }
            let step = (cats.len() + MAX_CATEGORY_TICKS - 1) / MAX_CATEGORY_TICKS;
            return cats
                .iter()
                .enumerate()
                .step_by(step.max(1))
                .map(|(i, c)| (i as f64, c.clone()))
                .collect();
        }
        let (mut step, mut ticks) = nice_ticks(self.min, self.max, target);
        if self.kind == ScaleKind::Date && step < 1.0 {
            // Whole days only.
            step = 1.0;
            ticks = ticks_at(self.min, self.max, step);
        }
        ticks
            .into_iter()
            .map(|v| (v, self.format_value(v, step)))
            .collect()
    }

    /// Format a single axis value given the tick step in use.
    pub fn format_value(&self, v: f64, step: f64) -> String {
        match self.kind {
            ScaleKind::Date => NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| format!("{v:.0}")),
            ScaleKind::Linear => format_number(v, step),
        }
    }
}

fn format_number(v: f64, step: f64) -> String {
    // Use just enough decimals to keep consecutive ticks distinct.
    let mut decimals = 0usize;
    let mut s = step.abs();
    while decimals < 6 && (s - s.round()).abs() > 1e-9 {
        s *= 10.0;
        decimals += 1;
    }
    format!("{v:.prec$}", prec = decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn linear_ticks_format_by_step() {
        let a = Axis::new("x", 0.0, 1.0);
        let ticks = a.ticks(5);
        assert!(ticks.iter().any(|(v, s)| *v == 0.0 && s == "0.0"));
    }

    #[test]
    fn categorical_ticks_carry_labels() {
        let a = Axis::categorical("region", vec!["north".into(), "south".into(), "west".into()]);
        assert_eq!(a.min, -0.5);
        assert_eq!(a.max, 2.5);
        let ticks = a.ticks(8);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[1], (1.0, "south".to_string()));
    }

    #[test]
    fn categorical_ticks_thin_out() {
        let cats: Vec<String> = (0..100).map(|i| format!("c{i}")).collect();
        let a = Axis::categorical("c", cats);
        assert!(a.ticks(8).len() <= MAX_CATEGORY_TICKS);
    }

    #[test]
    fn date_ticks_render_iso_dates() {
        let d0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().num_days_from_ce() as f64;
        let a = Axis::date("day", d0, d0 + 10.0);
        let ticks = a.ticks(6);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|(_, s)| s.starts_with("2024-01-")));
    }
}
