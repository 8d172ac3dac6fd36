// File: crates/chart-data/src/value.rs
// Summary: Cell values, column kinds, and date conversions.

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    /// Stored as `Number` values holding days since the Common Era.
    Date,
    Text,
}

impl ColumnKind {
    /// Whether the column yields plottable f64 values.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Number | ColumnKind::Date)
    }
}

/// Accepted date layouts, tried in order.
pub(crate) const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

pub(crate) fn date_to_days(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

pub(crate) fn days_to_date(v: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
}

/// Display form of a numeric cell: integers print without a decimal tail.
pub(crate) fn number_to_label(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_date_layouts() {
        let want = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date("2024-03-05"), Some(want));
        assert_eq!(parse_date("2024/03/05"), Some(want));
        assert_eq!(parse_date("05/03/2024"), Some(want));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn day_roundtrip() {
        let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(days_to_date(date_to_days(d)), Some(d));
    }

    #[test]
    fn number_labels_drop_integer_tails() {
        assert_eq!(number_to_label(3.0), "3");
        assert_eq!(number_to_label(3.25), "3.25");
        assert_eq!(number_to_label(-7.0), "-7");
    }
}
