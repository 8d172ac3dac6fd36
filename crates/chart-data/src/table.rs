// File: crates/chart-data/src/table.rs
// Summary: Typed column table with kind inference and chart-facing accessors.

use crate::error::{DataError, Result};
use crate::value::{date_to_days, days_to_date, number_to_label, parse_date, ColumnKind, Value};

/// Upload size bound, in data rows.
pub const MAX_ROWS: usize = 100_000;

#[derive(Clone, Debug)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    values: Vec<Value>,
}

impl Column {
    /// Infer the column kind from raw cells and normalize values to it.
    ///
    /// Priority: already-numeric cells, then text that parses as numbers,
    /// then text that parses as dates; anything mixed becomes text.
    fn infer(name: String, raw: Vec<Value>) -> Self {
        let non_null: Vec<&Value> = raw.iter().filter(|v| !v.is_null()).collect();

        if !non_null.is_empty() && non_null.iter().all(|v| matches!(v, Value::Number(_))) {
            return Self { name, kind: ColumnKind::Number, values: raw };
        }

        let all_text = !non_null.is_empty() && non_null.iter().all(|v| matches!(v, Value::Text(_)));
        if all_text {
            let texts: Vec<&str> = non_null
                .iter()
                .filter_map(|v| match v {
                    Value::Text(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect();

            if texts.iter().all(|s| s.trim().parse::<f64>().is_ok()) {
                let values = raw
                    .iter()
                    .map(|v| match v {
                        Value::Text(s) => Value::Number(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
                        _ => Value::Null,
                    })
                    .collect();
                return Self { name, kind: ColumnKind::Number, values };
            }

            if texts.iter().all(|s| parse_date(s.trim()).is_some()) {
                let values = raw
                    .iter()
                    .map(|v| match v {
                        Value::Text(s) => parse_date(s.trim())
                            .map(|d| Value::Number(date_to_days(d)))
                            .unwrap_or(Value::Null),
                        _ => Value::Null,
                    })
                    .collect();
                return Self { name, kind: ColumnKind::Date, values };
            }
        }

        // Mixed or all-null columns are kept as text.
        let values = raw
            .into_iter()
            .map(|v| match v {
                Value::Number(n) => Value::Text(number_to_label(n)),
                other => other,
            })
            .collect();
        Self { name, kind: ColumnKind::Text, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// Per-row plottable values; text columns yield all-None.
    pub fn numbers(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.as_number()).collect()
    }

    /// Per-row display strings (dates in ISO form, nulls empty).
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| match (self.kind, v) {
                (ColumnKind::Date, Value::Number(n)) => days_to_date(*n)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| number_to_label(*n)),
                (_, Value::Number(n)) => number_to_label(*n),
                (_, Value::Text(s)) => s.clone(),
                (_, Value::Null) => String::new(),
            })
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from header names and row-major raw cells, inferring a
    /// kind per column. Loader contract: every row has one cell per header.
    pub(crate) fn from_rows(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if headers.is_empty() || rows.is_empty() {
            return Err(DataError::Empty);
        }
        if rows.len() > MAX_ROWS {
            return Err(DataError::TooLarge(MAX_ROWS));
        }

        let headers = dedup_headers(headers);
        let row_count = rows.len();
        let mut raw_columns: Vec<Vec<Value>> = headers.iter().map(|_| Vec::with_capacity(row_count)).collect();
        for row in rows {
            debug_assert_eq!(row.len(), headers.len());
            for (i, cell) in row.into_iter().enumerate() {
                if i < raw_columns.len() {
                    raw_columns[i].push(cell);
                }
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::infer(name, raw))
            .collect();
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| DataError::NoSuchColumn(name.to_string()))
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Names of columns that can serve as a Y axis.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// First `n` rows as display strings, for the preview table.
    pub fn preview(&self, n: usize) -> Vec<Vec<String>> {
        let labels: Vec<Vec<String>> = self.columns.iter().map(|c| c.labels()).collect();
        (0..self.row_count.min(n))
            .map(|row| labels.iter().map(|col| col[row].clone()).collect())
            .collect()
    }
}

/// Make header names unique by suffixing repeats with `_2`, `_3`, ...
fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    headers
        .into_iter()
        .map(|h| {
            let n = seen.entry(h.clone()).or_insert(0);
            *n += 1;
            if *n == 1 {
                h
            } else {
                format!("{h}_{n}")
            }
        })
        .collect()
}
