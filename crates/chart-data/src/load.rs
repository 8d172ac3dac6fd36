// File: crates/chart-data/src/load.rs
// Summary: CSV and Excel loaders feeding the shared kind-inference path.

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{DataError, Result};
use crate::table::{Table, MAX_ROWS};
use crate::value::Value;

impl Table {
    /// Load an uploaded file, dispatching on its extension.
    pub fn load(filename: &str, bytes: &[u8]) -> Result<Self> {
        let ext = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Self::from_csv(bytes),
            "xlsx" | "xls" => Self::from_xlsx(bytes),
            other => Err(DataError::UnsupportedExtension(other.to_string())),
        }
    }

    /// Parse CSV bytes; the first record is the header row.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(DataError::Empty);
        }

        let mut rows: Vec<Vec<Value>> = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            if rec.len() != headers.len() {
                // +2: one for the header line, one for 1-based numbering.
                return Err(DataError::Ragged { row: i + 2, got: rec.len(), want: headers.len() });
            }
            if rows.len() >= MAX_ROWS {
                return Err(DataError::TooLarge(MAX_ROWS));
            }
            rows.push(
                rec.iter()
                    .map(|s| {
                        if s.is_empty() {
                            Value::Null
                        } else {
                            Value::Text(s.to_string())
                        }
                    })
                    .collect(),
            );
        }
        Self::from_rows(headers, rows)
    }

    /// Parse xlsx/xls bytes; reads the first worksheet, first row as headers.
    pub fn from_xlsx(bytes: &[u8]) -> Result<Self> {
        let cursor = std::io::Cursor::new(bytes.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor)?;
        let range = workbook.worksheet_range_at(0).ok_or(DataError::Empty)??;

        let mut rows_iter = range.rows();
        let headers: Vec<String> = rows_iter
            .next()
            .ok_or(DataError::Empty)?
            .iter()
            .map(header_cell)
            .collect();

        let mut rows: Vec<Vec<Value>> = Vec::new();
        for row in rows_iter {
            if rows.len() >= MAX_ROWS {
                return Err(DataError::TooLarge(MAX_ROWS));
            }
            rows.push(row.iter().map(cell_to_value).collect());
        }
        Self::from_rows(headers, rows)
    }
}

fn header_cell(d: &Data) -> String {
    match d {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_value(d: &Data) -> Value {
    match d {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                Value::Null
            } else {
                Value::Text(t.to_string())
            }
        }
        Data::Float(f) => Value::Number(*f),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Bool(b) => Value::Text(b.to_string()),
        // Date cells surface as ISO text so column inference marks them Date.
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| Value::Text(ndt.date().format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) => Value::Text(s.clone()),
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}
