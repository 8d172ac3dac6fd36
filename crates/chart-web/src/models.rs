// File: crates/chart-web/src/models.rs
// Summary: Query-string chart controls and their resolution against a dataset.

use chart_data::Table;
use chart_plot::{PlotKind, PlotSpec};
use serde::{Deserialize, Deserializer};

/// Chart controls carried in the query string. Anything missing falls back
/// to a default derived from the dataset, so a bare `/d/{id}` works.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub kind: Option<PlotKind>,
    pub x: Option<String>,
    pub y: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub color: Option<String>,
    pub palette: Option<String>,
    pub theme: Option<String>,
    /// Checkbox field: present means "show the data table".
    pub table: Option<String>,
}

impl ChartQuery {
    /// Resolve the query into a full spec for `table`. Returns None when the
    /// dataset has no numeric column to plot.
    pub fn resolve(&self, table: &Table) -> Option<PlotSpec> {
        let numeric = table.numeric_columns();
        let x = self
            .x
            .clone()
            .filter(|c| table.column(c).is_some())
            .or_else(|| table.column_names().first().cloned())?;
        let y = self
            .y
            .clone()
            .filter(|c| numeric.contains(c))
            .or_else(|| numeric.first().cloned())?;

        let mut spec = PlotSpec::new(self.kind.unwrap_or_default(), x, y);
        spec.color_by = self.color.clone().filter(|c| table.column(c).is_some());
        if let Some(p) = &self.palette {
            spec.palette = p.clone();
        }
        if let Some(t) = &self.theme {
            spec.theme = t.clone();
        }
        Some(spec)
    }

    pub fn show_table(&self) -> bool {
        self.table.is_some()
    }
}

/// Build the chart endpoint URL for a resolved spec.
pub fn chart_url(id: &str, ext: &str, spec: &PlotSpec) -> String {
    let mut url = format!(
        "/d/{id}/chart.{ext}?kind={}&x={}&y={}&palette={}&theme={}",
        spec.kind.token(),
        urlencode(&spec.x),
        urlencode(&spec.y),
        urlencode(&spec.palette),
        urlencode(&spec.theme),
    );
    if let Some(c) = &spec.color_by {
        url.push_str("&color=");
        url.push_str(&urlencode(c));
    }
    url
}

/// Minimal percent-encoding for query-string values.
pub fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Treat `""` and `"none"` as no selection (the "None" select option).
fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(de)?;
    Ok(s.filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales() -> Table {
        Table::from_csv("region,revenue\nnorth,10\nsouth,20\n".as_bytes()).unwrap()
    }

    #[test]
    fn defaults_pick_first_column_and_first_numeric() {
        let q = ChartQuery::default();
        let spec = q.resolve(&sales()).expect("resolvable");
        assert_eq!(spec.kind, PlotKind::Bar);
        assert_eq!(spec.x, "region");
        assert_eq!(spec.y, "revenue");
        assert_eq!(spec.color_by, None);
        assert_eq!(spec.palette, "vibrant");
        assert_eq!(spec.theme, "dark");
    }

    #[test]
    fn invalid_selections_fall_back() {
        let q = ChartQuery {
            x: Some("nope".into()),
            y: Some("region".into()), // not numeric
            color: Some("missing".into()),
            ..Default::default()
        };
        let spec = q.resolve(&sales()).unwrap();
        assert_eq!(spec.x, "region");
        assert_eq!(spec.y, "revenue");
        assert_eq!(spec.color_by, None);
    }

    #[test]
    fn all_text_table_is_unresolvable() {
        let t = Table::from_csv("a,b\nx,y\n".as_bytes()).unwrap();
        assert!(ChartQuery::default().resolve(&t).is_none());
    }

    #[test]
    fn chart_url_encodes_columns() {
        let mut spec = PlotSpec::new(PlotKind::Line, "unit price", "q&a");
        spec.color_by = Some("region".into());
        let url = chart_url("abc", "svg", &spec);
        assert!(url.starts_with("/d/abc/chart.svg?kind=line&x=unit%20price&y=q%26a"));
        assert!(url.ends_with("&color=region"));
    }
}
