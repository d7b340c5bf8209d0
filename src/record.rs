// src/record.rs

use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};
use serde_json::Value;
use std::{borrow::Cow, fmt};

use crate::fetch::envelope::{Cell, Table};

/// Column labels the directory reads. Anything else in the sheet is carried
/// along untouched.
pub mod fields {
    pub const COMPANY_NAME: &str = "Company Name";
    pub const INDUSTRY: &str = "Industry";
    pub const HEADQUARTERS: &str = "Headquarters";
    pub const EXCHANGE: &str = "Exchange";
    pub const SECTOR: &str = "Sector";
    pub const WEBSITE: &str = "Website";
    pub const VALUATION: &str = "Company Valuation";
}

/// A single cell after normalization. Empty cells are `Text("")`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl From<Value> for CellValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => CellValue::empty(),
            Value::String(s) => CellValue::Text(s),
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => CellValue::Number(f),
                None => CellValue::Text(n.to_string()),
            },
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<Option<&Cell>> for CellValue {
    fn from(cell: Option<&Cell>) -> Self {
        cell.and_then(|c| c.v.clone())
            .map(CellValue::from)
            .unwrap_or_else(CellValue::empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            // whole numbers print without a trailing ".0"
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One row of the sheet keyed by column label, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip `labels` with the cells of one row. Unlabelled columns are
    /// skipped; cells past the end of a short row stay absent.
    pub fn from_row(labels: &[String], cells: &[Option<Cell>]) -> Self {
        let mut record = Record::new();
        for (i, cell) in cells.iter().enumerate() {
            match labels.get(i) {
                Some(label) if !label.is_empty() => {
                    record.insert(label.clone(), CellValue::from(cell.as_ref()))
                }
                _ => {}
            }
        }
        record
    }

    /// Set `label`. A repeated label keeps its position and takes the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<CellValue>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn text(&self, label: &str) -> Option<Cow<'_, str>> {
        self.get(label).map(CellValue::as_text)
    }

    /// The field's text, or `None` when it is absent or empty.
    pub fn non_empty(&self, label: &str) -> Option<Cow<'_, str>> {
        self.text(label).filter(|t| !t.is_empty())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Normalize every row of `table` into a [`Record`].
pub fn records_from_table(table: &Table) -> Vec<Record> {
    let labels: Vec<String> = table.cols.iter().map(|c| c.label.clone()).collect();
    table
        .rows
        .iter()
        .map(|row| Record::from_row(&labels, &row.c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cell(v: Value) -> Option<Cell> {
        Some(Cell { v: Some(v), f: None })
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zips_labels_to_cells() {
        let r = Record::from_row(
            &labels(&["Company Name", "Industry"]),
            &[cell(json!("Riot Games")), cell(json!("Gaming"))],
        );
        assert_eq!(r.text(fields::COMPANY_NAME).as_deref(), Some("Riot Games"));
        assert_eq!(r.text(fields::INDUSTRY).as_deref(), Some("Gaming"));
        assert_eq!(r.labels().collect::<Vec<_>>(), vec!["Company Name", "Industry"]);
    }

    #[test]
    fn missing_and_null_cells_become_empty_text() {
        let r = Record::from_row(
            &labels(&["A", "B"]),
            &[None, Some(Cell { v: None, f: Some("x".into()) })],
        );
        assert_eq!(r.get("A"), Some(&CellValue::empty()));
        assert_eq!(r.get("B"), Some(&CellValue::empty()));
        assert_eq!(r.non_empty("A"), None);
    }

    #[test]
    fn short_rows_leave_trailing_columns_absent() {
        let r = Record::from_row(&labels(&["A", "B", "C"]), &[cell(json!("a"))]);
        assert_eq!(r.len(), 1);
        assert!(r.get("C").is_none());
    }

    #[test]
    fn unlabelled_columns_are_skipped() {
        let r = Record::from_row(
            &labels(&["A", "", "C"]),
            &[cell(json!(1)), cell(json!(2)), cell(json!(3)), cell(json!(4))],
        );
        assert_eq!(r.labels().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn repeated_label_keeps_last_value() {
        let r = Record::from_row(
            &labels(&["A", "A"]),
            &[cell(json!("first")), cell(json!("second"))],
        );
        assert_eq!(r.len(), 1);
        assert_eq!(r.text("A").as_deref(), Some("second"));
    }

    #[test]
    fn numbers_display_like_the_sheet() {
        assert_eq!(CellValue::from(json!(10)).to_string(), "10");
        assert_eq!(CellValue::from(json!(2.5)).to_string(), "2.5");
        assert_eq!(CellValue::from(json!(true)).to_string(), "true");
    }

    #[test]
    fn serializes_as_an_ordered_object() {
        let r: Record = [("Z", CellValue::from("z")), ("A", CellValue::Number(1.0))]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"Z":"z","A":1.0}"#);
    }
}
