// src/listing/record.rs
//! Schemaless records loaded from JSON or CSV data files

use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::item::ListableItem;
use super::value::{FieldValue, Value};
use crate::error::{Error, Result};

pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Names of text and tag fields across `records`, the natural free-text targets
    pub fn text_field_names(records: &[Record]) -> Vec<String> {
        let mut names: Vec<String> = records
            .iter()
            .flat_map(|r| r.fields.iter())
            .filter(|(_, v)| matches!(v, Value::Text(_) | Value::Tags(_)))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Parse a JSON array of objects. Every object needs an `id`.
    pub fn from_json_str(content: &str) -> Result<Vec<Record>> {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(content).map_err(|e| Error::RecordParse(e.to_string()))?;

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                let id = match row.get(ID_FIELD) {
                    Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.clone(),
                    Some(serde_json::Value::Number(n)) => n.to_string(),
                    _ => return Err(Error::RecordParse(format!("record {} has no id", index))),
                };
                let fields = row
                    .iter()
                    .filter(|(name, _)| name.as_str() != ID_FIELD)
                    .filter_map(|(name, json)| Value::from_json(json).map(|v| (name.clone(), v)))
                    .collect();
                Ok(Record { id, fields })
            })
            .collect()
    }

    /// Parse CSV with a header row containing an `id` column
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| Error::RecordParse(e.to_string()))?
            .clone();

        let id_column = headers
            .iter()
            .position(|h| h.trim() == ID_FIELD)
            .ok_or_else(|| Error::RecordParse("CSV header has no id column".to_string()))?;

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row.map_err(|e| Error::RecordParse(e.to_string()))?;
            let id = row
                .get(id_column)
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| Error::RecordParse(format!("row {} has no id", index + 1)))?;

            let fields = headers
                .iter()
                .zip(row.iter())
                .enumerate()
                .filter(|(column, _)| *column != id_column)
                .filter_map(|(_, (name, cell))| {
                    Value::infer(cell).map(|v| (name.trim().to_string(), v))
                })
                .collect();

            records.push(Record {
                id: id.to_string(),
                fields,
            });
        }
        Ok(records)
    }

    /// Load records from a `.json` or `.csv` file
    pub fn load(path: &Path) -> anyhow::Result<Vec<Record>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let records = match extension.as_deref() {
            Some("json") => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Self::from_json_str(&content)
                    .with_context(|| format!("Failed to parse records: {}", path.display()))?
            }
            Some("csv") => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Self::from_csv_reader(file)
                    .with_context(|| format!("Failed to parse records: {}", path.display()))?
            }
            _ => anyhow::bail!(
                "Unsupported data file: {}. Allowed: json, csv",
                path.display()
            ),
        };

        info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl ListableItem for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        if name == ID_FIELD {
            return Some(FieldValue::Text(&self.id));
        }
        self.fields.get(name).map(Value::as_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{query, FilterSpec, PageSpec, QueryEngine, SortSpec};
    use std::io::Write;

    const CSV: &str = "\
id,title,location,salary,postedDate
1,Backend Engineer,Berlin,85000,2024-04-02
2,Data Analyst,Paris,,2024-04-09
3,Frontend Engineer,Berlin,72000,2024-03-28
";

    #[test]
    fn test_csv_types_cells() {
        let records = Record::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].fields["salary"], Value::Number(85000.0));
        assert!(matches!(records[0].fields["postedDate"], Value::Date(_)));
        assert!(!records[1].fields.contains_key("salary"));
    }

    #[test]
    fn test_csv_requires_id_column() {
        let err = Record::from_csv_reader("title\nEngineer\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RecordParse(_)));
    }

    #[test]
    fn test_json_records() {
        let json = r#"[
            {"id": 7, "title": "Nurse", "skills": ["Triage", "EHR"], "notes": null},
            {"id": "eight", "title": "Designer"}
        ]"#;
        let records = Record::from_json_str(json).unwrap();
        assert_eq!(records[0].id, "7");
        assert_eq!(records[1].id, "eight");
        assert!(!records[0].fields.contains_key("notes"));
        assert_eq!(
            Record::text_field_names(&records),
            vec!["skills".to_string(), "title".to_string()]
        );
    }

    #[test]
    fn test_json_requires_id() {
        assert!(Record::from_json_str(r#"[{"title": "No id"}]"#).is_err());
        assert!(Record::from_json_str(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_query_records() {
        let records = Record::from_csv_reader(CSV.as_bytes()).unwrap();
        let engine = QueryEngine::new(Record::text_field_names(&records));
        let page = engine.query(
            &records,
            &FilterSpec::new().with_text("engineer").with_facet("location", "Berlin"),
            Some(&SortSpec::asc("salary")),
            PageSpec::new(1, 10).unwrap(),
        );
        let ids: Vec<&str> = page.page_items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);

        let by_salary = query(
            &records,
            &FilterSpec::new(),
            Some(&SortSpec::asc("salary")),
            PageSpec::new(1, 10).unwrap(),
        );
        assert_eq!(by_salary.page_items[0].id, "2");
    }

    #[test]
    fn test_zero_padded_column_is_searchable_text() {
        let csv = "id,zip,city\nA,02139,Cambridge\nB,10001,New York\n";
        let records = Record::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            records[0],
            Record::new("A")
                .with("zip", Value::Text("02139".to_string()))
                .with("city", Value::Text("Cambridge".to_string()))
        );
        assert_eq!(records[1].fields["zip"], Value::Number(10001.0));

        let page = QueryEngine::new(["zip"]).query(
            &records,
            &FilterSpec::new().with_text("021"),
            None,
            PageSpec::new(1, 10).unwrap(),
        );
        assert_eq!(page.total_matched, 1);

        let json = serde_json::to_value(&records[1]).unwrap();
        assert_eq!(json["zip"], serde_json::json!(10001));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        assert_eq!(Record::load(file.path()).unwrap().len(), 3);

        let other = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
        assert!(Record::load(other.path()).is_err());
    }
}
