// src/export/model.rs

use crate::models::{AggregateTable, PlayEvent};
use crate::utils::format_hours;
use serde_json::{Map, Number, Value};

/// A typed cell, so every writer can pick its own representation.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(u64),
    Float(f64),
}

impl CellValue {
    /// Full-precision text (CSV).
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(f) => format!("{f:?}"),
        }
    }

    /// Compact text for printed output (PDF).
    pub fn display_short(&self) -> String {
        match self {
            CellValue::Float(f) => format_hours(*f),
            other => other.display(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Int(n) => Value::Number((*n).into()),
            CellValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        }
    }
}

/// Header + rows, independent of the output format.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ExportTable {
    pub fn from_aggregate(title: &str, table: &AggregateTable) -> Self {
        Self {
            title: title.to_string(),
            headers: table.headers().to_vec(),
            rows: table
                .rows
                .iter()
                .map(|r| {
                    vec![
                        CellValue::Text(r.key.clone()),
                        CellValue::Int(r.count as u64),
                        CellValue::Float(r.hours_played),
                    ]
                })
                .collect(),
        }
    }

    pub fn from_events(title: &str, events: &[PlayEvent]) -> Self {
        Self {
            title: title.to_string(),
            headers: vec!["time", "hours_played", "track", "artist", "album", "reason_end"],
            rows: events
                .iter()
                .map(|e| {
                    vec![
                        CellValue::Text(e.time.to_rfc3339()),
                        CellValue::Float(e.hours_played),
                        CellValue::Text(e.track.clone()),
                        CellValue::Text(e.artist.clone()),
                        CellValue::Text(e.album.clone()),
                        CellValue::Text(e.reason_end.clone()),
                    ]
                })
                .collect(),
        }
    }

    /// All rows as strings; `short` rounds floats for printing.
    pub(crate) fn display_rows(&self, short: bool) -> Vec<Vec<String>> {
        let render = if short {
            CellValue::display_short
        } else {
            CellValue::display
        };
        self.rows
            .iter()
            .map(|row| row.iter().map(render).collect())
            .collect()
    }

    /// All rows as JSON objects keyed by header.
    pub(crate) fn json_rows(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(h, cell)| (h.to_string(), cell.to_json()))
                    .collect();
                Value::Object(obj)
            })
            .collect()
    }
}
