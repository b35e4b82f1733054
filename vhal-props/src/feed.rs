//! Recorded property feed
//!
//! The subscription feed abstraction: a lazy iterator of property readings.
//! The live host-platform subscription is out of scope, so the feed replays
//! recorded property logs instead - one JSON object per line, in arrival
//! order, exactly the sequence of (identifier, value) events the host would
//! have delivered.
//!
//! Each raw value is resolved against the registry's expected shape here, at
//! the boundary, so consumers only ever see correctly shaped
//! `PropertyValue`s or an explicit error item.

use crate::registry;
use crate::types::{PropertyError, PropertyReading, PropertyValue, Result, ValueShape};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One line of a recorded property log, before shape resolution
#[derive(Debug, Deserialize)]
struct RawRecord {
    timestamp_ns: u64,
    property_id: i32,
    #[serde(default)]
    area_id: i32,
    value: serde_json::Value,
}

/// Iterator over the readings of a recorded property log
///
/// Reads one JSON object per line and emits `PropertyReading`s lazily.
/// Malformed lines and shape mismatches are emitted as `Err` items; the
/// iterator keeps going afterwards, so a single bad line does not end the
/// replay. Blank lines are skipped.
pub struct JsonlFeed<R: BufRead> {
    reader: R,
    line_no: usize,
}

impl JsonlFeed<BufReader<File>> {
    /// Open a recorded property log file for replay
    pub fn open(path: &Path) -> Result<Self> {
        log::info!("Opening property log: {:?}", path);
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlFeed<R> {
    /// Create a feed over any buffered reader of JSON-lines records
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    fn parse_line(&self, line: &str) -> Result<PropertyReading> {
        let record: RawRecord = serde_json::from_str(line).map_err(|e| {
            PropertyError::LogParseError(format!("line {}: {}", self.line_no, e))
        })?;

        let value = resolve_value(record.property_id, record.value)?;
        log::debug!(
            "Property event id {} value: {}",
            record.property_id,
            value
        );

        Ok(PropertyReading {
            timestamp_ns: record.timestamp_ns,
            property_id: record.property_id,
            area_id: record.area_id,
            value,
        })
    }
}

impl<R: BufRead> Iterator for JsonlFeed<R> {
    type Item = Result<PropertyReading>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Some(self.parse_line(trimmed));
        }
    }
}

/// Resolve a raw JSON value into the shape the identifier calls for
///
/// This is the single place where value shapes are decided. Identifiers with
/// no registered shape carry their value as opaque text.
fn resolve_value(property_id: i32, raw: serde_json::Value) -> Result<PropertyValue> {
    let shape = registry::expected_shape(property_id);
    let mismatch = |raw: &serde_json::Value| PropertyError::TypeMismatch {
        property_id,
        expected: shape,
        found: json_kind(raw).to_string(),
    };

    match shape {
        ValueShape::Float => raw
            .as_f64()
            .map(|v| PropertyValue::Float(v as f32))
            .ok_or_else(|| mismatch(&raw)),
        ValueShape::Int32 => raw
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(PropertyValue::Int32)
            .ok_or_else(|| mismatch(&raw)),
        ValueShape::Int64Vec => match &raw {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|v| v.as_i64())
                .collect::<Option<Vec<i64>>>()
                .map(PropertyValue::Int64Vec)
                .ok_or_else(|| mismatch(&raw)),
            _ => Err(mismatch(&raw)),
        },
        ValueShape::Opaque => Ok(match raw {
            serde_json::Value::String(s) => PropertyValue::Text(s),
            other => PropertyValue::Text(other.to_string()),
        }),
    }
}

/// JSON value kind name, used in mismatch errors
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
