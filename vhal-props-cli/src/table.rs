//! Final property table rendering
//!
//! After a replay, every property seen is listed with its identifier, name
//! and last formatted value - the replay counterpart of the original host
//! screen's live property table.

use serde::Serialize;
use std::collections::BTreeMap;
use vhal_props::registry;

/// One row of the final table, keyed by property identifier
#[derive(Debug, Serialize)]
struct TableRow<'a> {
    property_id: i32,
    name: Option<&'static str>,
    value: &'a str,
}

/// Render the table as plain text
///
/// Multi-line values (wheel ticks) continue under the value column.
pub fn render_txt(entries: &BTreeMap<i32, String>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10}  {:<40}  {}\n",
        "ID", "NAME", "LAST VALUE"
    ));
    out.push_str(&format!("{}\n", "─".repeat(72)));

    for (&property_id, value) in entries {
        let name = registry::property_name(property_id).unwrap_or("-");
        let mut lines = value.lines();
        let first = lines.next().unwrap_or("");
        out.push_str(&format!("{:>10}  {:<40}  {}\n", property_id, name, first));
        for line in lines {
            out.push_str(&format!("{:>10}  {:<40}  {}\n", "", "", line));
        }
    }
    out
}

/// Render the table as a JSON array of rows
pub fn render_json(entries: &BTreeMap<i32, String>) -> serde_json::Result<String> {
    let rows: Vec<TableRow> = entries
        .iter()
        .map(|(&property_id, value)| TableRow {
            property_id,
            name: registry::property_name(property_id),
            value,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> BTreeMap<i32, String> {
        let mut entries = BTreeMap::new();
        entries.insert(registry::CURRENT_GEAR, "GEAR_DRIVE".to_string());
        entries.insert(12345, "hello".to_string());
        entries
    }

    #[test]
    fn test_txt_table_has_names_and_fallback_dash() {
        let rendered = render_txt(&sample_entries());
        assert!(rendered.contains("CURRENT_GEAR"));
        assert!(rendered.contains("GEAR_DRIVE"));
        assert!(rendered.contains("12345"));
        assert!(rendered.contains("  -"));
    }

    #[test]
    fn test_txt_table_multiline_value() {
        let mut entries = BTreeMap::new();
        entries.insert(
            registry::WHEEL_TICK,
            "RST : 1\nFL : 2\nFR : 3\nRR : 4\nRL : 5\n".to_string(),
        );
        let rendered = render_txt(&entries);
        // One header row, one separator, five value lines
        assert_eq!(rendered.lines().count(), 7);
        assert!(rendered.contains("RST : 1"));
        assert!(rendered.contains("RL : 5"));
    }

    #[test]
    fn test_json_table_rows() {
        let rendered = render_json(&sample_entries()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["name"], "CURRENT_GEAR");
        assert_eq!(parsed[0]["name"], serde_json::Value::Null);
    }
}
