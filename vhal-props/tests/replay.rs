//! End-to-end replay test: write a recorded property log to disk, replay it
//! through the feed, and beautify every reading.

use std::io::Write;
use vhal_props::{beautify, readable_milliwatts, registry, JsonlFeed, PropertyValue};

#[test]
fn replay_recorded_log_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":1000,"property_id":{},"value":4}}"#,
        registry::GEAR_SELECTION
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":2000,"property_id":{},"value":4}}"#,
        registry::IGNITION_STATE
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":3000,"property_id":{},"value":[7,100,101,102,103]}}"#,
        registry::WHEEL_TICK
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":4000,"property_id":{},"value":400000000.0}}"#,
        registry::EV_BATTERY_INSTANTANEOUS_CHARGE_RATE
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":5000,"property_id":12345,"value":"hello"}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let feed = JsonlFeed::open(file.path()).unwrap();
    let readings: Vec<_> = feed.map(|r| r.unwrap()).collect();
    assert_eq!(readings.len(), 5);

    // Readings arrive in log order with their recorded timestamps
    assert_eq!(readings[0].timestamp_ns, 1000);
    assert_eq!(readings[4].timestamp_ns, 5000);

    let formatted: Vec<String> = readings
        .iter()
        .map(|r| beautify(r.property_id, &r.value).unwrap())
        .collect();

    assert_eq!(formatted[0], "GEAR_PARK");
    assert_eq!(formatted[1], "ON");
    assert_eq!(
        formatted[2],
        "RST : 7\nFL : 100\nFR : 101\nRR : 102\nRL : 103\n"
    );
    // The table shows the raw charge rate; the dedicated readout converts it
    assert_eq!(formatted[3], "400000000");
    assert_eq!(
        readable_milliwatts(readings[3].value.as_f32().unwrap()),
        "500 mW"
    );
    assert_eq!(formatted[4], "hello");
}

#[test]
fn replay_missing_file_is_io_error() {
    let result = JsonlFeed::open(std::path::Path::new("no-such-log.jsonl"));
    assert!(matches!(result, Err(vhal_props::PropertyError::IoError(_))));
}

#[test]
fn replay_surfaces_bad_lines_without_stopping() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{broken").unwrap();
    writeln!(
        file,
        r#"{{"timestamp_ns":1,"property_id":{},"value":2}}"#,
        registry::CURRENT_GEAR
    )
    .unwrap();
    file.flush().unwrap();

    let items: Vec<_> = JsonlFeed::open(file.path()).unwrap().collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_err());
    assert_eq!(
        items[1].as_ref().unwrap().value,
        PropertyValue::Int32(2)
    );
}
