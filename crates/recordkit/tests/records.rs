//! End-to-end record behaviour through the public facade.

use pretty_assertions::assert_eq;
use recordkit::config::LoggingConfig;
use recordkit::{Model, ParseError, Record, RecordkitConfig, TimestampStyle};
use recordkit_test_utils::{User, sample_map, sample_record};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Repeated initialization is harmless.
#[test]
fn logging_init_is_idempotent() {
    recordkit::init_logging_with(&LoggingConfig::default());
    recordkit::init_logging();
    recordkit::init_logging_with(&LoggingConfig {
        level: "trace".to_string(),
    });
}

/// Serialize, reconstruct, and compare every observable piece of state.
#[test]
fn record_round_trip() {
    let mut record = sample_record();
    record.save();

    let rebuilt = Record::from_map(record.to_map()).expect("reconstruct");

    assert_eq!(rebuilt.id(), record.id());
    assert_eq!(rebuilt.created_at(), record.created_at());
    assert_eq!(rebuilt.updated_at(), record.updated_at());
    let fields: Vec<_> = rebuilt.fields().collect();
    let expected: Vec<_> = record.fields().collect();
    assert_eq!(fields, expected);
}

/// Rebuilt records are new objects that later diverge independently.
#[test]
fn reconstructed_record_is_independent() {
    let original = Record::from_map(sample_map()).expect("reconstruct");
    let mut copy = Record::from_map(original.to_map()).expect("copy");
    copy.set("name", "Y").expect("set");
    copy.save();

    assert_eq!(original.get("name"), Some(&json!("X")));
    assert_eq!(copy.get("name"), Some(&json!("Y")));
    assert!(copy.updated_at() > original.updated_at());
}

/// Config chooses the timestamp style; both styles reconstruct identically.
#[test]
fn config_drives_timestamp_style() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("recordkit.json5");
    fs::write(&path, "{ serialization: { timestamp_style: 'naive' } }").expect("write");
    let config = RecordkitConfig::load_from_path(&path).expect("config");
    assert_eq!(config.serialization.timestamp_style, TimestampStyle::Naive);

    let user = User::new("a@example.com");
    let map = config.serialization.to_map(&user);
    let created = map["created_at"].as_str().expect("created_at text");
    assert!(!created.ends_with('Z'));
    assert_eq!(map["__class__"], json!("User"));

    let rebuilt = User::from_map(map).expect("reconstruct");
    assert_eq!(rebuilt, user);
}

/// Malformed input surfaces as a parse error through the facade types.
#[test]
fn malformed_timestamp_surfaces_parse_error() {
    let mut map = sample_map();
    map.insert("created_at".to_string(), json!("not-a-date"));
    let err = Record::from_map(map).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
    assert!(err.to_string().contains("not-a-date"));
}

/// The diagnostic form always carries the id.
#[test]
fn display_carries_identity() {
    let record = sample_record();
    let text = record.to_string();
    assert!(text.starts_with("[Record] ("));
    assert!(text.contains(record.id()));
    assert!(text.contains("my_number: 89"));
}
