//! Concrete record kinds and the JSON boundary.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use recordkit_model::{CLASS_KEY, Model, ParseError, Record, TimestampStyle};
use recordkit_test_utils::{User, as_map, sample_map, sample_record};
use serde_json::json;

/// A concrete kind writes its own name as the discriminator and prefix.
#[test]
fn concrete_kind_uses_its_type_name() {
    let user = User::new("a@example.com");

    let map = user.to_map();
    assert_eq!(map[CLASS_KEY], json!("User"));
    assert_eq!(map["email"], json!("a@example.com"));

    let described = user.describe();
    assert!(described.starts_with("[User] ("));
    assert!(described.contains(user.record().id()));
}

/// Concrete kinds round-trip through their mapping.
#[test]
fn concrete_kind_round_trips() {
    let mut user = User::new("a@example.com");
    user.save();

    let rebuilt = User::from_map(user.to_map()).expect("reconstruct");
    assert_eq!(rebuilt, user);
    assert_eq!(rebuilt.email(), Some("a@example.com"));
}

/// A foreign discriminator is skipped, not enforced.
#[test]
fn foreign_discriminator_is_ignored() {
    let user = User::from_map(sample_map()).expect("reconstruct");
    assert_eq!(user.record().id(), "abc");
    assert!(!user.record().contains(CLASS_KEY));
}

/// Saving through the trait leaves identity alone.
#[test]
fn save_through_trait_keeps_identity() {
    let mut user = User::from_map(sample_map()).expect("reconstruct");
    user.save();

    let record = user.record();
    assert_eq!(record.id(), "abc");
    assert_eq!(
        record.created_at(),
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
    assert!(record.updated_at() > Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap());
}

/// JSON text round-trips every extra field type.
#[test]
fn json_text_round_trips() {
    let record = sample_record();
    let text = record.to_json();

    let rebuilt = Record::from_json(&text).expect("from json");
    assert_eq!(rebuilt, record);
    assert_eq!(
        rebuilt.get("nested"),
        Some(&json!({ "tags": ["a", "b"], "active": true }))
    );
}

/// JSON text that is not an object is rejected.
#[test]
fn json_text_must_be_an_object() {
    let err = Record::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, ParseError::NotAnObject));

    let err = Record::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

/// Naive timestamps produced elsewhere are accepted and can be re-emitted.
#[test]
fn naive_style_matches_offsetless_writers() {
    let record = Record::from_map(as_map(json!({
        "id": "abc",
        "created_at": "2017-09-28T21:03:54.052298",
        "updated_at": "2017-09-28T21:03:54.052302",
    })))
    .expect("reconstruct");

    let map = record.to_map_with(TimestampStyle::Naive);
    assert_eq!(map["created_at"], json!("2017-09-28T21:03:54.052298"));
    assert_eq!(map["updated_at"], json!("2017-09-28T21:03:54.052302"));
}

/// A failed reconstruction leaves nothing behind for the caller.
#[test]
fn malformed_timestamp_fails_whole_reconstruction() {
    let mut map = sample_map();
    map.insert("updated_at".to_string(), json!("2020-13-45T99:00:00"));
    let result = User::from_map(map);
    assert!(matches!(
        result,
        Err(ParseError::InvalidTimestamp { ref field, .. }) if field == "updated_at"
    ));
}
