use recordkit_model::{Record, RecordMap};
use serde_json::{Value, json};

/// Unwrap a JSON object literal into a record mapping.
pub fn as_map(value: Value) -> RecordMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Hand-built mapping with fixed identity and timestamps.
pub fn sample_map() -> RecordMap {
    as_map(json!({
        "__class__": "Record",
        "id": "abc",
        "created_at": "2020-01-01T00:00:00",
        "updated_at": "2020-01-02T00:00:00",
        "name": "X",
    }))
}

/// Fresh record carrying a few extra fields of different JSON types.
pub fn sample_record() -> Record {
    let mut record = Record::new();
    record.set("name", "My_First_Model").expect("name");
    record.set("my_number", 89).expect("my_number");
    record
        .set("nested", json!({ "tags": ["a", "b"], "active": true }))
        .expect("nested");
    record
}
