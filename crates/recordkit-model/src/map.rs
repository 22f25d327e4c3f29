//! Serialized mapping format shared by every record kind.

use serde_json::{Map, Value};

/// Flat, insertion-ordered mapping a record serializes to.
pub type RecordMap = Map<String, Value>;

/// Type discriminator. Emitted on output, skipped on input.
pub const CLASS_KEY: &str = "__class__";
/// Record identifier.
pub const ID_KEY: &str = "id";
/// Creation timestamp.
pub const CREATED_AT_KEY: &str = "created_at";
/// Last save timestamp.
pub const UPDATED_AT_KEY: &str = "updated_at";

/// Keys that can never be stored as extra fields.
pub const RESERVED_KEYS: &[&str] = &[CLASS_KEY, ID_KEY, CREATED_AT_KEY, UPDATED_AT_KEY];

/// Whether `key` is owned by the record itself rather than its extra fields.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
