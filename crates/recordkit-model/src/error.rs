//! Error types for record reconstruction and field access.

use thiserror::Error;

/// Errors returned while rebuilding a record from its serialized form.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A timestamp field did not hold ISO-8601 text.
    #[error("invalid ISO-8601 timestamp for `{field}`: {value:?}")]
    InvalidTimestamp { field: String, value: String },
    /// A field that must be text held another JSON type.
    #[error("field `{field}` must be a string")]
    NotAString { field: String },
    /// The serialized record was not a JSON object.
    #[error("record must be a JSON object")]
    NotAnObject,
    /// The JSON text could not be decoded.
    #[error("invalid record json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by record field mutation.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The key belongs to the record's own bookkeeping.
    #[error("field `{0}` is reserved")]
    ReservedField(String),
}
