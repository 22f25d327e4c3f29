//! The base record entity.


use crate::error::{ParseError, RecordError};
use crate::map::{CLASS_KEY, CREATED_AT_KEY, ID_KEY, RecordMap, UPDATED_AT_KEY, is_reserved};
use crate::timestamp::{self, TimestampStyle};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Data holder with identity, timestamp bookkeeping and open extra fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Hyphenated UUID v4, fixed for the life of the record.
    id: String,
    /// Creation timestamp.
    created_at: DateTime<Utc>,
    /// Timestamp of the last save (or creation).
    updated_at: DateTime<Utc>,
    /// Caller-defined fields in insertion order.
    fields: RecordMap,
}

impl Record {
    /// Type name used as the discriminator and display prefix.
    pub const TYPE_NAME: &'static str = "Record";

    /// Create a record with a fresh id, stamped with the current time.
    pub fn new() -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            fields: RecordMap::new(),
        }
    }

    /// Rebuild a record from its serialized mapping.
    ///
    /// The discriminator is skipped, the two timestamps are parsed from
    /// ISO-8601 text, `id` is restored, and every other key becomes an extra
    /// field verbatim. Keys absent from the mapping keep fresh values.
    pub fn from_map(map: RecordMap) -> Result<Self, ParseError> {
        let mut record = Self::new();
        for (key, value) in map {
            match key.as_str() {
                CLASS_KEY => {}
                CREATED_AT_KEY => record.created_at = parse_timestamp(&key, &value)?,
                UPDATED_AT_KEY => record.updated_at = parse_timestamp(&key, &value)?,
                ID_KEY => match value {
                    Value::String(id) => record.id = id,
                    _ => return Err(ParseError::NotAString { field: key }),
                },
                _ => {
                    record.fields.insert(key, value);
                }
            }
        }
        debug!(
            "reconstructed record (id={}, fields={})",
            record.id,
            record.fields.len()
        );
        Ok(record)
    }

    /// Record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last save timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Move `updated_at` to the current time. Nothing else changes.
    pub fn save(&mut self) {
        self.updated_at = timestamp::now();
        debug!("saved record (id={}, updated_at={})", self.id, self.updated_at);
    }

    /// Set an extra field, returning the value it replaced.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, RecordError> {
        let key = key.into();
        if is_reserved(&key) {
            warn!("rejected reserved field (id={}, field={})", self.id, key);
            return Err(RecordError::ReservedField(key));
        }
        Ok(self.fields.insert(key, value.into()))
    }

    /// Builder form of [`Record::set`] for construction-time fields.
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, RecordError> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Look up an extra field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Remove an extra field, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Whether an extra field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Extra fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of extra fields; bookkeeping keys are not counted.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Serialize under an explicit type name and timestamp style.
    pub fn to_map_as(&self, type_name: &str, style: TimestampStyle) -> RecordMap {
        let mut map = RecordMap::new();
        map.insert(CLASS_KEY.to_string(), Value::from(type_name));
        map.insert(ID_KEY.to_string(), Value::from(self.id.as_str()));
        map.insert(
            CREATED_AT_KEY.to_string(),
            Value::from(timestamp::format(&self.created_at, style)),
        );
        map.insert(
            UPDATED_AT_KEY.to_string(),
            Value::from(timestamp::format(&self.updated_at, style)),
        );
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    /// Diagnostic form under an explicit type name.
    pub fn describe_as<'a>(&'a self, type_name: &'a str) -> impl fmt::Display + 'a {
        Described {
            record: self,
            type_name,
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe_as(Self::TYPE_NAME).fmt(f)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map_as(Self::TYPE_NAME, TimestampStyle::default())
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = RecordMap::deserialize(deserializer)?;
        Record::from_map(map).map_err(serde::de::Error::custom)
    }
}

/// `[<type>] (<id>) {<field>: <value>, ...}`
struct Described<'a> {
    record: &'a Record,
    type_name: &'a str,
}

impl fmt::Display for Described<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(
            f,
            "[{}] ({}) {{{}: {:?}, {}: {}, {}: {}",
            self.type_name,
            record.id,
            ID_KEY,
            record.id,
            CREATED_AT_KEY,
            timestamp::format(&record.created_at, TimestampStyle::Rfc3339),
            UPDATED_AT_KEY,
            timestamp::format(&record.updated_at, TimestampStyle::Rfc3339),
        )?;
        for (key, value) in &record.fields {
            write!(f, ", {key}: {value}")?;
        }
        f.write_str("}")
    }
}

fn parse_timestamp(field: &str, value: &Value) -> Result<DateTime<Utc>, ParseError> {
    let text = value.as_str().ok_or_else(|| ParseError::NotAString {
        field: field.to_string(),
    })?;
    timestamp::parse(field, text)
}
