//! Concrete record kinds built on top of [`Record`].

use crate::error::ParseError;
use crate::map::{CLASS_KEY, RecordMap};
use crate::record::Record;
use crate::timestamp::TimestampStyle;
use log::debug;
use serde_json::Value;

/// A concrete record type wrapping a base [`Record`].
///
/// `TYPE_NAME` is written under [`CLASS_KEY`] when serializing and prefixes the
/// diagnostic string. Everything else is delegated to the wrapped record.
pub trait Model: Sized {
    /// Type name for the discriminator and display prefix.
    const TYPE_NAME: &'static str;

    /// Borrow the underlying record.
    fn record(&self) -> &Record;

    /// Mutably borrow the underlying record.
    fn record_mut(&mut self) -> &mut Record;

    /// Wrap a reconstructed record.
    fn from_record(record: Record) -> Self;

    /// Move `updated_at` to the current time.
    fn save(&mut self) {
        self.record_mut().save();
    }

    /// Serialize with the default timestamp style.
    fn to_map(&self) -> RecordMap {
        self.to_map_with(TimestampStyle::default())
    }

    /// Serialize with an explicit timestamp style.
    fn to_map_with(&self, style: TimestampStyle) -> RecordMap {
        self.record().to_map_as(Self::TYPE_NAME, style)
    }

    /// Rebuild from a serialized mapping.
    ///
    /// The discriminator is never checked against `TYPE_NAME`; a mismatch is
    /// only logged.
    fn from_map(map: RecordMap) -> Result<Self, ParseError> {
        if let Some(class) = map.get(CLASS_KEY).and_then(Value::as_str)
            && class != Self::TYPE_NAME
        {
            debug!(
                "discriminator mismatch (expected={}, found={})",
                Self::TYPE_NAME,
                class
            );
        }
        Record::from_map(map).map(Self::from_record)
    }

    /// Serialize to JSON text.
    fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }

    /// Rebuild from JSON text holding a serialized mapping.
    fn from_json(text: &str) -> Result<Self, ParseError> {
        match serde_json::from_str(text)? {
            Value::Object(map) => Self::from_map(map),
            _ => Err(ParseError::NotAnObject),
        }
    }

    /// `[<TYPE_NAME>] (<id>) {...}` diagnostic string.
    fn describe(&self) -> String {
        self.record().describe_as(Self::TYPE_NAME).to_string()
    }
}

impl Model for Record {
    const TYPE_NAME: &'static str = Record::TYPE_NAME;

    fn record(&self) -> &Record {
        self
    }

    fn record_mut(&mut self) -> &mut Record {
        self
    }

    fn from_record(record: Record) -> Self {
        record
    }
}
