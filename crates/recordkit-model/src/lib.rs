//! Base record model for recordkit.
//!
//! A [`Record`] carries a unique id, creation/update timestamps and an open set
//! of extra fields. Records serialize to a flat [`RecordMap`] keyed by field
//! name, tagged with the concrete type under [`CLASS_KEY`], and can be rebuilt
//! from that mapping.

pub mod error;
pub mod map;
pub mod model;
pub mod record;
pub mod timestamp;

/// Record error types.
pub use error::{ParseError, RecordError};
/// Mapping format and reserved keys.
pub use map::{CLASS_KEY, CREATED_AT_KEY, ID_KEY, RESERVED_KEYS, RecordMap, UPDATED_AT_KEY};
/// Concrete record kinds.
pub use model::Model;
/// Base record entity.
pub use record::Record;
/// Timestamp text styles.
pub use timestamp::TimestampStyle;
