//! Failures surfaced while producing a [`crate::RecordkitConfig`].

use std::path::PathBuf;
use thiserror::Error;

/// Why a recordkit config could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read, or a required one is absent.
    #[error("cannot read config file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text is not JSON5.
    #[error("malformed JSON5: {0}")]
    Syntax(#[from] json5::Error),
    /// The merged value passed the key checks but does not decode.
    #[error("config does not decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// A key or value outside the schema, located as `layer:dotted.path`.
    #[error("invalid config at {location}: {message}")]
    Schema { location: String, message: String },
    /// `logging.level` is not a `log` level filter name.
    #[error("unknown logging level `{0}`")]
    UnknownLogLevel(String),
}
