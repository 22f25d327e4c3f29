//! Configuration schema for recordkit.

use log::LevelFilter;
use recordkit_model::{Model, RecordMap, TimestampStyle};
use serde::{Deserialize, Serialize};

/// Root config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RecordkitConfig {
    #[serde(default)]
    pub serialization: SerializationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RecordkitConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> RecordkitConfigBuilder {
        RecordkitConfigBuilder::new()
    }
}

/// Builder for assembling a `RecordkitConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct RecordkitConfigBuilder {
    config: RecordkitConfig,
}

impl RecordkitConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: RecordkitConfig::default(),
        }
    }

    /// Replace the serialization configuration.
    pub fn serialization(mut self, serialization: SerializationConfig) -> Self {
        self.config.serialization = serialization;
        self
    }

    /// Replace the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Finish building the config.
    pub fn build(self) -> RecordkitConfig {
        self.config
    }
}

/// How records are written to their mapping form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SerializationConfig {
    /// Text style for `created_at` / `updated_at`.
    #[serde(default)]
    pub timestamp_style: TimestampStyle,
}

impl SerializationConfig {
    /// Serialize a record of any kind using these settings.
    pub fn to_map<M: Model>(&self, model: &M) -> RecordMap {
        model.to_map_with(self.timestamp_style)
    }
}

/// Logging settings applied by the facade's logger setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` still takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Parsed level filter, falling back to `info` when unrecognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
