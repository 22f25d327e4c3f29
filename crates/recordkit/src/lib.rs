//! Public surface for recordkit.
//!
//! This crate re-exports the record model and configuration crates and
//! provides logging helpers to keep consumer setup consistent.

/// Re-export for convenience.
pub use recordkit_config as config;
/// Re-export for convenience.
pub use recordkit_model as model;

pub use recordkit_config::{RecordkitConfig, SerializationConfig};
pub use recordkit_model::{Model, ParseError, Record, RecordError, RecordMap, TimestampStyle};

use recordkit_config::LoggingConfig;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled or a logger is already
/// installed. `RUST_LOG` controls the filter.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

/// Initialize logging with the configured level as the default filter.
///
/// `RUST_LOG` still overrides the configured level when set.
pub fn init_logging_with(logging: &LoggingConfig) {
    #[cfg(feature = "logging")]
    {
        let env = env_logger::Env::default().default_filter_or(logging.level_filter().as_str());
        let _ = env_logger::Builder::from_env(env).try_init();
    }
    log::debug!("logging initialized (level={})", logging.level);
}
