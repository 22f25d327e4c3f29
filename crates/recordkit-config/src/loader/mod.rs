//! Layered configuration loader.
//!
//! Discovers configuration layers (user, cwd, runtime overrides), validates
//! each against the schema, merges them in precedence order, and produces a
//! final `RecordkitConfig`.

mod layer_io;
mod merge;
mod schema;


use crate::{ConfigError, RecordkitConfig};
use layer_io::Presence;
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::iter;
use std::path::{Path, PathBuf};

/// Default config filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "recordkit.json5";
/// Default config directory under the user's home.
const DEFAULT_CONFIG_DIR: &str = ".recordkit";

/// Effective config plus metadata about which layers were loaded.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: RecordkitConfig,
    /// Metadata for each layer that contributed.
    pub layers: Vec<ConfigLayer>,
}

/// Origin for a single config layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// User-specific configuration.
    User,
    /// Current working directory configuration.
    Cwd,
    /// Runtime overrides (highest precedence).
    Runtime,
}

impl ConfigLayerSource {
    /// Short name used in logs and schema error locations.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Cwd => "cwd",
            Self::Runtime => "runtime",
        }
    }
}

/// Metadata about a loaded config layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    /// Layer origin.
    pub source: ConfigLayerSource,
    /// Location on disk.
    pub path: PathBuf,
}

/// Options controlling layered config discovery and overrides.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Working directory used to find the cwd layer.
    pub cwd: PathBuf,
    /// Optional user config path (defaults to `~/.recordkit/recordkit.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Runtime override config paths applied last, in order.
    pub runtime_paths: Vec<PathBuf>,
}

impl LayeredConfigOptions {
    /// Create options with default layer locations for the provided cwd.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            user_config_path: layer_io::default_user_config_path(),
            runtime_paths: Vec::new(),
        }
    }

    /// Add a runtime override config path that is applied last.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl RecordkitConfig {
    /// Load a single config from a path (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = layer_io::read_text(path.as_ref())?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, "config")
    }

    /// Load a single config from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Load a layered config stack using the default layer locations.
    pub fn load_layered(cwd: impl AsRef<Path>) -> Result<LayeredConfig, ConfigError> {
        info!(
            "loading layered config with defaults (cwd={})",
            cwd.as_ref().display()
        );
        Self::load_layered_with_options(LayeredConfigOptions::new(cwd))
    }

    /// Load a layered config stack using explicit layer locations and overrides.
    ///
    /// Layer precedence (low -> high): user, cwd, runtime overrides. Missing
    /// user and cwd layers are skipped; runtime paths must exist. A user
    /// or cwd file already applied is not applied again; runtime paths always
    /// apply, so they keep the highest precedence.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let cwd = layer_io::canonical(&options.cwd);
        debug!("resolved cwd for config load: {}", cwd.display());
        let candidates = options
            .user_config_path
            .map(|path| (ConfigLayerSource::User, path, Presence::Optional))
            .into_iter()
            .chain(iter::once((
                ConfigLayerSource::Cwd,
                cwd.join(DEFAULT_CONFIG_FILE),
                Presence::Optional,
            )))
            .chain(
                options
                    .runtime_paths
                    .into_iter()
                    .map(|path| (ConfigLayerSource::Runtime, path, Presence::Required)),
            );

        let mut layers = Vec::new();
        let mut merged = Value::Object(serde_json::Map::new());
        let mut seen = HashSet::new();
        for (source, path, presence) in candidates {
            let key = layer_io::canonical(&path);
            if presence == Presence::Optional && seen.contains(&key) {
                debug!(
                    "skipping {} layer already loaded (path={})",
                    source.label(),
                    path.display()
                );
                continue;
            }
            if let Some(LoadedLayer { meta, value }) =
                layer_io::read_layer(source, &path, presence)?
            {
                seen.insert(key);
                merge::apply_layer(&mut merged, value);
                layers.push(meta);
            }
        }

        let config = config_from_value(merged, "effective")?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

/// Internal representation of a loaded config layer.
#[derive(Debug, Clone)]
struct LoadedLayer {
    meta: ConfigLayer,
    value: Value,
}

fn config_from_value(value: Value, label: &str) -> Result<RecordkitConfig, ConfigError> {
    schema::validate_layer_schema(&value, label)?;
    let config: RecordkitConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}
