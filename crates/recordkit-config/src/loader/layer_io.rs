//! Reading config layers from disk.

use super::{
    ConfigLayer, ConfigLayerSource, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE, LoadedLayer, schema,
};
use crate::ConfigError;
use directories::UserDirs;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What a missing layer file means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Presence {
    /// Skipped silently.
    Optional,
    /// Reported as [`ConfigError::Unreadable`].
    Required,
}

/// Read, parse and schema-check one layer. `None` means an optional file was absent.
pub(super) fn read_layer(
    source: ConfigLayerSource,
    path: &Path,
    presence: Presence,
) -> Result<Option<LoadedLayer>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if presence == Presence::Optional && err.kind() == ErrorKind::NotFound => {
            debug!("no {} layer at {}", source.label(), path.display());
            return Ok(None);
        }
        Err(err) => return Err(unreadable(path, err)),
    };
    let value: Value = json5::from_str(&contents)?;
    schema::validate_layer_schema(&value, &format!("{}({})", source.label(), path.display()))?;
    debug!(
        "read {} layer (path={}, bytes={})",
        source.label(),
        path.display(),
        contents.len()
    );
    Ok(Some(LoadedLayer {
        meta: ConfigLayer {
            source,
            path: path.to_path_buf(),
        },
        value,
    }))
}

/// Whole file as text, with the path attached to any IO failure.
pub(super) fn read_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| unreadable(path, err))
}

/// Canonical form of `path`, or `path` itself when it cannot be resolved.
pub(super) fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// `~/.recordkit/recordkit.json5`, when a home directory is known.
pub(super) fn default_user_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}

fn unreadable(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    }
}
