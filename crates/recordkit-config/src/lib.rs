//! JSON5 configuration for recordkit.
//!
//! Holds the config model, the layered loader (user, cwd, runtime) and the
//! schema pass that rejects keys recordkit does not know.

mod error;
mod loader;
mod model;

pub use error::ConfigError;
pub use loader::{ConfigLayer, ConfigLayerSource, LayeredConfig, LayeredConfigOptions};
pub use model::*;
