mod defaults;
mod file;

use crate::error::{CliError, Result};
use qmshuttle::engine::config::{BridgeConfig, BridgeConfigBuilder};
use std::path::Path;
use tracing::debug;

/// Builds the bridge configuration from compiled-in defaults overlaid
/// with the optional TOML configuration file.
///
/// Settings the file omits fall back to the defaults; with no file at all
/// the defaults stand alone. The assembled configuration is handed to the
/// workflow by reference, never stored globally.
pub fn load(path: Option<&Path>) -> Result<BridgeConfig> {
    let defaults = defaults::DefaultsConfig::default();
    let file = match path {
        Some(path) => file::FileConfig::load(path)?,
        None => {
            debug!("No configuration file given, using compiled-in defaults.");
            file::FileConfig::default()
        }
    };

    let engine_path = file
        .engine
        .and_then(|engine| engine.path)
        .unwrap_or_else(|| defaults.engine_path.into());
    let region_charges = file
        .regions
        .and_then(|regions| regions.charges)
        .unwrap_or(defaults.region_charges);

    BridgeConfigBuilder::new()
        .engine_path(engine_path)
        .region_charges(region_charges)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
