//! ConfigLoader: merges defaults, the global config file and the environment.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{env, global_file};
use crate::config::GishConfig;
use crate::error::GishError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults < global file < environment.
    pub fn load() -> Result<GishConfig, GishError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env::add_to_builder(builder);
        let config: GishConfig = builder.build()?.try_deserialize()?;
        debug!("Loaded configuration from default sources");
        Ok(config)
    }

    /// Load configuration from an explicit file instead of the global one.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<GishConfig, GishError> {
        if !path.exists() {
            return Err(GishError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path.to_path_buf()));
        let builder = env::add_to_builder(builder);
        let config: GishConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration from file");
        Ok(config)
    }

    /// Path of the global config file, whether or not it exists.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
