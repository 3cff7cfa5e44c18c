use super::model::ConfigurationModel;
use super::paths::resolve_config_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match resolve_config_path() {
        Some(path) => load_from(path),
        None => ConfigurationModel::default(),
    }
}

/// Load configuration from an explicit path, falling back to defaults on error.
pub fn load_from(path: impl AsRef<Path>) -> ConfigurationModel {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ConfigurationModel>(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(PathBuf::from(path));
                tracing::debug!("loaded configuration from {}", path.display());
                return cfg;
            }
            Err(err) => {
                tracing::warn!("unable to parse config file '{}': {err}", path.display());
            }
        },
        Err(err) => {
            tracing::warn!("unable to read config file '{}': {err}", path.display());
        }
    }

    ConfigurationModel::default()
}
