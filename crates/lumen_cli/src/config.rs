//! Render configuration files.
//!
//! A config is a JSON object with any of `lighting_mode`,
//! `shadows_enabled` and `parallel`; missing keys keep their defaults.

use lumen_renderer::RenderConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid render config in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub fn load_render_config(path: &Path) -> ConfigResult<RenderConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded render config from {}: {:?}", path.display(), config);
    Ok(config)
}
