// src/config/config_load.rs
//
// loading of config.toml

use super::config_types::*;
use crate::error::{CurvevisError, CurvevisResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "config.toml";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    /// A config.toml was found but couldn't be read; defaults are in use
    Unreadable { path: PathBuf, reason: String },
    Defaults,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub grid: GridConfig,
    pub curve: CurveConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub osc: OscConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then from the
    /// working directory. Falls back to defaults when neither file exists or
    /// the file can't be read; a file that reads but doesn't parse is an error.
    ///
    /// Runs before the log subscriber exists, so it reports where the config
    /// came from instead of logging.
    pub fn load() -> CurvevisResult<(Self, ConfigSource)> {
        Self::load_at(Self::locate())
    }

    pub fn load_at(path: Option<PathBuf>) -> CurvevisResult<(Self, ConfigSource)> {
        let Some(path) = path else {
            return Ok((Self::default(), ConfigSource::Defaults));
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                let config: Self = toml::from_str(&content)
                    .map_err(|e| CurvevisError::config(format!("{}: {}", path.display(), e)))?;
                Ok((config, ConfigSource::File(path)))
            }
            Err(e) => Ok((
                Self::default(),
                ConfigSource::Unreadable {
                    path,
                    reason: e.to_string(),
                },
            )),
        }
    }

    pub fn from_toml_str(content: &str) -> CurvevisResult<Self> {
        toml::from_str(content).map_err(|e| CurvevisError::config(e.to_string()))
    }

    pub fn locate() -> Option<PathBuf> {
        // First try the executable's directory
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));
        if let Some(path) = exe_config {
            if path.exists() {
                return Some(path);
            }
        }

        // Fallback to the current working directory
        let cwd_config = PathBuf::from(CONFIG_FILE);
        cwd_config.exists().then_some(cwd_config)
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        if Path::new(&self.paths.output_directory).is_absolute() {
            PathBuf::from(&self.paths.output_directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .map(|exe_dir| exe_dir.join(&self.paths.output_directory))
                .unwrap_or_else(|| PathBuf::from(&self.paths.output_directory))
        }
    }

    /// Log level for the fmt subscriber; unknown names fall back to INFO.
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.logging.level).unwrap_or(tracing::Level::INFO)
    }
}
