use anyhow::{Context, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage::csv::DEFAULT_DELIMITER;

pub const DEFAULT_CONFIG_PATH: &str = "song_searcher.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub data: DataSource,
}

#[derive(Debug, Deserialize)]
pub struct DataSource {
    /// CSV file with the songs
    pub path: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            data: DataSource::default(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let cfg: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        log::debug!(
            "Loaded config version {} from {}",
            cfg.version,
            path.to_string_lossy()
        );
        Ok(cfg)
    }

    /// Loads the config at `path`, or falls back to defaults when no config
    /// was asked for explicitly and the default file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load(default)
                } else {
                    log::debug!("No {DEFAULT_CONFIG_PATH} found, using default config");
                    Ok(Config::default())
                }
            }
        }
    }

    /// Path of the data file, `overridden` takes precedence over the config
    pub fn data_path(&self, overridden: Option<PathBuf>) -> anyhow::Result<PathBuf> {
        overridden.or_else(|| self.data.path.clone()).ok_or(anyhow!(
            "no data file configured, set [data].path, --data or SONG_SEARCHER_DATA"
        ))
    }
}
