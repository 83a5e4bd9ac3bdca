use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FEED_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedConfig {
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "StoreConfig::default_table")]
    pub table: String,
    #[serde(default = "StoreConfig::default_index")]
    pub index: String,
}

impl StoreConfig {
    fn default_table() -> String {
        "ExchangeRates".to_string()
    }

    fn default_index() -> String {
        "TimestampIndex".to_string()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            table: Self::default_table(),
            index: Self::default_index(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub data_path: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("org", "ratewatch", "ratewatch")
            .context("Could not determine project directories")
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Directory holding the rate store; `data_path` wins over the platform default.
    pub fn data_path(&self) -> Result<PathBuf> {
        match &self.data_path {
            Some(custom_path) => Ok(PathBuf::from(custom_path)),
            None => Ok(Self::project_dirs()?.data_dir().to_path_buf()),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid ratewatch configuration")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))
            .and_then(|yaml| Self::from_yaml(&yaml))
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
