use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::CERT_STAGING_DIR;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base image to plan for when none is given on the command line
    pub base_image: Option<String>,

    /// Certificate files to install when none are given on the command line
    #[serde(default)]
    pub certificates: Vec<String>,

    /// Directory copy entries are placed under
    #[serde(default = "default_target_dir")]
    pub target_dir: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// A JSON array
    Json,
}

fn default_target_dir() -> String {
    CERT_STAGING_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_image: None,
            certificates: Vec::new(),
            target_dir: default_target_dir(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load `certplan/config.toml` from the user config directory, falling
    /// back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("certplan").join("config.toml");
            if config_path.exists() {
                return Self::from_path(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
