use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Gemini model used for summarization
    pub model: String,
    /// Default listen port
    pub port: u16,
    /// Caption language priority, tried in order before falling back to
    /// whatever track the provider lists first
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            port: 5001,
            languages: vec!["pt-BR".to_string(), "en".to_string()],
        }
    }
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}
