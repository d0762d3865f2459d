use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Directory browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name suffixes classified as media (case-sensitive)
    #[serde(default = "default_media_extensions")]
    pub media_extensions: Vec<String>,

    /// Sort listings (folders first, then by name) instead of keeping
    /// the order the directory enumeration yields
    #[serde(default)]
    pub sort_entries: bool,
}

fn default_media_extensions() -> Vec<String> {
    vec![".mp4".to_string(), ".mkv".to_string(), ".avi".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_extensions: default_media_extensions(),
            sort_entries: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Check if a file name carries one of the media suffixes
    pub fn is_media_name(&self, name: &str) -> bool {
        self.media_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
