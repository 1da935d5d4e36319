//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where PEX requests are sent unless configured otherwise
pub const DEFAULT_RECIPIENT: &str = "rosario.lawrence@primelending.com";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PexConfig {
    /// Email address the request is addressed to
    pub recipient: Option<String>,
    /// Command that opens mailto: links, replacing the platform opener
    pub mail_command: Option<String>,
}

impl PexConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "primelending", "pex-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Defaults when `path` does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: PexConfig = serde_json::from_str(&content)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Configured recipient, falling back to [`DEFAULT_RECIPIENT`]
    pub fn recipient(&self) -> &str {
        self.recipient
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_RECIPIENT)
    }
}
