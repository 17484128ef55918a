// src/util/config.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Runtime settings, read from `config.yml` when present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub database_path: PathBuf,
    /// Simulated "processing" time before an assistant reply lands
    pub reply_delay_ms: u64,
    pub login_delay_ms: u64,
    pub splash_duration_ms: u64,
    /// Pending fine total (in rupees) the fines tracker measures against
    pub fine_limit: u32,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            database_path: PathBuf::from("./db/jugaad.db"),
            reply_delay_ms: 1500,
            login_delay_ms: 1000,
            splash_duration_ms: 3000,
            fine_limit: 25_000,
            dark_mode: false,
        }
    }
}

impl AppConfig {
    /// Missing file means defaults; a file that fails to parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }
}
