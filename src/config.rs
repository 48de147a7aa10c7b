//! Configuration handling for the TUI

use crate::estimator::DEFAULT_ENDPOINT;
use crate::state::DEFAULT_TIMEOUT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the service URL
pub const SERVICE_URL_ENV: &str = "CAR_PRICE_SERVICE_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Estimation endpoint
    pub service_url: Option<String>,
    /// Seconds before an estimation request is abandoned
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "carprice", "car-price-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes, if the platform has a data dir
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("car-price-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the endpoint: environment, then file, then default
    pub fn service_url(&self) -> String {
        self.service_url_with_env(std::env::var(SERVICE_URL_ENV).ok())
    }

    fn service_url_with_env(&self, env: Option<String>) -> String {
        env.filter(|url| !url.trim().is_empty())
            .or_else(|| self.service_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
