//! Configuration management for the velox updater
//!
//! Everything has a built-in default, so no configuration file is needed.
//! When one exists it overrides the defaults, and command-line flags
//! override both.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{ClientConfig, UpdateOptions};
use crate::constants::{config as config_files, github, http, manifest};
use crate::errors::{ConfigError, ConfigResult};

/// Unified updater configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UpdaterConfig {
    /// Manifest settings
    pub manifest: ManifestSettings,
    /// Releases API settings
    pub github: GitHubSettings,
    /// HTTP client settings
    pub client: ClientConfigToml,
}

/// Manifest location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestSettings {
    /// Path of the manifest to update
    pub path: PathBuf,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(manifest::DEFAULT_PATH),
        }
    }
}

/// Releases API location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubSettings {
    /// Base URL of the REST API
    pub api_base_url: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base_url: github::API_BASE_URL.to_string(),
        }
    }
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfigToml {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// User agent header value
    pub user_agent: String,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            request_timeout_secs: http::DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: http::CONNECT_TIMEOUT.as_secs(),
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

impl UpdaterConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Config file (explicit path, else the first one found)
    ///
    /// CLI overrides are applied by the caller.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks values that would only fail later in the run
    pub fn validate(&self) -> ConfigResult<()> {
        if self.manifest.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "manifest.path".to_string(),
                value: String::new(),
                reason: "Path must not be empty".to_string(),
            });
        }

        if self.client.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.request_timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if self.client.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.connect_timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if self.client.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "client.user_agent".to_string(),
                value: self.client.user_agent.clone(),
                reason: "GitHub rejects requests without a user agent".to_string(),
            });
        }

        Ok(())
    }

    /// Runtime HTTP client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.github.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.client.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.client.connect_timeout_secs),
            user_agent: self.client.user_agent.clone(),
        }
    }

    /// Runtime pipeline options
    pub fn update_options(&self, dry_run: bool) -> UpdateOptions {
        UpdateOptions {
            manifest_path: self.manifest.path.clone(),
            dry_run,
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(".").join(config_files::LOCAL_FILE_NAME)];
        if let Some(path) = Self::user_config_path() {
            search_paths.push(path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Per-user config file path, when the platform has a config directory
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_files::APP_DIR_NAME)
                .join(config_files::USER_FILE_NAME)
        })
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config: UpdaterConfig =
            toml::from_str(&content).map_err(|source| ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}
