//! Error types for the velox updater
//!
//! Each stage of the pipeline has its own error enum; `AppError` aggregates
//! them and carries the component or file that caused the run to abort.

use std::path::PathBuf;
use thiserror::Error;

/// Release lookup errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server responded with HTTP {status}")]
    Status { status: u16 },

    /// Response body is not valid JSON
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Release object has no usable tag field
    #[error("Response has no '{field}' string field")]
    MissingTag { field: &'static str },

    /// Endpoint URL could not be constructed
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Manifest loading, merging and writing errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Manifest exists but cannot be read
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML
    #[error("Failed to parse manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Manifest has no top-level plugins table
    #[error("Manifest {path} has no top-level [plugins] table")]
    MissingPluginsTable { path: PathBuf },

    /// Manifest could not be persisted
    #[error("Failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Known component has no table under plugins
    #[error("Manifest has no [plugins.{component}] table")]
    KeyMissing { component: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file cannot be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Release lookup for one component failed; the run is aborted
    #[error("Failed to fetch the latest release for {component} ({repository}): {source}")]
    Fetch {
        component: String,
        repository: String,
        #[source]
        source: FetchError,
    },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] FetchError),

    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fetch { .. } => "fetch",
            AppError::Client(_) => "client",
            AppError::Manifest(ManifestError::Write { .. }) => "manifest-write",
            AppError::Manifest(ManifestError::KeyMissing { .. }) => "manifest-key",
            AppError::Manifest(_) => "manifest-load",
            AppError::Config(_) => "config",
        }
    }

    /// Component that caused the failure, when the error is tied to one
    pub fn component(&self) -> Option<&str> {
        match self {
            AppError::Fetch { component, .. }
            | AppError::Manifest(ManifestError::KeyMissing { component }) => Some(component),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
