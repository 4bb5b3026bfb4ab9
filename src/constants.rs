//! Application constants for the velox updater
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// GitHub REST API constants
pub mod github {
    /// Base URL of the GitHub REST API
    pub const API_BASE_URL: &str = "https://api.github.com";

    /// Media type recommended by the GitHub REST API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Field of the release object carrying the tag name
    pub const TAG_NAME_FIELD: &str = "tag_name";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// User agent sent with every request; GitHub rejects anonymous agents
    pub const USER_AGENT: &str = concat!("velox-updater/", env!("CARGO_PKG_VERSION"));

    /// Default per-request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Manifest file layout constants
pub mod manifest {
    /// Default manifest location, relative to the working directory
    pub const DEFAULT_PATH: &str = "./velox.toml";

    /// Top-level table holding one entry per plugin
    pub const PLUGINS_KEY: &str = "plugins";

    /// Key of the pinned version inside a plugin entry
    pub const TAG_KEY: &str = "tag";

    /// Suffix for the temporary file used by atomic writes
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";
}

/// Updater configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "velox-updater.toml";

    /// Directory under the user config dir
    pub const APP_DIR_NAME: &str = "velox-updater";

    /// File name inside the user config directory
    pub const USER_FILE_NAME: &str = "config.toml";
}

pub use github::API_BASE_URL;
pub use http::USER_AGENT;
pub use manifest::DEFAULT_PATH as DEFAULT_MANIFEST_PATH;
