//! Prelude module for the velox updater library
//!
//! Re-exports the items needed to run an update from another program with a
//! single `use velox_updater::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use velox_updater::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = UpdaterConfig::load(None).await?;
//!     let client = GitHubClient::with_config(&config.client_config()).map_err(AppError::Client)?;
//!     let updater = Updater::new(client, Registry::builtin(), config.update_options(false));
//!
//!     let report = updater.run().await?;
//!     println!("{} tag(s) changed", report.merge.updated_count());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Pipeline components
pub use crate::app::{
    apply_versions, resolve_all, ClientConfig, Component, GitHubClient, Manifest, MergeOutcome,
    MergeReport, Registry, ReleaseSource, ResolvedVersions, UpdateOptions, UpdateReport, Updater,
};

// Configuration
pub use crate::config::UpdaterConfig;

// Commonly used constants
pub use crate::constants::{API_BASE_URL, DEFAULT_MANIFEST_PATH, USER_AGENT};

pub use std::path::{Path, PathBuf};

pub use tokio;
