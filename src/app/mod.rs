//! Core application logic for the velox updater
//!
//! This module contains the component registry, the GitHub release client,
//! manifest handling and the pipeline that ties them together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use velox_updater::app::{GitHubClient, Registry, UpdateOptions, Updater};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new()?;
//! let updater = Updater::new(client, Registry::builtin(), UpdateOptions::default());
//!
//! let report = updater.run().await?;
//! for (component, outcome) in &report.merge.entries {
//!     println!("{}: {}", component, outcome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod updater;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main public API
pub use client::{ClientConfig, GitHubClient, ReleaseSource};
pub use manifest::{apply_versions, Manifest, MergeOutcome, MergeReport};
pub use registry::{Component, Registry};
pub use resolver::{resolve_all, ResolvedVersion, ResolvedVersions};
pub use updater::{UpdateOptions, UpdateReport, Updater};
