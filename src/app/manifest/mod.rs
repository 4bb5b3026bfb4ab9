//! Manifest handling for `velox.toml`
//!
//! # Module Organization
//!
//! - [`document`] - Loading, inspecting and atomically writing the manifest
//! - [`merge`] - Applying resolved release tags to `[plugins.<id>].tag`
//! - [`tests`] - Load, merge and write against real files
//!
//! # Examples
//!
//! ```rust,no_run
//! use velox_updater::app::manifest::{apply_versions, Manifest};
//! use velox_updater::app::ResolvedVersions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut manifest = Manifest::load("velox.toml").await?;
//! let versions: ResolvedVersions = [("lock", "v4.0.0")].into_iter().collect();
//!
//! let report = apply_versions(&mut manifest, &versions)?;
//! println!("{} plugin(s) updated", report.updated_count());
//! manifest.write().await?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod merge;

#[cfg(test)]
mod tests;

pub use document::Manifest;
pub use merge::{apply_versions, MergeOutcome, MergeReport};
