//! The update pipeline
//!
//! Two phases: every component is resolved first, and only when all of them
//! succeed is the manifest loaded, merged and written. A failure anywhere
//! leaves the file on disk as it was.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::client::ReleaseSource;
use crate::app::manifest::{apply_versions, Manifest, MergeReport};
use crate::app::registry::Registry;
use crate::app::resolver::resolve_all;
use crate::constants::manifest::DEFAULT_PATH;
use crate::errors::Result;

/// Options for one update run
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Manifest to update
    pub manifest_path: PathBuf,
    /// Resolve and merge without writing
    pub dry_run: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_PATH),
            dry_run: false,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub manifest_path: PathBuf,
    pub merge: MergeReport,
    /// Whether the manifest was written back
    pub written: bool,
}

/// Synchronizes manifest tags with the latest releases
pub struct Updater<S> {
    source: S,
    registry: Registry,
    options: UpdateOptions,
}

impl<S: ReleaseSource> Updater<S> {
    pub fn new(source: S, registry: Registry, options: UpdateOptions) -> Self {
        Self {
            source,
            registry,
            options,
        }
    }

    /// Runs resolve, load, merge and write
    ///
    /// # Errors
    ///
    /// Returns the first error of any phase. The manifest is only written
    /// after every other phase has succeeded.
    pub async fn run(&self) -> Result<UpdateReport> {
        info!(
            "Resolving latest releases for {} component(s)",
            self.registry.len()
        );
        let versions = resolve_all(&self.source, &self.registry).await?;

        let mut manifest = Manifest::load(&self.options.manifest_path).await?;
        let merge = apply_versions(&mut manifest, &versions)?;

        let written = if self.options.dry_run {
            info!(
                "Dry run: {} not written",
                self.options.manifest_path.display()
            );
            false
        } else {
            manifest.write().await?;
            info!(
                "Updated {} ({} tag(s) changed)",
                self.options.manifest_path.display(),
                merge.updated_count()
            );
            true
        };

        Ok(UpdateReport {
            manifest_path: self.options.manifest_path.clone(),
            merge,
            written,
        })
    }

    pub fn manifest_path(&self) -> &Path {
        &self.options.manifest_path
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
