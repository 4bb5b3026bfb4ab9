//! Release resolution phase
//!
//! Resolves every registry component to its latest tag, one request at a
//! time in registry order. The first failure aborts the phase and nothing
//! resolved so far is returned.

use tracing::{debug, info};

use crate::app::client::ReleaseSource;
use crate::app::registry::Registry;
use crate::errors::{AppError, Result};

/// A component id paired with its resolved tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub component: String,
    pub tag: String,
}

/// Tags for every component of a registry, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVersions {
    entries: Vec<ResolvedVersion>,
}

impl ResolvedVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tag, replacing any earlier tag for the same component
    pub fn insert(&mut self, component: impl Into<String>, tag: impl Into<String>) {
        let component = component.into();
        let tag = tag.into();
        match self.entries.iter_mut().find(|e| e.component == component) {
            Some(existing) => existing.tag = tag,
            None => self.entries.push(ResolvedVersion { component, tag }),
        }
    }

    pub fn get(&self, component: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.component == component)
            .map(|e| e.tag.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedVersion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for ResolvedVersions {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut versions = Self::new();
        for (component, tag) in iter {
            versions.insert(component, tag);
        }
        versions
    }
}

/// Resolves the latest tag of every component in `registry`
///
/// # Errors
///
/// Returns `AppError::Fetch` for the first component whose lookup fails;
/// components after it are not queried.
pub async fn resolve_all<S>(source: &S, registry: &Registry) -> Result<ResolvedVersions>
where
    S: ReleaseSource + ?Sized,
{
    let mut resolved = ResolvedVersions::new();

    for component in registry.iter() {
        debug!("Resolving latest release for {}", component);

        let tag = source
            .latest_tag(component)
            .await
            .map_err(|source| AppError::Fetch {
                component: component.id.clone(),
                repository: component.repository(),
                source,
            })?;

        info!("{}: latest release {}", component.id, display_tag(&tag));
        resolved.insert(component.id.clone(), tag);
    }

    Ok(resolved)
}

fn display_tag(tag: &str) -> &str {
    if tag.is_empty() {
        "<none>"
    } else {
        tag
    }
}
