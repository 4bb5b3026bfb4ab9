//! Applies resolved tags to a loaded manifest

use std::fmt;

use toml_edit::{Item, TableLike, Value};
use tracing::{debug, warn};

use crate::app::manifest::Manifest;
use crate::app::resolver::ResolvedVersions;
use crate::constants::manifest::TAG_KEY;
use crate::errors::{ManifestError, ManifestResult};

/// What happened to one plugin entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Tag changed; `from` is `None` when the entry had no string tag
    Updated { from: Option<String>, to: String },
    /// Tag already matched the latest release
    Unchanged,
    /// Resolved tag was empty, entry left alone
    Skipped,
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::Updated { from: Some(from), to } => write!(f, "{} -> {}", from, to),
            MergeOutcome::Updated { from: None, to } => write!(f, "set to {}", to),
            MergeOutcome::Unchanged => write!(f, "up to date"),
            MergeOutcome::Skipped => write!(f, "skipped (no release tag)"),
        }
    }
}

/// Per-component outcomes, in resolution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub entries: Vec<(String, MergeOutcome)>,
}

impl MergeReport {
    pub fn updated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, MergeOutcome::Updated { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == MergeOutcome::Skipped)
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == MergeOutcome::Unchanged)
            .count()
    }

    pub fn has_changes(&self) -> bool {
        self.updated_count() > 0
    }

    pub fn outcome(&self, component: &str) -> Option<&MergeOutcome> {
        self.entries
            .iter()
            .find(|(id, _)| id == component)
            .map(|(_, outcome)| outcome)
    }
}

/// Sets `plugins.<id>.tag` for every resolved component
///
/// Every component is checked for a `[plugins.<id>]` table before any entry
/// is touched. Empty tags leave their entry as it is.
///
/// # Errors
///
/// Returns `ManifestError::KeyMissing` for the first resolved component
/// without a table under `[plugins]`.
pub fn apply_versions(
    manifest: &mut Manifest,
    versions: &ResolvedVersions,
) -> ManifestResult<MergeReport> {
    let plugins = manifest.plugins_mut()?;

    if let Some(missing) = versions.iter().find(|resolved| {
        !plugins
            .get(&resolved.component)
            .is_some_and(Item::is_table_like)
    }) {
        return Err(ManifestError::KeyMissing {
            component: missing.component.clone(),
        });
    }

    let mut report = MergeReport::default();

    for resolved in versions.iter() {
        let outcome = if resolved.tag.is_empty() {
            warn!(
                "{}: release has no tag, keeping the pinned version",
                resolved.component
            );
            MergeOutcome::Skipped
        } else {
            let entry = plugins
                .get_mut(&resolved.component)
                .and_then(Item::as_table_like_mut)
                .ok_or_else(|| ManifestError::KeyMissing {
                    component: resolved.component.clone(),
                })?;
            set_tag(entry, &resolved.tag)
        };

        debug!("{}: {}", resolved.component, outcome);
        report.entries.push((resolved.component.clone(), outcome));
    }

    Ok(report)
}

fn set_tag(entry: &mut dyn TableLike, tag: &str) -> MergeOutcome {
    let Some(item) = entry.get_mut(TAG_KEY) else {
        entry.insert(TAG_KEY, toml_edit::value(tag));
        return MergeOutcome::Updated {
            from: None,
            to: tag.to_string(),
        };
    };

    let from = item.as_str().map(str::to_string);
    if from.as_deref() == Some(tag) {
        return MergeOutcome::Unchanged;
    }

    match item.as_value_mut() {
        Some(value) => {
            // Keep comments and spacing attached to the old value
            let decor = value.decor().clone();
            *value = Value::from(tag);
            *value.decor_mut() = decor;
        }
        None => *item = toml_edit::value(tag),
    }

    MergeOutcome::Updated {
        from,
        to: tag.to_string(),
    }
}
