//! Manifest loading and writing
//!
//! The manifest is kept as a `toml_edit` document so that comments, key
//! order and formatting survive the rewrite.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, Item, TableLike};

use crate::constants::manifest::{PLUGINS_KEY, TAG_KEY, TEMP_FILE_SUFFIX};
use crate::errors::{ManifestError, ManifestResult};

/// A loaded `velox.toml`
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: DocumentMut,
}

impl Manifest {
    /// Reads and parses the manifest at `path`
    ///
    /// # Errors
    ///
    /// Returns `ManifestError` if the file does not exist, cannot be read,
    /// is not valid TOML, or has no top-level `[plugins]` table
    pub async fn load(path: impl AsRef<Path>) -> ManifestResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading manifest from {}", path.display());

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ManifestError::NotFound {
                    path: path.to_path_buf(),
                },
                _ => ManifestError::Read {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        Self::parse(path, &contents)
    }

    /// Parses manifest contents; `path` is where the manifest will be written back
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> ManifestResult<Self> {
        let path = path.into();
        let document: DocumentMut =
            contents
                .parse()
                .map_err(|e: toml_edit::TomlError| ManifestError::Parse {
                    path: path.clone(),
                    message: e.to_string(),
                })?;

        if !document
            .get(PLUGINS_KEY)
            .is_some_and(|plugins| plugins.is_table_like())
        {
            return Err(ManifestError::MissingPluginsTable { path });
        }

        Ok(Self { path, document })
    }

    /// Overwrites the file this manifest was loaded from
    ///
    /// The new contents go to a temporary file next to the real destination
    /// (symlinks are followed) which is then renamed over it, so a failed
    /// write leaves the original intact. The original file's permissions are
    /// carried over to the new file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Write` if the destination cannot be resolved
    /// or the temporary file cannot be written or renamed
    pub async fn write(&self) -> ManifestResult<()> {
        let write_error = |source| ManifestError::Write {
            path: self.path.clone(),
            source,
        };

        let destination = match tokio::fs::canonicalize(&self.path).await {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(write_error(e)),
        };
        let permissions = tokio::fs::metadata(&destination)
            .await
            .ok()
            .map(|metadata| metadata.permissions());

        let temp_path = temp_path_for(&destination);
        let contents = self.to_toml_string();

        let result = async {
            tokio::fs::write(&temp_path, contents.as_bytes()).await?;
            if let Some(permissions) = permissions {
                tokio::fs::set_permissions(&temp_path, permissions).await?;
            }
            tokio::fs::rename(&temp_path, &destination).await
        }
        .await;

        if let Err(source) = result {
            if tokio::fs::try_exists(&temp_path).await.unwrap_or(false) {
                let _ = tokio::fs::remove_file(&temp_path).await;
            }
            return Err(write_error(source));
        }

        tracing::debug!(
            "Wrote manifest {} to {}",
            self.path.display(),
            destination.display()
        );
        Ok(())
    }

    /// Serialized document
    pub fn to_toml_string(&self) -> String {
        self.document.to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ids of all entries under `[plugins]`, in document order
    pub fn plugin_ids(&self) -> Vec<String> {
        self.plugins()
            .map(|plugins| plugins.iter().map(|(key, _)| key.to_string()).collect())
            .unwrap_or_default()
    }

    /// Current `tag` of a plugin entry, if the entry has a string tag
    pub fn tag(&self, component: &str) -> Option<&str> {
        self.plugins()?
            .get(component)?
            .as_table_like()?
            .get(TAG_KEY)?
            .as_str()
    }

    pub(crate) fn plugins(&self) -> Option<&dyn TableLike> {
        self.document.get(PLUGINS_KEY).and_then(Item::as_table_like)
    }

    pub(crate) fn plugins_mut(&mut self) -> ManifestResult<&mut dyn TableLike> {
        let path = self.path.clone();
        self.document
            .get_mut(PLUGINS_KEY)
            .and_then(Item::as_table_like_mut)
            .ok_or(ManifestError::MissingPluginsTable { path })
    }
}

/// `velox.toml` -> `velox.toml.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension(format!(
        "{}{}",
        path.extension().and_then(|s| s.to_str()).unwrap_or(""),
        TEMP_FILE_SUFFIX
    ))
}
