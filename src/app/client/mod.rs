//! Release lookup against the GitHub REST API
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: Core HTTP operations
//!
//! `ReleaseSource` is the seam the updater talks to; `GitHubClient` is the
//! production implementation.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::app::registry::Component;
use crate::constants::github;
use crate::errors::{FetchError, FetchResult};

pub mod config;
pub mod http;

pub use config::ClientConfig;

use http::HttpHandler;

/// Something that can name the latest release of a component
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Returns the tag of the latest published release
    ///
    /// An empty string means the release carries no tag; callers treat it
    /// as "leave the pinned version alone".
    async fn latest_tag(&self, component: &Component) -> FetchResult<String>;
}

/// GitHub releases client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http_handler: HttpHandler,
    base_url: Url,
}

impl GitHubClient {
    /// Creates a client with default configuration
    pub fn new() -> FetchResult<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Creates a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the base URL is invalid or the HTTP client
    /// cannot be built
    pub fn with_config(config: &ClientConfig) -> FetchResult<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| FetchError::InvalidUrl {
            url: config.api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: config.api_base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = config.build_http_client()?;
        tracing::debug!("Created GitHub client for {}", base_url);

        Ok(Self {
            http_handler: HttpHandler::new(client),
            base_url,
        })
    }

    /// Builds `{base}/repos/{owner}/{repo}/releases/latest`
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo, "releases", "latest"]);
        Ok(url)
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn latest_tag(&self, component: &Component) -> FetchResult<String> {
        let url = self.latest_release_url(&component.owner, &component.repo)?;
        let release = self.http_handler.get_json(&url).await?;
        extract_tag(&release)
    }
}

/// Reads the tag name out of a release object
///
/// A `null` tag is returned as an empty string; a missing field or a
/// non-string value is an error.
pub fn extract_tag(release: &Value) -> FetchResult<String> {
    match release.get(github::TAG_NAME_FIELD) {
        Some(Value::String(tag)) => Ok(tag.clone()),
        Some(Value::Null) => Ok(String::new()),
        _ => Err(FetchError::MissingTag {
            field: github::TAG_NAME_FIELD,
        }),
    }
}
