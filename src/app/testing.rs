//! In-memory release source for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::client::ReleaseSource;
use crate::app::registry::Component;
use crate::errors::{FetchError, FetchResult};

/// Answers from a fixed `owner/repo -> tag` table; unknown repositories get a 404
#[derive(Debug, Default)]
pub struct FakeReleases {
    tags: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FakeReleases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, repository: &str, tag: &str) -> Self {
        self.tags.insert(repository.to_string(), tag.to_string());
        self
    }

    /// Repositories queried so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseSource for FakeReleases {
    async fn latest_tag(&self, component: &Component) -> FetchResult<String> {
        let repository = component.repository();
        self.requested.lock().unwrap().push(repository.clone());

        self.tags
            .get(&repository)
            .cloned()
            .ok_or(FetchError::Status { status: 404 })
    }
}
