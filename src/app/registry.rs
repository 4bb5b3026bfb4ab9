//! Component registry
//!
//! Maps short plugin identifiers, as used under `[plugins]` in the manifest,
//! to the GitHub repository that publishes their releases.

use std::collections::HashSet;
use std::fmt;

use crate::errors::{ConfigError, ConfigResult};

/// Built-in components in declaration order: `(id, owner, repo)`
const BUILTIN_COMPONENTS: &[(&str, &str, &str)] = &[
    ("appLogger", "roadrunner-server", "app-logger"),
    ("logger", "roadrunner-server", "logger"),
    ("lock", "roadrunner-server", "lock"),
    ("rpc", "roadrunner-server", "rpc"),
    ("centrifuge", "roadrunner-server", "centrifuge"),
    ("temporal", "temporalio", "roadrunner-temporal"),
    ("metrics", "roadrunner-server", "metrics"),
    ("otel", "roadrunner-server", "otel"),
    ("http", "roadrunner-server", "http"),
    ("gzip", "roadrunner-server", "gzip"),
    ("prometheus", "roadrunner-server", "prometheus"),
    ("headers", "roadrunner-server", "headers"),
    ("static", "roadrunner-server", "static"),
    ("proxy", "roadrunner-server", "proxy_ip_parser"),
    ("send", "roadrunner-server", "send"),
    ("server", "roadrunner-server", "server"),
    ("service", "roadrunner-server", "service"),
    ("jobs", "roadrunner-server", "jobs"),
    ("amqp", "roadrunner-server", "amqp"),
    ("sqs", "roadrunner-server", "sqs"),
    ("beanstalk", "roadrunner-server", "beanstalk"),
    ("nats", "roadrunner-server", "nats"),
    ("kafka", "roadrunner-server", "kafka"),
    ("googlepubsub", "roadrunner-server", "google-pub-sub"),
    ("kv", "roadrunner-server", "kv"),
    ("boltdb", "roadrunner-server", "boltdb"),
    ("memory", "roadrunner-server", "memory"),
    ("redis", "roadrunner-server", "redis"),
    ("memcached", "roadrunner-server", "memcached"),
    ("fileserver", "roadrunner-server", "fileserver"),
    ("grpc", "roadrunner-server", "grpc"),
    ("status", "roadrunner-server", "status"),
    ("tcp", "roadrunner-server", "tcp"),
];

/// A plugin tracked by the manifest and the repository that releases it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Key under `[plugins]` in the manifest
    pub id: String,
    /// Repository owner on GitHub
    pub owner: String,
    /// Repository name on GitHub
    pub repo: String,
}

impl Component {
    /// Creates a new component
    pub fn new(id: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `owner/repo` slug used in diagnostics
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.id, self.owner, self.repo)
    }
}

/// Ordered, immutable set of components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    components: Vec<Component>,
}

impl Registry {
    /// Builds a registry from an ordered list of components
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any field is empty or an id
    /// appears twice.
    pub fn new(components: Vec<Component>) -> ConfigResult<Self> {
        let mut seen = HashSet::with_capacity(components.len());

        for component in &components {
            for (field, value) in [
                ("id", &component.id),
                ("owner", &component.owner),
                ("repo", &component.repo),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("component.{}", field),
                        value: component.to_string(),
                        reason: "Value must not be empty".to_string(),
                    });
                }
            }

            if !seen.insert(component.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "component.id".to_string(),
                    value: component.id.clone(),
                    reason: "Component ids must be unique".to_string(),
                });
            }
        }

        Ok(Self { components })
    }

    /// The registry compiled into the program
    pub fn builtin() -> Self {
        let components = BUILTIN_COMPONENTS
            .iter()
            .map(|(id, owner, repo)| Component::new(*id, *owner, *repo))
            .collect();
        Self { components }
    }

    /// Looks up a component by id
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Iterates components in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
