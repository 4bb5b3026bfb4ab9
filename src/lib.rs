//! velox updater library
//!
//! Keeps the plugin tags of a velox build manifest (`velox.toml`) in step
//! with the latest GitHub releases of the RoadRunner plugins. Release
//! lookups all happen before the manifest is touched, so a failed run never
//! leaves a half-updated file behind.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
