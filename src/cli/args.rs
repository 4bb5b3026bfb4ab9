//! Command-line argument parsing for the velox updater
//!
//! Running without arguments updates `./velox.toml` using the built-in
//! component registry; every flag is optional.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::errors::ConfigError;

/// velox-updater - Pin velox.toml plugins to their latest releases
#[derive(Parser, Debug)]
#[command(
    name = "velox_updater",
    version,
    about = "Update velox.toml plugin tags to the latest GitHub releases",
    long_about = "Looks up the latest GitHub release of every known RoadRunner plugin and writes its tag
into the [plugins] table of velox.toml. Nothing is written unless every lookup succeeds."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Update options
    #[command(flatten)]
    pub update: UpdateArgs,
}

/// Logging and configuration options
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the update run
#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// Manifest to update (default: ./velox.toml)
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Resolve releases and report changes without writing the manifest
    #[arg(long)]
    pub dry_run: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

impl UpdateArgs {
    /// Rejects values clap cannot check on its own
    ///
    /// The error names the offending flag and the value it was given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "--timeout".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if let Some(path) = self
            .manifest
            .as_ref()
            .filter(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "--manifest".to_string(),
                value: path.display().to_string(),
                reason: "Manifest path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
