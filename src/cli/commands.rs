//! Command handler for the velox updater CLI
//!
//! Builds the configuration from file and flags, runs the pipeline and
//! prints a summary.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::app::{GitHubClient, Registry, UpdateReport, Updater};
use crate::cli::UpdateArgs;
use crate::config::UpdaterConfig;
use crate::errors::{AppError, Result};

/// Handle an update run
///
/// Resolves every built-in component, then updates the manifest. Any error
/// aborts the run before the manifest is written.
pub async fn handle_update(args: UpdateArgs, config_file: Option<PathBuf>) -> Result<()> {
    let start_time = Instant::now();

    args.validate()?;

    let config = resolve_config(&args, config_file).await?;
    let client = GitHubClient::with_config(&config.client_config()).map_err(AppError::Client)?;
    let updater = Updater::new(client, Registry::builtin(), config.update_options(args.dry_run));

    info!(
        "Updating {} from {}",
        updater.manifest_path().display(),
        config.github.api_base_url
    );

    let report = updater.run().await?;
    print_summary(&report);

    info!("Update finished in {:?}", start_time.elapsed());
    Ok(())
}

/// Layers command-line overrides on top of the loaded configuration
async fn resolve_config(args: &UpdateArgs, config_file: Option<PathBuf>) -> Result<UpdaterConfig> {
    let mut config = UpdaterConfig::load(config_file).await?;

    if let Some(manifest) = &args.manifest {
        config.manifest.path = manifest.clone();
    }
    if let Some(timeout) = args.timeout {
        config.client.request_timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

fn print_summary(report: &UpdateReport) {
    for (component, outcome) in &report.merge.entries {
        info!("  {}: {}", component, outcome);
    }

    let path = report.manifest_path.display();
    if report.written {
        println!(
            "{} has been updated with the latest plugin versions ({} changed, {} unchanged, {} skipped).",
            path,
            report.merge.updated_count(),
            report.merge.unchanged_count(),
            report.merge.skipped_count()
        );
    } else {
        println!("Dry run: {} was not modified.", path);
        for (component, outcome) in &report.merge.entries {
            println!("  {:<14} {}", component, outcome);
        }
    }
}
