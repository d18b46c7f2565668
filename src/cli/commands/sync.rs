//! Sync command implementation
//!
//! This module implements the `sync` command: one fetch-transform-write
//! cycle against the configured shop.

use crate::config::load_config;
use crate::core::sync::{SyncCoordinator, SyncOutcome};
use clap::Args;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Dry run mode - process the batch without writing files or
    /// advancing the cursor
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting sync command");

        let mut config = load_config(config_path)?;

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        let coordinator = match SyncCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create sync coordinator");
                eprintln!("Failed to initialize sync: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let summary = match coordinator.run().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Sync failed");
                eprintln!("Sync failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        summary.log();

        println!();
        println!("📊 Sync Summary:");
        println!("  Orders fetched: {}", summary.orders_fetched);
        println!("  Records written: {}", summary.records_written);
        if let Some(document_no) = summary.document_no {
            println!("  Document number: {}", document_no);
        }
        if let Some(path) = &summary.archive_file {
            println!("  Archive file: {}", path.display());
        }
        if let Some(path) = &summary.import_file {
            println!("  Import file: {}", path.display());
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

        if summary.outcome == SyncOutcome::NoNewOrders {
            println!();
            println!("No new orders since the last run.");
        }

        println!();
        Ok(0)
    }
}
