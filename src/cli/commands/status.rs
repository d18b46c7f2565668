//! Status command implementation
//!
//! This module implements the `status` command for displaying the
//! persisted sync cursor.

use crate::config::load_config;
use crate::core::state::CursorStore;
use clap::Args;
use std::path::Path;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking sync status");

        println!("📊 Sync Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        if !Path::new(&config.state.cursor_path).exists() {
            println!("No sync history found.");
            println!("Run 'shopsync sync' to start syncing orders.");
            return Ok(0);
        }

        let store = CursorStore::new(&config.state.cursor_path);
        let cursor = match store.load() {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load cursor file");
                println!("   Error: {}", e);
                return Ok(5); // Fatal error exit code
            }
        };

        println!("  Cursor file: {}", config.state.cursor_path);
        println!("  Last order id: {}", cursor.last_order_id);
        println!("  Last document seq: {}", cursor.last_document_seq);
        println!("  Next document no: {}", cursor.next_document_no());
        println!();
        Ok(0)
    }
}
