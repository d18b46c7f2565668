//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the shopsync configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Shop: {}", config.shopify.effective_base_url());
                println!("  Page Size: {}", config.shopify.page_size);
                println!(
                    "  Throttle: {}",
                    if config.shopify.throttle.enabled {
                        format!("every {}ms", config.shopify.throttle.min_interval_ms)
                    } else {
                        "disabled".to_string()
                    }
                );
                println!("  Cursor File: {}", config.state.cursor_path);
                println!("  Archive Dir: {}", config.output.archive_dir);
                println!("  Import Dir: {}", config.output.import_dir);
                println!("  Warehouse: {}", config.import.warehouse_code);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
