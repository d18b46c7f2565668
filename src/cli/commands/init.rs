//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shopsync.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing shopsync configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your shop settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set SHOPSYNC_SHOPIFY_API_KEY");
                println!("     - Set SHOPSYNC_SHOPIFY_API_PASSWORD");
                println!("  3. Validate configuration: shopsync validate-config");
                println!("  4. Run a sync: shopsync sync");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# shopsync Configuration File
# Shopify to OMS order sync

[application]
log_level = "info"
dry_run = false

[shopify]
# Shop name, as in https://<shop_name>.myshopify.com
shop_name = "your-shop"

# Private app credentials (use environment variables)
api_key = "${SHOPSYNC_SHOPIFY_API_KEY}"
api_password = "${SHOPSYNC_SHOPIFY_API_PASSWORD}"

# Orders per request (platform maximum 250)
page_size = 200

# Request timeout in seconds
timeout_seconds = 30

[shopify.throttle]
# Minimum-interval request throttle (off by default)
enabled = false
min_interval_ms = 500

[state]
# Persisted sync cursor: "last_order_id,last_document_seq"
cursor_path = "lastImport.csv"

[output]
# Archive (audit) CSV files
archive_dir = "Incoming"
archive_prefix = "ShopifyOrders_"

# OMS import CSV files
import_dir = "Import"
import_prefix = "OmsImport_"

[import]
# Constants stamped into every import row
isa_id = "SHOPIFY"
warehouse_code = "MAIN"
status = "O"
ship_method = "GROUND"
order_unit = "EA"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
