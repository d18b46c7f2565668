//! Configuration management for shopsync.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! shopsync uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SHOPSYNC_*` environment variable overrides
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shopsync::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shopsync.toml")?;
//!
//! println!("Shop: {}", config.shopify.shop_name);
//! println!("Cursor file: {}", config.state.cursor_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [shopify]
//! shop_name = "acme"
//! api_key = "${SHOPSYNC_SHOPIFY_API_KEY}"
//! api_password = "${SHOPSYNC_SHOPIFY_API_PASSWORD}"
//! page_size = 200
//!
//! [state]
//! cursor_path = "lastImport.csv"
//!
//! [output]
//! archive_dir = "Incoming"
//! import_dir = "Import"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_logging_settings};
pub use schema::{
    ApplicationConfig, ImportConfig, LoggingConfig, OutputConfig, ShopifyConfig, StateConfig,
    SyncConfig, ThrottleConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
