//! Configuration schema types
//!
//! This module defines the configuration structure for shopsync. The root
//! [`SyncConfig`] maps to the `shopsync.toml` file.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Main shopsync configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Shopify API configuration
    pub shopify: ShopifyConfig,

    /// Cursor state configuration
    #[serde(default)]
    pub state: StateConfig,

    /// Output file configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// OMS import document constants
    #[serde(default)]
    pub import: ImportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SyncConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.shopify.validate()?;
        self.state.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (compute the batch but write no files and leave the
    /// cursor untouched)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Shopify API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyConfig {
    /// Shop name, as in `https://<shop_name>.myshopify.com`
    #[serde(default)]
    pub shop_name: String,

    /// Private app API key
    #[serde(default)]
    pub api_key: String,

    /// Private app API password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_password: Option<SecretString>,

    /// Explicit base URL override. When set, `shop_name` is ignored and
    /// requests go to this URL instead (used for integration testing
    /// against a local mock server).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Page size for the orders request (platform maximum 250)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Outbound request throttle
    #[serde(default)]
    pub throttle: ThrottleConfig,
}

impl ShopifyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_none() {
            if self.shop_name.is_empty() {
                return Err("shopify.shop_name cannot be empty".to_string());
            }
            if self.api_key.is_empty() {
                return Err("shopify.api_key cannot be empty".to_string());
            }
            match &self.api_password {
                Some(password) if !password.expose_secret().is_empty() => {}
                _ => return Err("shopify.api_password cannot be empty".to_string()),
            }
        }

        if self.page_size == 0 || self.page_size > 250 {
            return Err(format!(
                "shopify.page_size must be between 1 and 250, got {}",
                self.page_size
            ));
        }

        Ok(())
    }

    /// Resolve the effective base URL for API requests
    pub fn effective_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.myshopify.com", self.shop_name),
        }
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            shop_name: String::new(),
            api_key: String::new(),
            api_password: None,
            base_url: None,
            page_size: default_page_size(),
            timeout_seconds: default_timeout_seconds(),
            throttle: ThrottleConfig::default(),
        }
    }
}

/// Outbound request throttle configuration
///
/// Disabled by default; no request rate is assumed without explicit
/// configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    /// Enable the throttle at the fetcher boundary
    #[serde(default)]
    pub enabled: bool,

    /// Minimum interval between outbound requests in milliseconds
    #[serde(default = "default_throttle_interval_ms")]
    pub min_interval_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_interval_ms: default_throttle_interval_ms(),
        }
    }
}

/// Cursor state configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StateConfig {
    /// Path of the persisted cursor file
    #[serde(default = "default_cursor_path")]
    pub cursor_path: String,
}

impl StateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cursor_path.is_empty() {
            return Err("state.cursor_path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            cursor_path: default_cursor_path(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for archive (audit) CSV files
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Directory for OMS import CSV files
    #[serde(default = "default_import_dir")]
    pub import_dir: String,

    /// File name prefix for archive files
    #[serde(default = "default_archive_prefix")]
    pub archive_prefix: String,

    /// File name prefix for import files
    #[serde(default = "default_import_prefix")]
    pub import_prefix: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.archive_dir.is_empty() {
            return Err("output.archive_dir cannot be empty".to_string());
        }
        if self.import_dir.is_empty() {
            return Err("output.import_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            import_dir: default_import_dir(),
            archive_prefix: default_archive_prefix(),
            import_prefix: default_import_prefix(),
        }
    }
}

/// OMS import document constants
///
/// Fixed literals stamped into every import row. The defaults match the
/// downstream OMS intake conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// ISA sender identifier
    #[serde(default = "default_isa_id")]
    pub isa_id: String,

    /// Fulfillment warehouse code
    #[serde(default = "default_warehouse_code")]
    pub warehouse_code: String,

    /// Document status code stamped on intake
    #[serde(default = "default_status")]
    pub status: String,

    /// Shipping method literal
    #[serde(default = "default_ship_method")]
    pub ship_method: String,

    /// Order unit of measure
    #[serde(default = "default_order_unit")]
    pub order_unit: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            isa_id: default_isa_id(),
            warehouse_code: default_warehouse_code(),
            status: default_status(),
            ship_method: default_ship_method(),
            order_unit: default_order_unit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    200
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_throttle_interval_ms() -> u64 {
    500
}

fn default_cursor_path() -> String {
    "lastImport.csv".to_string()
}

fn default_archive_dir() -> String {
    "Incoming".to_string()
}

fn default_import_dir() -> String {
    "Import".to_string()
}

fn default_archive_prefix() -> String {
    "ShopifyOrders_".to_string()
}

fn default_import_prefix() -> String {
    "OmsImport_".to_string()
}

fn default_isa_id() -> String {
    "SHOPIFY".to_string()
}

fn default_warehouse_code() -> String {
    "MAIN".to_string()
}

fn default_status() -> String {
    "O".to_string()
}

fn default_ship_method() -> String {
    "GROUND".to_string()
}

fn default_order_unit() -> String {
    "EA".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
