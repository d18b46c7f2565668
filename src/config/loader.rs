//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ApplicationConfig, LoggingConfig, SyncConfig};
use crate::config::secret_string;
use serde::Deserialize;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SyncConfig
/// 4. Applies environment variable overrides (SHOPSYNC_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use shopsync::config::loader::load_config;
///
/// let config = load_config("shopsync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SyncError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: SyncConfig = toml::from_str(&contents)
        .map_err(|e| SyncError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config
        .validate()
        .map_err(|e| SyncError::Configuration(format!("Configuration validation failed: {}", e)))?;

    Ok(config)
}

/// Best-effort read of the log settings before full configuration load
///
/// Logging must be installed before any command runs, but the full
/// configuration may be absent or invalid at that point (`shopsync init`
/// has no file yet). This reads only the `[application]` and `[logging]`
/// sections and falls back to defaults on any failure; real configuration
/// errors are surfaced later by [`load_config`].
///
/// Returns the configured log level and the logging section.
pub fn load_logging_settings(path: impl AsRef<Path>) -> (String, LoggingConfig) {
    #[derive(Debug, Default, Deserialize)]
    struct Preload {
        #[serde(default)]
        application: ApplicationConfig,
        #[serde(default)]
        logging: LoggingConfig,
    }

    let preload = fs::read_to_string(path.as_ref())
        .ok()
        .and_then(|contents| toml::from_str::<Preload>(&contents).ok())
        .unwrap_or_default();

    let mut application = preload.application;
    let mut logging = preload.logging;

    if let Ok(val) = std::env::var("SHOPSYNC_APPLICATION_LOG_LEVEL") {
        application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHOPSYNC_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("SHOPSYNC_LOGGING_LOCAL_PATH") {
        logging.local_path = val;
    }

    // An invalid level here falls back to the default so validate-config
    // can still run and report it
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&application.log_level.as_str()) {
        application.log_level = ApplicationConfig::default().log_level;
    }

    (application.log_level, logging)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SHOPSYNC_* prefix
///
/// Environment variables follow the pattern: SHOPSYNC_<SECTION>_<KEY>
/// For example: SHOPSYNC_SHOPIFY_SHOP_NAME, SHOPSYNC_STATE_CURSOR_PATH
fn apply_env_overrides(config: &mut SyncConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SHOPSYNC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHOPSYNC_APPLICATION_DRY_RUN") {
        match val.parse() {
            Ok(parsed) => config.application.dry_run = parsed,
            Err(_) => tracing::warn!(
                value = %val,
                "Ignoring SHOPSYNC_APPLICATION_DRY_RUN: not a boolean"
            ),
        }
    }

    // Shopify overrides
    if let Ok(val) = std::env::var("SHOPSYNC_SHOPIFY_SHOP_NAME") {
        config.shopify.shop_name = val;
    }
    if let Ok(val) = std::env::var("SHOPSYNC_SHOPIFY_API_KEY") {
        config.shopify.api_key = val;
    }
    if let Ok(val) = std::env::var("SHOPSYNC_SHOPIFY_API_PASSWORD") {
        config.shopify.api_password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("SHOPSYNC_SHOPIFY_BASE_URL") {
        config.shopify.base_url = Some(val);
    }
    if let Ok(val) = std::env::var("SHOPSYNC_SHOPIFY_PAGE_SIZE") {
        match val.parse() {
            Ok(size) => config.shopify.page_size = size,
            Err(_) => tracing::warn!(
                value = %val,
                "Ignoring SHOPSYNC_SHOPIFY_PAGE_SIZE: not a number"
            ),
        }
    }

    // State overrides
    if let Ok(val) = std::env::var("SHOPSYNC_STATE_CURSOR_PATH") {
        config.state.cursor_path = val;
    }

    // Output overrides
    if let Ok(val) = std::env::var("SHOPSYNC_OUTPUT_ARCHIVE_DIR") {
        config.output.archive_dir = val;
    }
    if let Ok(val) = std::env::var("SHOPSYNC_OUTPUT_IMPORT_DIR") {
        config.output.import_dir = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SHOPSYNC_LOGGING_LOCAL_ENABLED") {
        match val.parse() {
            Ok(parsed) => config.logging.local_enabled = parsed,
            Err(_) => tracing::warn!(
                value = %val,
                "Ignoring SHOPSYNC_LOGGING_LOCAL_ENABLED: not a boolean"
            ),
        }
    }
    if let Ok(val) = std::env::var("SHOPSYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
