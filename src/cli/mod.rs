//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for shopsync using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// shopsync - Shopify to OMS order sync
#[derive(Parser, Debug)]
#[command(name = "shopsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shopsync.toml", env = "SHOPSYNC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHOPSYNC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the next page of paid orders and write the output files
    Sync(commands::sync::SyncArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show the persisted sync cursor
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
