// shopsync - Shopify to OMS Order Sync
// Copyright (c) 2025 shopsync Contributors
// Licensed under the MIT License

use clap::Parser;
use shopsync::cli::{Cli, Commands};
use shopsync::config::load_logging_settings;
use shopsync::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // The log level and file-logging layer come from the config file when
    // it is readable; commands re-validate the full configuration later
    let (config_level, logging_config) = load_logging_settings(&cli.config);
    let log_level = cli.log_level.as_deref().unwrap_or(&config_level);
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "shopsync - Shopify to OMS order sync"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Sync(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Status(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
