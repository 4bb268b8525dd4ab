//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `milk_log` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use milk_log::config::{Cli, Command};
use milk_log::initialization::init_logger_with;
use milk_log::{run_export, run_server};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; flags and real env vars still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match &cli.command {
        Command::Serve(_) => run_server(&config).await,
        Command::Export(args) => run_export(&config, &args.output).await.map(|count| {
            println!(
                "Exported {} record{} to {}",
                count,
                if count == 1 { "" } else { "s" },
                args.output.display()
            );
        }),
    };

    if let Err(e) = outcome {
        eprintln!("milk_log error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
