//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DB_PATH, DEFAULT_BIND, DEFAULT_EXPORT_PATH, DEFAULT_PORT, ENV_DB_PATH, ENV_PORT,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Record daily milk yields and export them to a spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "milk_log", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// SQLite database file
    #[arg(long, env = ENV_DB_PATH, default_value = DB_PATH, global = true)]
    pub db_path: PathBuf,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web application
    Serve(ServeArgs),
    /// Write all records to an XLSX file
    Export(ExportArgs),
}

/// Options for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = ENV_PORT, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Options for `export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output XLSX file
    #[arg(long, short, default_value = DEFAULT_EXPORT_PATH)]
    pub output: PathBuf,
}

impl Cli {
    /// Builds the library configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        let mut config = Config {
            db_path: self.db_path.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        };
        if let Command::Serve(serve) = &self.command {
            config.bind = serve.bind.clone();
            config.port = serve.port;
        }
        config
    }
}
