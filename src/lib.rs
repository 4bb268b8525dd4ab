//! milk_log library: daily milk-yield records with spreadsheet export
//!
//! This library stores milk-yield entries (cow number, litres, date) in a
//! single SQLite table, lists them most recent first, and exports them to an
//! XLSX workbook. A small axum front end exposes both operations over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use milk_log::{export::export_xlsx, RecordStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RecordStore::open("milk_records.db").await?;
//! store.insert("C12", "18.5", "2024-03-01").await?;
//! store.insert("C07", "9.0", "2024-03-01").await?;
//!
//! let records = store.list().await?;
//! assert_eq!(records[0].cow_number, "C07");
//!
//! let xlsx: Vec<u8> = export_xlsx(&records)?;
//! std::fs::write("milk-records.xlsx", xlsx)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Store operations are async and require a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod storage;
pub mod web;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError, StoreError};
pub use run::{run_export, run_server};
pub use storage::{MilkRecord, NewMilkRecord, RecordStore};

// Internal run module (wires configuration, store and front ends together)
mod run {
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::export::export_to_file;
    use crate::storage::RecordStore;
    use crate::web::start_web_server;

    /// Opens the record store and serves the web application.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The database file cannot be created or opened
    /// - The listen address cannot be bound
    pub async fn run_server(config: &Config) -> Result<()> {
        config.validate().context("Invalid configuration")?;

        let store = RecordStore::open(&config.db_path)
            .await
            .with_context(|| {
                format!("Failed to open record store at {}", config.db_path.display())
            })?;

        info!("Serving records from {}", config.db_path.display());
        start_web_server(&config.socket_addr(), store).await
    }

    /// Writes every stored record to an XLSX file at `output`.
    ///
    /// Returns the number of records exported.
    pub async fn run_export(config: &Config, output: &Path) -> Result<usize> {
        config.validate().context("Invalid configuration")?;

        let store = RecordStore::open(&config.db_path)
            .await
            .with_context(|| {
                format!("Failed to open record store at {}", config.db_path.display())
            })?;

        export_to_file(&store, output).await
    }
}
