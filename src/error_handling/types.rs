//! Error type definitions.
//!
//! This module defines the error types surfaced by the record store, the
//! spreadsheet exporter and application initialization.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A write was rejected because it breaks a value rule
    /// (negative or non-numeric litres, empty required text).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database file could not be created.
    #[error("Database file creation error: {0}")]
    FileCreation(String),

    /// The database file could not be opened, read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the backing file.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }
}

/// Error types for spreadsheet export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The workbook could not be encoded.
    #[error("Spreadsheet serialization error: {0}")]
    Serialization(#[from] rust_xlsxwriter::XlsxError),
}
