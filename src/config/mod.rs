//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, ports)
//! - CLI option types and parsing
//! - The library `Config` struct and its validation

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, ExportArgs, ServeArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
