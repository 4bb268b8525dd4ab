//! Application initialization.
//!
//! Sets up process-wide facilities that the binary needs before serving:
//! currently only the logger. The record store is opened explicitly by the
//! caller and passed around by handle.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
