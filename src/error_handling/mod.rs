//! Error handling.
//!
//! Errors are split by the component that raises them:
//! - **Store errors**: constraint violations and storage failures
//! - **Export errors**: spreadsheet serialization failures
//! - **Initialization errors**: logger setup failures
//!
//! Nothing here retries. Every failure propagates to the immediate caller.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, StoreError};
