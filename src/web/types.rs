//! Web layer data structures.

use chrono::Local;
use serde::Deserialize;

use crate::storage::RecordStore;

/// Shared state for the web handlers.
///
/// Holds only the store handle; each request opens its own connection.
#[derive(Clone)]
pub struct AppState {
    /// Record store handle
    pub store: RecordStore,
}

impl AppState {
    /// Wraps a store handle.
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

/// Form body posted to `/add`.
///
/// `litres` stays as text so the store can reject non-numeric input with a
/// constraint violation instead of a form rejection. Missing fields become
/// empty strings for the same reason.
#[derive(Debug, Deserialize)]
pub struct AddRecordForm {
    /// Cow identifier
    #[serde(default)]
    pub cow_number: String,
    /// Quantity as typed by the user
    #[serde(default)]
    pub litres: String,
    /// Optional ISO date; defaults to today
    #[serde(default)]
    pub record_date: Option<String>,
}

impl AddRecordForm {
    /// The submitted record date, or today's local date when missing or blank.
    pub fn record_date_or_today(&self) -> String {
        match self.record_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => today_iso(),
        }
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
