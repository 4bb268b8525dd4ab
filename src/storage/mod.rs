// storage/mod.rs
// Record store: one append-only SQLite table of milk records

pub mod models;
mod schema;
mod store;
mod validation;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use models::{MilkRecord, NewMilkRecord};
pub use store::RecordStore;
