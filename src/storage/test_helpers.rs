//! Shared test helpers for storage module tests.

#[cfg(test)]
use tempfile::TempDir;

#[cfg(test)]
use crate::storage::RecordStore;

/// Opens a record store on a fresh database file inside a temporary directory.
///
/// The directory is returned so it lives as long as the test needs the file.
#[cfg(test)]
pub async fn open_temp_store() -> (TempDir, RecordStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = RecordStore::open(dir.path().join("milk_records.db"))
        .await
        .expect("Failed to open test record store");
    (dir, store)
}
