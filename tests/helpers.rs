// Shared test helpers for record store setup and workbook inspection.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use tempfile::TempDir;

use milk_log::export::SHEET_NAME;
use milk_log::RecordStore;

/// Opens a record store on a fresh database file in a temporary directory.
/// Keep the returned `TempDir` alive for as long as the store is used.
#[allow(dead_code)] // Used by other test files
pub async fn open_test_store() -> (TempDir, RecordStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = RecordStore::open(dir.path().join("milk_records.db"))
        .await
        .expect("Failed to open record store");
    (dir, store)
}

/// Reads every row of the exported worksheet.
#[allow(dead_code)] // Used by other test files
pub fn read_sheet_rows(bytes: Vec<u8>) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).expect("Export should be a valid XLSX file");
    workbook
        .worksheet_range(SHEET_NAME)
        .expect("Exported workbook should contain the records sheet")
        .rows()
        .map(|row| row.to_vec())
        .collect()
}
