//! Spreadsheet export for milk records.
//!
//! Turns a list of records into a single-sheet XLSX workbook held entirely in
//! memory. The caller decides where the bytes go (HTTP response or file).

mod types;
mod xlsx;

pub use types::{EXPORT_FILE_NAME, EXPORT_HEADERS, SHEET_NAME, XLSX_MIME_TYPE};
pub use xlsx::{export_to_file, export_xlsx};
