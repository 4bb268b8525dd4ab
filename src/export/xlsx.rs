//! XLSX export functionality.
//!
//! Writes one header row followed by one row per record, in the order the
//! records are given. `ID` and `Litres` are numeric cells; the other columns
//! are text, exactly as stored.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error_handling::ExportError;
use crate::export::types::{EXPORT_HEADERS, SHEET_NAME};
use crate::storage::{MilkRecord, RecordStore};

/// Column widths in characters, matching `EXPORT_HEADERS`.
const COLUMN_WIDTHS: [f64; 5] = [8.0, 14.0, 10.0, 14.0, 28.0];

/// Serializes `records` into an XLSX workbook held in memory.
///
/// The returned buffer is a complete document starting at offset 0. Either a
/// whole valid workbook comes back or an error does; there is no partial
/// output.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if the workbook cannot be encoded,
/// for example when the record count exceeds the sheet row limit or a text
/// field is longer than the 32,767 characters a cell can hold. The store
/// accepts such text, so one oversized record makes every export fail until
/// it is removed.
pub fn export_xlsx(records: &[MilkRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_header(worksheet)?;
    for (idx, record) in records.iter().enumerate() {
        let row = u32::try_from(idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        write_record(worksheet, row, record)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Lists every record in `store` and writes the workbook to `output`.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub async fn export_to_file(store: &RecordStore, output: &Path) -> Result<usize> {
    let records = store
        .list()
        .await
        .context("Failed to read milk records")?;
    let bytes = export_xlsx(&records).context("Failed to build spreadsheet")?;

    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    info!(
        "Exported {} milk record(s) to {}",
        records.len(),
        output.display()
    );
    Ok(records.len())
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    for (col, (title, width)) in EXPORT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &bold)?;
        worksheet.set_column_width(col, width)?;
    }
    Ok(())
}

fn write_record(worksheet: &mut Worksheet, row: u32, record: &MilkRecord) -> Result<(), XlsxError> {
    worksheet.write_number(row, 0, record.id as f64)?;
    worksheet.write_string(row, 1, &record.cow_number)?;
    worksheet.write_number(row, 2, record.litres)?;
    worksheet.write_string(row, 3, &record.record_date)?;
    worksheet.write_string(row, 4, &record.created_at)?;
    Ok(())
}
