//! Export constants shared by the web download and the CLI.

/// Header row written above the data rows, in column order.
pub const EXPORT_HEADERS: [&str; 5] = [
    "ID",
    "Cow Number",
    "Litres",
    "Record Date",
    "Created At (UTC)",
];

/// File name offered to browsers for the download.
pub const EXPORT_FILE_NAME: &str = "milk-records.xlsx";

/// MIME type of an Office Open XML workbook.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single worksheet in the exported workbook.
pub const SHEET_NAME: &str = "Milk Records";
