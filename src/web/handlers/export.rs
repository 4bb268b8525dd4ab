//! Spreadsheet download handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use super::super::error::WebError;
use super::super::types::AppState;
use crate::export::{export_xlsx, EXPORT_FILE_NAME, XLSX_MIME_TYPE};

/// All records as an XLSX attachment
pub async fn export_handler(State(state): State<AppState>) -> Result<Response, WebError> {
    let records = state.store.list().await?;
    let bytes = export_xlsx(&records)?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
