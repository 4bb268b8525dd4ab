//! Mapping of store and export failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{error, warn};
use thiserror::Error;

use crate::error_handling::{ExportError, StoreError};
use crate::web::render::error_page;

/// Failure raised by a web handler.
#[derive(Error, Debug)]
pub enum WebError {
    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Spreadsheet export failure
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl WebError {
    /// Constraint violations are the client's fault; everything else is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Store(e) if e.is_constraint_violation() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::BAD_REQUEST {
            warn!("Rejected request: {self}");
            self.to_string()
        } else {
            error!("Request failed: {self}");
            "The records could not be read or written. Please try again later.".to_string()
        };
        (status, Html(error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_is_bad_request() {
        let err = WebError::from(StoreError::ConstraintViolation("litres".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err = WebError::from(StoreError::Storage(sqlx::Error::PoolClosed));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_file_creation_error_is_internal() {
        let err = WebError::from(StoreError::FileCreation("denied".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
