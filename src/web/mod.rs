//! HTTP front end.
//!
//! Routes:
//! - `GET /` - landing page
//! - `GET /new` - entry form
//! - `GET /records` - all records, most recent first
//! - `POST /add` - store a record, then redirect to `/records`
//! - `GET /export.xlsx` - all records as a spreadsheet download
//!
//! Handlers only call the record store and the exporter; they hold no state
//! of their own beyond the store handle.

mod error;
mod handlers;
mod render;
mod types;

use axum::routing::{get, post};
use axum::Router;
use log::info;

use crate::storage::RecordStore;
use handlers::{
    add_record_handler, export_handler, home_handler, new_record_handler, records_handler,
};
pub use error::WebError;
pub use types::{today_iso, AddRecordForm, AppState};

/// Builds the application router around `store`.
pub fn router(store: RecordStore) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/new", get(new_record_handler))
        .route("/records", get(records_handler))
        .route("/add", post(add_record_handler))
        .route("/export.xlsx", get(export_handler))
        .with_state(AppState::new(store))
}

/// Binds `addr` and serves the application until Ctrl-C.
pub async fn start_web_server(addr: &str, store: RecordStore) -> Result<(), anyhow::Error> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}: {}", addr, e))?;

    info!("Milk log listening on http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
