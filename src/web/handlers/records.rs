//! Record listing and submission handlers.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use log::info;

use super::super::error::WebError;
use super::super::render::records_page;
use super::super::types::{AddRecordForm, AppState};

/// All records, most recent first
pub async fn records_handler(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let records = state.store.list().await?;
    Ok(Html(records_page(&records)))
}

/// Stores a submitted record and redirects to the listing.
///
/// A missing or blank `record_date` becomes today's date here, before the
/// store sees it.
pub async fn add_record_handler(
    State(state): State<AppState>,
    Form(form): Form<AddRecordForm>,
) -> Result<Redirect, WebError> {
    let record_date = form.record_date_or_today();
    let id = state
        .store
        .insert(&form.cow_number, &form.litres, &record_date)
        .await?;
    info!("Recorded milk entry {id} for cow {}", form.cow_number.trim());
    Ok(Redirect::to("/records"))
}
