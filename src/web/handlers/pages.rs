//! Static pages.

use axum::response::Html;

use super::super::render::{home_page, new_record_page};
use super::super::types::today_iso;

/// Landing page with links to the other routes
pub async fn home_handler() -> Html<String> {
    Html(home_page())
}

/// Entry form, date prefilled with today
pub async fn new_record_handler() -> Html<String> {
    Html(new_record_page(&today_iso()))
}
