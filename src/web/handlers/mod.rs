//! Web handlers.

mod export;
mod pages;
mod records;

pub use export::export_handler;
pub use pages::{home_handler, new_record_handler};
pub use records::{add_record_handler, records_handler};
