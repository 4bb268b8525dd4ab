// storage/schema.rs
// Table creation for the record store

use sqlx::SqliteConnection;

/// The single table backing the record store.
///
/// `AUTOINCREMENT` keeps ids monotonic and prevents reuse after deletes made
/// outside the application.
pub(crate) const CREATE_MILK_RECORDS: &str = "CREATE TABLE IF NOT EXISTS milk_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cow_number TEXT NOT NULL,
    litres REAL NOT NULL CHECK(litres >= 0),
    record_date TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// Creates the `milk_records` table if it does not exist yet.
pub(crate) async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MILK_RECORDS).execute(conn).await?;
    Ok(())
}
