//! Record store backed by a single SQLite table.
//!
//! Every operation opens its own connection, runs one statement, and releases
//! the connection before returning, on success and on failure alike. The store
//! holds no connection between calls, so a `RecordStore` is just a cloneable
//! handle to a file path plus connect options.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, error, info, warn};
use sqlx::error::ErrorKind as DbErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row, SqliteConnection};

use crate::error_handling::StoreError;
use crate::storage::models::{MilkRecord, NewMilkRecord};
use crate::storage::schema::ensure_schema;

const INSERT_RECORD: &str = "INSERT INTO milk_records (cow_number, litres, record_date, created_at)
     VALUES (?, ?, ?, ?)";

const SELECT_RECORDS: &str = "SELECT id, cow_number, litres, record_date, created_at
     FROM milk_records
     ORDER BY id DESC";

/// Append-only store of [`MilkRecord`]s.
///
/// # Examples
///
/// ```no_run
/// use milk_log::RecordStore;
///
/// # async fn example() -> Result<(), milk_log::StoreError> {
/// let store = RecordStore::open("milk_records.db").await?;
/// store.insert("C12", "18.5", "2024-03-01").await?;
/// let records = store.list().await?;
/// assert_eq!(records[0].cow_number, "C12");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    db_path: PathBuf,
    options: SqliteConnectOptions,
}

impl RecordStore {
    /// Opens the store at `db_path`, creating the file and table if needed.
    ///
    /// Safe to call on an existing database; table creation is idempotent.
    ///
    /// # Errors
    ///
    /// `StoreError::FileCreation` if the file cannot be created,
    /// `StoreError::Storage` if it cannot be opened as a SQLite database.
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        create_db_file(&db_path)?;

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(false)
            .journal_mode(SqliteJournalMode::Wal);
        let store = Self { db_path, options };

        let mut conn = store.connect().await?;
        ensure_schema(&mut conn).await.map_err(|e| {
            error!("Failed to create milk_records table: {e}");
            StoreError::Storage(e)
        })?;
        release(conn).await;

        info!("Record store ready at {}", store.db_path.display());
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Validates and appends one record, returning its id.
    ///
    /// `litres` is the raw quantity text as submitted by a user.
    ///
    /// # Errors
    ///
    /// `StoreError::ConstraintViolation` for negative, non-numeric or
    /// non-finite litres and for blank text fields. Nothing is written in
    /// that case. `StoreError::Storage` if the database cannot be written.
    pub async fn insert(
        &self,
        cow_number: &str,
        litres: &str,
        record_date: &str,
    ) -> Result<i64, StoreError> {
        let record = NewMilkRecord::parse(cow_number, litres, record_date)?;
        self.insert_record(&record).await
    }

    /// Appends an already validated record, returning its id.
    ///
    /// `created_at` is set to the current UTC time.
    pub async fn insert_record(&self, record: &NewMilkRecord) -> Result<i64, StoreError> {
        let created_at = utc_timestamp();
        let mut conn = self.connect().await?;

        let result = sqlx::query(INSERT_RECORD)
            .bind(record.cow_number())
            .bind(record.litres())
            .bind(record.record_date())
            .bind(&created_at)
            .execute(&mut conn)
            .await
            .map_err(map_write_error)?;
        release(conn).await;

        let id = result.last_insert_rowid();
        debug!(
            "Inserted milk record {id}: cow={} litres={} date={}",
            record.cow_number(),
            record.litres(),
            record.record_date()
        );
        Ok(id)
    }

    /// Returns every record, most recently inserted first.
    ///
    /// # Errors
    ///
    /// `StoreError::Storage` if the file is missing, unreadable or corrupt,
    /// including rows whose values cannot be decoded.
    pub async fn list(&self) -> Result<Vec<MilkRecord>, StoreError> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query(SELECT_RECORDS)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| {
                error!("Failed to read milk records: {e}");
                StoreError::Storage(e)
            })?;
        release(conn).await;

        rows.iter()
            .map(record_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to decode milk record row: {e}");
                StoreError::Storage(e)
            })
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        self.options.connect().await.map_err(|e| {
            error!(
                "Failed to open database {}: {e}",
                self.db_path.display()
            );
            StoreError::Storage(e)
        })
    }
}

fn create_db_file(db_path: &Path) -> Result<(), StoreError> {
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(db_path)
    {
        Ok(_) => info!("Database file created successfully."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Database file already exists.")
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(StoreError::FileCreation(e.to_string()));
        }
    }
    Ok(())
}

/// Closes a connection after a successful statement.
///
/// On error paths the connection is dropped instead, which also closes it.
async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {e}");
    }
}

fn record_from_row(row: &SqliteRow) -> Result<MilkRecord, sqlx::Error> {
    Ok(MilkRecord {
        id: row.try_get("id")?,
        cow_number: row.try_get("cow_number")?,
        litres: row.try_get("litres")?,
        record_date: row.try_get("record_date")?,
        created_at: row.try_get("created_at")?,
    })
}

/// A CHECK failure means a value rule was broken; anything else is storage.
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.kind(), DbErrorKind::CheckViolation) {
            return StoreError::ConstraintViolation(db_err.message().to_string());
        }
    }
    error!("Failed to insert milk record: {err}");
    StoreError::Storage(err)
}

fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
