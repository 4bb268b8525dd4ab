// storage/models.rs
// Database models and types

use serde::Serialize;

use crate::error_handling::StoreError;
use crate::storage::validation::{check_litres, parse_litres, require_text};

/// One logged milk-yield entry as stored in the `milk_records` table.
///
/// Records are created only through [`crate::RecordStore::insert`] and are
/// never updated or deleted. Callers always receive owned copies.
///
/// # Database Schema
///
/// `record_date` is the ISO calendar date supplied by the caller.
/// `created_at` is the UTC insertion time (`YYYY-MM-DDTHH:MM:SS.ffffff`,
/// no offset) assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilkRecord {
    /// Store-assigned id, never reused
    pub id: i64,
    /// Cow identifier
    pub cow_number: String,
    /// Yield in litres, never negative
    pub litres: f64,
    /// ISO calendar date the milk was recorded for
    pub record_date: String,
    /// UTC insertion time
    pub created_at: String,
}

/// A validated insert payload.
///
/// Fields are private so an instance always satisfies the write rules:
/// non-empty cow number and record date, finite non-negative litres.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMilkRecord {
    cow_number: String,
    litres: f64,
    record_date: String,
}

impl NewMilkRecord {
    /// Builds a payload from typed values.
    ///
    /// # Errors
    ///
    /// `StoreError::ConstraintViolation` if `litres` is negative or not
    /// finite, or if either text field is blank.
    pub fn new(
        cow_number: impl Into<String>,
        litres: f64,
        record_date: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let cow_number = require_text("cow_number", cow_number.into())?;
        let record_date = require_text("record_date", record_date.into())?;
        Ok(Self {
            cow_number,
            litres: check_litres(litres)?,
            record_date,
        })
    }

    /// Builds a payload from raw form text, parsing `litres` as a number.
    ///
    /// # Errors
    ///
    /// `StoreError::ConstraintViolation` if `litres` is not numeric, plus
    /// everything [`NewMilkRecord::new`] rejects.
    pub fn parse(cow_number: &str, litres: &str, record_date: &str) -> Result<Self, StoreError> {
        let litres = parse_litres(litres)?;
        Self::new(cow_number, litres, record_date)
    }

    /// Trimmed cow identifier.
    pub fn cow_number(&self) -> &str {
        &self.cow_number
    }

    /// Validated quantity.
    pub fn litres(&self) -> f64 {
        self.litres
    }

    /// Trimmed record date.
    pub fn record_date(&self) -> &str {
        &self.record_date
    }
}
