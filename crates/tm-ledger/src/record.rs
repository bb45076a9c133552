//! The persisted ledger row.

use crate::error::{LedgerError, LedgerResult};

/// One row of the ledger table.
///
/// At most one record exists per fingerprint and per filename; a record
/// exists if and only if that exact content has been committed at some
/// point. `applied_at` is the database-rendered timestamp text and is
/// display-only; reconciliation keys on `hash` and `filename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    /// Content fingerprint (primary key)
    pub hash: String,

    /// Script filename at the time of the last write (unique)
    pub filename: String,

    /// When the script was applied, as rendered by the database
    pub applied_at: Option<String>,

    /// Wall-clock execution time in milliseconds
    pub duration_ms: i64,
}

impl LedgerRecord {
    /// Build a record for a script about to be written.
    pub fn new(hash: impl Into<String>, filename: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            hash: hash.into(),
            filename: filename.into(),
            applied_at: None,
            duration_ms,
        }
    }

    /// Parse a record from a string row in `hash, filename, applied_at,
    /// duration` column order.
    pub(crate) fn from_row(row: &[String]) -> LedgerResult<Self> {
        let [hash, filename, applied_at, duration] = row else {
            return Err(LedgerError::MalformedRecord(format!(
                "expected 4 columns, got {}",
                row.len()
            )));
        };
        let duration_ms = duration.parse::<i64>().map_err(|_| {
            LedgerError::MalformedRecord(format!("non-integer duration '{duration}'"))
        })?;
        Ok(Self {
            hash: hash.clone(),
            filename: filename.clone(),
            applied_at: (applied_at != "null").then(|| applied_at.clone()),
            duration_ms,
        })
    }
}
