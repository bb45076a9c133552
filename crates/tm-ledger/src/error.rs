//! Error types for the migration ledger.

use thiserror::Error;

/// Migration ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Ledger table existence check or creation failed (L001).
    #[error("[L001] Ledger table setup failed: {0}")]
    TableError(String),

    /// Ledger lookup failed (L002).
    #[error("[L002] Ledger lookup failed: {0}")]
    LookupError(String),

    /// Ledger record write failed (L003).
    #[error("[L003] Ledger write failed: {0}")]
    WriteError(String),

    /// A ledger row came back in an unexpected shape (L004).
    #[error("[L004] Malformed ledger record: {0}")]
    MalformedRecord(String),

    /// Database driver error with preserved source chain (L005).
    #[error("[L005] Database error")]
    Db(#[source] tm_db::DbError),
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<tm_db::DbError> for LedgerError {
    fn from(err: tm_db::DbError) -> Self {
        LedgerError::Db(err)
    }
}
