//! Error types for the migration engine and runner.

use thiserror::Error;

/// Engine and batch-runner errors.
///
/// Nothing here is recovered locally: every variant aborts the remaining
/// batch and surfaces to the caller, with the connection still closed by
/// the runner's cleanup point.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The content of an already-applied filename changed in place (R001).
    ///
    /// This is the primary data-integrity guard. It is only overridden by
    /// an explicit `force`.
    #[error(
        "[R001] Content changed for applied migration '{filename}' \
         (new fingerprint {fingerprint}); re-run with force to apply"
    )]
    ContentChanged {
        filename: String,
        fingerprint: String,
    },

    /// Script loading failed (R002).
    #[error("[R002] Script loading failed: {0}")]
    Load(#[from] tm_core::CoreError),

    /// Ledger operation failed (R003).
    #[error("[R003] Ledger failure: {0}")]
    Ledger(#[from] tm_ledger::LedgerError),

    /// Database operation failed (R004).
    #[error("[R004] Database failure: {0}")]
    Db(#[from] tm_db::DbError),
}

/// Result type alias for [`RunnerError`].
pub type RunnerResult<T> = Result<T, RunnerError>;
