//! Pure reconciliation of one script against the ledger state.
//!
//! Separating the branching from the transactional I/O keeps the subtle
//! part of the algorithm unit-testable without a database.

use crate::error::{RunnerError, RunnerResult};
use tm_core::Script;
use tm_ledger::LedgerRecord;

/// How the ledger row is written when a script is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// New filename: insert a fresh row
    Insert,
    /// Forced re-apply: the filename's row already exists, update it
    Update,
}

/// What to do with one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Exact content already applied under the same name
    Skip,
    /// Exact content already applied under `stored_name`; record the new
    /// filename, do not re-execute
    RenameOnly { stored_name: String },
    /// Execute the script and write the ledger row
    Apply(WriteMode),
}

/// Decide what to do with `script` given the two ledger lookups.
///
/// A fingerprint match always wins and always skips; `force` only
/// overrides the filename-conflict guard, never fingerprint-based skips.
/// A filename match with a different fingerprint means the file's content
/// changed in place; without `force` that is the distinguished
/// [`RunnerError::ContentChanged`] conflict.
pub fn decide(
    script: &Script,
    by_hash: Option<&LedgerRecord>,
    by_filename: Option<&LedgerRecord>,
    force: bool,
) -> RunnerResult<Decision> {
    if let Some(record) = by_hash {
        if record.filename != script.name {
            return Ok(Decision::RenameOnly {
                stored_name: record.filename.clone(),
            });
        }
        return Ok(Decision::Skip);
    }

    if by_filename.is_some() {
        if !force {
            return Err(RunnerError::ContentChanged {
                filename: script.name.clone(),
                fingerprint: script.fingerprint.clone(),
            });
        }
        return Ok(Decision::Apply(WriteMode::Update));
    }

    Ok(Decision::Apply(WriteMode::Insert))
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod tests;
