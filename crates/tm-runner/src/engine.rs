//! Single-script execution under transaction semantics.

use crate::decision::{decide, Decision, WriteMode};
use crate::error::RunnerResult;
use crate::outcome::{MigrationOutcome, RunOptions};
use std::sync::Arc;
use std::time::Instant;
use tm_core::Script;
use tm_db::Database;
use tm_ledger::{Ledger, LedgerRecord};

/// Reconcile one script against the ledger and execute it if pending.
///
/// Side effects: at most one transaction against the target database. A
/// fingerprint match never re-executes the SQL. In preview mode the SQL
/// still runs against the live connection so real errors surface, but the
/// transaction rolls back and no ledger state is written.
pub async fn apply_script(
    db: &Arc<dyn Database>,
    ledger: &mut Ledger,
    script: &Script,
    options: &RunOptions,
) -> RunnerResult<MigrationOutcome> {
    ledger.ensure_table(options.preview).await?;

    let by_hash = ledger.find_by_hash(&script.fingerprint).await?;
    // The filename only matters once the content is known to be new.
    let by_filename = if by_hash.is_none() {
        ledger.find_by_filename(&script.name).await?
    } else {
        None
    };

    match decide(script, by_hash.as_ref(), by_filename.as_ref(), options.force)? {
        Decision::Skip => {
            log::debug!("{} already applied, skipping", script.name);
            Ok(MigrationOutcome::skipped(&script.name))
        }
        Decision::RenameOnly { stored_name } => {
            log::info!(
                "{} carries content applied as {}, updating filename",
                script.name,
                stored_name
            );
            if !options.preview {
                ledger.rename(&script.fingerprint, &script.name).await?;
            }
            Ok(MigrationOutcome::renamed(
                &script.name,
                &stored_name,
                options.preview,
            ))
        }
        Decision::Apply(mode) => execute(db, ledger, script, options, mode).await,
    }
}

/// Run the script inside its own transaction and record it in the ledger.
async fn execute(
    db: &Arc<dyn Database>,
    ledger: &Ledger,
    script: &Script,
    options: &RunOptions,
    mode: WriteMode,
) -> RunnerResult<MigrationOutcome> {
    db.begin().await?;

    match execute_in_transaction(db, ledger, script, options, mode).await {
        Ok(duration_ms) => {
            if options.preview {
                db.rollback().await?;
            } else {
                db.commit().await?;
            }
            Ok(MigrationOutcome::applied(
                &script.name,
                duration_ms,
                options.preview,
            ))
        }
        Err(e) => {
            // Propagate the original failure; the rollback is best-effort.
            if let Err(rollback_err) = db.rollback().await {
                log::warn!("Rollback after failed migration also failed: {rollback_err}");
            }
            Err(e)
        }
    }
}

/// The work between BEGIN and COMMIT/ROLLBACK: execute the SQL verbatim,
/// time it, and write the ledger row when persisting.
async fn execute_in_transaction(
    db: &Arc<dyn Database>,
    ledger: &Ledger,
    script: &Script,
    options: &RunOptions,
    mode: WriteMode,
) -> RunnerResult<i64> {
    let started = Instant::now();
    db.execute_batch(&script.content).await?;
    let duration_ms = started.elapsed().as_millis() as i64;

    if !options.preview && ledger.table_present() {
        let record = LedgerRecord::new(&script.fingerprint, &script.name, duration_ms);
        match mode {
            WriteMode::Insert => ledger.insert(&record).await?,
            WriteMode::Update => ledger.update(&record).await?,
        }
    }
    Ok(duration_ms)
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
