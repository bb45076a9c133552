//! Batch runner: drives the engine over a directory of scripts.

use crate::engine::apply_script;
use crate::error::{RunnerError, RunnerResult};
use crate::outcome::{MigrationOutcome, RunOptions};
use std::path::Path;
use std::sync::Arc;
use tm_core::load_scripts;
use tm_db::Database;
use tm_ledger::Ledger;

/// Applies every pending script in a directory, in filename order, over a
/// single connection.
pub struct Runner {
    db: Arc<dyn Database>,
    ledger_schema: String,
    ledger_table: String,
}

impl Runner {
    /// Create a runner over an open connection and ledger location.
    pub fn new(
        db: Arc<dyn Database>,
        ledger_schema: impl Into<String>,
        ledger_table: impl Into<String>,
    ) -> Self {
        Self {
            db,
            ledger_schema: ledger_schema.into(),
            ledger_table: ledger_table.into(),
        }
    }

    /// Run the whole batch.
    ///
    /// Scripts are loaded up front (I/O failures abort before any database
    /// interaction), then applied strictly one at a time. The first engine
    /// failure stops the iteration and propagates; no further scripts are
    /// attempted. The connection is released through a single cleanup point
    /// on every exit path. On success, outcome messages and a skip count
    /// are printed when `emit_output` is set.
    pub async fn run(
        &self,
        migrations_dir: &Path,
        options: &RunOptions,
    ) -> RunnerResult<Vec<MigrationOutcome>> {
        let scripts = load_scripts(migrations_dir)?;
        log::info!(
            "Running {} script(s) from {} against {}",
            scripts.len(),
            migrations_dir.display(),
            self.db.db_type()
        );

        let mut ledger = Ledger::new(
            self.db.clone(),
            self.ledger_schema.clone(),
            self.ledger_table.clone(),
        );

        let mut outcomes = Vec::with_capacity(scripts.len());
        let mut failure: Option<RunnerError> = None;
        for script in &scripts {
            match apply_script(&self.db, &mut ledger, script, options).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        if let Err(e) = self.db.close().await {
            log::warn!("Closing connection failed: {e}");
        }

        if let Some(e) = failure {
            return Err(e);
        }

        if options.emit_output {
            emit_outcomes(&outcomes);
        }
        Ok(outcomes)
    }
}

/// Print non-empty outcome messages and the trailing skip count.
fn emit_outcomes(outcomes: &[MigrationOutcome]) {
    for outcome in outcomes {
        if !outcome.message.is_empty() {
            println!("{}", outcome.message);
        }
    }
    let skipped = outcomes.iter().filter(|o| o.skipped).count();
    println!("{skipped} migration(s) skipped");
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
