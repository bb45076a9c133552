//! Per-script run results and run flags.

/// How a single run behaves. Passed by reference into every engine
/// invocation; never mutated.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Simulate without committing: SQL still executes against the live
    /// connection, but every transaction rolls back and no ledger state is
    /// persisted.
    pub preview: bool,

    /// Allow re-applying a filename previously applied under a different
    /// fingerprint. Does not override fingerprint-based skips.
    pub force: bool,

    /// Whether the runner prints outcome messages after a successful batch.
    pub emit_output: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            preview: false,
            force: false,
            emit_output: true,
        }
    }
}

/// The result of reconciling and (possibly) executing one script.
///
/// Produced once per script per run, aggregated by the runner, never
/// persisted.
#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    /// Script filename
    pub name: String,

    /// True unless the script's SQL was executed this run
    pub skipped: bool,

    /// Wall-clock execution time in milliseconds (0 when skipped)
    pub duration_ms: i64,

    /// Human-readable explanation; empty for an ordinary skip
    pub message: String,
}

impl MigrationOutcome {
    /// Already applied, nothing to do.
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skipped: true,
            duration_ms: 0,
            message: String::new(),
        }
    }

    /// Already applied under a different filename.
    pub fn renamed(name: &str, stored_name: &str, preview: bool) -> Self {
        let message = if preview {
            format!("Would rename {stored_name} to {name} (content unchanged)")
        } else {
            format!("Renamed {stored_name} to {name} (content unchanged)")
        };
        Self {
            name: name.to_string(),
            skipped: true,
            duration_ms: 0,
            message,
        }
    }

    /// Executed this run.
    pub fn applied(name: &str, duration_ms: i64, preview: bool) -> Self {
        let message = if preview {
            format!("Applied {name} in {duration_ms}ms (preview, rolled back)")
        } else {
            format!("Applied {name} in {duration_ms}ms")
        };
        Self {
            name: name.to_string(),
            skipped: false,
            duration_ms,
            message,
        }
    }
}
