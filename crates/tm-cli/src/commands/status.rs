//! Implementation of the status command
//!
//! Read-only: reports each script's state against the ledger without ever
//! creating the ledger table or executing migration SQL.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use tm_core::load_scripts;
use tm_ledger::Ledger;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common::{create_database_connection, load_config, print_table};

/// One script (or orphaned ledger row) in the status report.
#[derive(Debug, Serialize)]
struct StatusRow {
    script: String,
    state: ScriptState,
    applied_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ScriptState {
    /// Applied with this exact content and name
    Applied,
    /// Not in the ledger yet
    Pending,
    /// Applied content, file since renamed
    Renamed,
    /// Filename applied before with different content
    Changed,
    /// Ledger row whose file no longer exists
    Missing,
}

impl std::fmt::Display for ScriptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptState::Applied => write!(f, "applied"),
            ScriptState::Pending => write!(f, "pending"),
            ScriptState::Renamed => write!(f, "renamed"),
            ScriptState::Changed => write!(f, "changed"),
            ScriptState::Missing => write!(f, "missing"),
        }
    }
}

pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let (config, root) = load_config(global)?;
    let scripts = load_scripts(&config.migrations_dir(&root))
        .context("Failed to load migration scripts")?;

    let db = create_database_connection(&config, &root)?;
    let mut ledger = Ledger::new(
        db.clone(),
        config.ledger.schema.clone(),
        config.ledger.table.clone(),
    );
    ledger
        .probe_table()
        .await
        .context("Failed to check ledger table")?;

    let mut rows = Vec::with_capacity(scripts.len());
    let mut seen_hashes: HashSet<String> = HashSet::new();
    for script in &scripts {
        let (state, applied_at) = match ledger.find_by_hash(&script.fingerprint).await? {
            Some(record) => {
                seen_hashes.insert(record.hash.clone());
                let state = if record.filename == script.name {
                    ScriptState::Applied
                } else {
                    ScriptState::Renamed
                };
                (state, record.applied_at)
            }
            None => match ledger.find_by_filename(&script.name).await? {
                Some(record) => {
                    seen_hashes.insert(record.hash.clone());
                    (ScriptState::Changed, record.applied_at)
                }
                None => (ScriptState::Pending, None),
            },
        };
        rows.push(StatusRow {
            script: script.name.clone(),
            state,
            applied_at,
        });
    }

    // Ledger rows with no file on disk at all.
    for record in ledger.all_records().await? {
        if !seen_hashes.contains(&record.hash) {
            rows.push(StatusRow {
                script: record.filename,
                state: ScriptState::Missing,
                applied_at: record.applied_at,
            });
        }
    }

    if let Err(e) = db.close().await {
        log::warn!("Closing connection failed: {e}");
    }

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let table_rows: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.script.clone(),
                        r.state.to_string(),
                        r.applied_at.clone().unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();
            print_table(&["SCRIPT", "STATE", "APPLIED AT"], &table_rows);
        }
    }
    Ok(())
}
