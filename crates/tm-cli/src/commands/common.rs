//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tm_core::Config;
use tm_db::{Database, DuckDbBackend};

use crate::cli::GlobalArgs;

/// Load configuration from `--config` or the project directory.
///
/// Returns the config plus the project root against which relative paths
/// (the migrations directory, a relative database path) are resolved.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<(Config, PathBuf)> {
    let root = PathBuf::from(&global.project_dir);
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir(&root),
    }
    .context("Failed to load configuration")?;
    Ok((config, root))
}

/// Create a database connection from the config.
pub(crate) fn create_database_connection(
    config: &Config,
    root: &Path,
) -> Result<Arc<dyn Database>> {
    let path = &config.database.path;
    let resolved = if path == ":memory:" || Path::new(path).is_absolute() {
        path.clone()
    } else {
        root.join(path).display().to_string()
    };
    let db: Arc<dyn Database> =
        Arc::new(DuckDbBackend::new(&resolved).context("Failed to connect to database")?);
    Ok(db)
}

/// Calculate column widths for a table given headers and row data.
fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout: left-aligned header row, a separator
/// line of dashes, then each data row, columns separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
