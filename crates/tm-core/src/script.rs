//! Migration script discovery and loading.

use crate::error::{CoreError, CoreResult};
use crate::fingerprint::fingerprint;
use std::path::Path;

/// A migration script loaded from disk.
///
/// `name` is the source filename: the display identity and the secondary
/// key in the ledger. `fingerprint` is derived from the trimmed content and
/// is the canonical identity (see [`crate::fingerprint`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Source filename, e.g. `001_create_users.sql`
    pub name: String,

    /// Trimmed SQL text, the executable payload
    pub content: String,

    /// Content fingerprint, independent of filename
    pub fingerprint: String,
}

impl Script {
    /// Build a script from a filename and raw file content.
    ///
    /// Returns `None` when the trimmed content is empty; blank scripts are
    /// excluded from a run rather than treated as an error.
    pub fn new(name: impl Into<String>, raw: &str) -> Option<Self> {
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            content: content.to_string(),
            fingerprint: fingerprint(content),
        })
    }
}

/// Load all migration scripts from `dir`, ordered by filename.
///
/// Only files with a `.sql` extension (case-insensitive) are considered.
/// Ordering is plain lexicographic string comparison on the filename (not
/// numeric-aware), which is the applied order and is deterministic across
/// platforms. Scripts whose trimmed content is empty are silently skipped.
///
/// Fails if the directory cannot be read, or if any individual file cannot
/// be loaded (a single unreadable script aborts the whole load).
pub fn load_scripts(dir: &Path) -> CoreResult<Vec<Script>> {
    let mut paths = Vec::new();
    for entry in
        std::fs::read_dir(dir).map_err(|e| CoreError::MigrationsDirUnreadable {
            path: dir.display().to_string(),
            source: e,
        })?
    {
        let entry = entry.map_err(|e| CoreError::MigrationsDirUnreadable {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("sql"))
        {
            continue;
        }
        paths.push(path);
    }

    // Lexicographic filename order is the apply order.
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut scripts = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = std::fs::read_to_string(&path).map_err(|e| CoreError::ScriptUnreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        match Script::new(name, &raw) {
            Some(script) => {
                log::debug!("Loaded {} ({})", script.name, script.fingerprint);
                scripts.push(script);
            }
            None => log::debug!("Skipping empty script {}", path.display()),
        }
    }
    Ok(scripts)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
