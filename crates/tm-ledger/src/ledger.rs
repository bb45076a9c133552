//! The ledger: applied-migration state inside the target database.

use crate::error::{LedgerError, LedgerResult};
use crate::record::LedgerRecord;
use std::sync::Arc;
use tm_db::{Database, SqlValue};

/// Memoized knowledge about the ledger table.
///
/// `Missing` is only ever recorded in preview mode, where table absence is
/// tolerated so dry-runs work against a pristine database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Existence not checked yet
    Unknown,
    /// Checked and absent (preview only)
    Missing,
    /// Checked and present, or created by us
    Present,
}

/// Bookkeeping-table wrapper over the database capability.
///
/// Owns the schema-qualified table name and the table-existence memo; the
/// memo resets only when a new `Ledger` is constructed. Callers must invoke
/// [`Ledger::ensure_table`] before any lookup or write.
pub struct Ledger {
    db: Arc<dyn Database>,
    schema: String,
    table: String,
    state: TableState,
}

impl Ledger {
    /// Create a ledger over `db` for `schema`.`table`.
    pub fn new(db: Arc<dyn Database>, schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            db,
            schema: schema.into(),
            table: table.into(),
            state: TableState::Unknown,
        }
    }

    /// The schema-qualified table name used in ledger SQL.
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    /// Whether the table is known to exist.
    pub fn table_present(&self) -> bool {
        self.state == TableState::Present
    }

    /// Check for the ledger table once, creating it when allowed.
    ///
    /// The catalog is consulted on the first call only. When the table is
    /// absent: in preview mode the absence is recorded and tolerated;
    /// otherwise the table is created with the cross-tool column shape
    /// (fingerprint primary key, unique filename). Subsequent calls are
    /// no-ops.
    pub async fn ensure_table(&mut self, preview: bool) -> LedgerResult<()> {
        if self.state != TableState::Unknown {
            return Ok(());
        }

        let exists = self
            .db
            .table_exists(&self.schema, &self.table)
            .await
            .map_err(|e| LedgerError::TableError(format!("existence check failed: {e}")))?;
        if exists {
            self.state = TableState::Present;
            return Ok(());
        }

        if preview {
            log::debug!(
                "Ledger table {} absent; tolerated in preview",
                self.qualified_table()
            );
            self.state = TableState::Missing;
            return Ok(());
        }

        log::info!("Creating ledger table {}", self.qualified_table());
        self.db
            .execute_batch(&format!(
                "CREATE SCHEMA IF NOT EXISTS {schema};
                 CREATE TABLE {schema}.{table} (
                     hash            VARCHAR(40) PRIMARY KEY,
                     filename        VARCHAR(260) UNIQUE,
                     execution_date  TIMESTAMPTZ,
                     duration        INTEGER
                 );",
                schema = self.schema,
                table = self.table,
            ))
            .await
            .map_err(|e| LedgerError::TableError(format!("create failed: {e}")))?;
        self.state = TableState::Present;
        Ok(())
    }

    /// Look up the record for a content fingerprint.
    pub async fn find_by_hash(&self, hash: &str) -> LedgerResult<Option<LedgerRecord>> {
        self.find_where("hash", hash).await
    }

    /// Look up the record for a script filename.
    pub async fn find_by_filename(&self, filename: &str) -> LedgerResult<Option<LedgerRecord>> {
        self.find_where("filename", filename).await
    }

    async fn find_where(&self, column: &str, value: &str) -> LedgerResult<Option<LedgerRecord>> {
        // A table known to be absent has no records; don't reference a
        // nonexistent relation.
        if self.state == TableState::Missing {
            return Ok(None);
        }
        let out = self
            .db
            .query(
                &format!(
                    "SELECT hash, filename, CAST(execution_date AS VARCHAR), duration \
                     FROM {} WHERE {} = ?",
                    self.qualified_table(),
                    column
                ),
                &[SqlValue::from(value)],
            )
            .await
            .map_err(|e| LedgerError::LookupError(format!("{column} lookup failed: {e}")))?;
        match out.rows.first() {
            Some(row) => Ok(Some(LedgerRecord::from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Insert a new ledger row. Only called inside an open transaction,
    /// never in preview mode.
    pub async fn insert(&self, record: &LedgerRecord) -> LedgerResult<()> {
        self.db
            .execute(
                &format!(
                    "INSERT INTO {} (hash, filename, execution_date, duration) \
                     VALUES (?, ?, now(), ?)",
                    self.qualified_table()
                ),
                &[
                    SqlValue::from(record.hash.as_str()),
                    SqlValue::from(record.filename.as_str()),
                    SqlValue::Int(record.duration_ms),
                ],
            )
            .await
            .map_err(|e| {
                LedgerError::WriteError(format!("insert of {} failed: {e}", record.filename))
            })?;
        Ok(())
    }

    /// Replace the row for an existing filename with a new fingerprint.
    /// Only called inside an open transaction, never in preview mode.
    pub async fn update(&self, record: &LedgerRecord) -> LedgerResult<()> {
        self.db
            .execute(
                &format!(
                    "UPDATE {} SET hash = ?, execution_date = now(), duration = ? \
                     WHERE filename = ?",
                    self.qualified_table()
                ),
                &[
                    SqlValue::from(record.hash.as_str()),
                    SqlValue::Int(record.duration_ms),
                    SqlValue::from(record.filename.as_str()),
                ],
            )
            .await
            .map_err(|e| {
                LedgerError::WriteError(format!("update of {} failed: {e}", record.filename))
            })?;
        Ok(())
    }

    /// Record a file rename for already-applied content, keyed by
    /// fingerprint. A single-statement write outside any transaction.
    pub async fn rename(&self, hash: &str, new_filename: &str) -> LedgerResult<()> {
        self.db
            .execute(
                &format!(
                    "UPDATE {} SET filename = ? WHERE hash = ?",
                    self.qualified_table()
                ),
                &[SqlValue::from(new_filename), SqlValue::from(hash)],
            )
            .await
            .map_err(|e| {
                LedgerError::WriteError(format!("rename to {new_filename} failed: {e}"))
            })?;
        Ok(())
    }

    /// All ledger rows ordered by filename. Used by read-only status
    /// reporting; returns an empty list when the table is absent.
    pub async fn all_records(&self) -> LedgerResult<Vec<LedgerRecord>> {
        if self.state != TableState::Present {
            return Ok(Vec::new());
        }
        let out = self
            .db
            .query(
                &format!(
                    "SELECT hash, filename, CAST(execution_date AS VARCHAR), duration \
                     FROM {} ORDER BY filename",
                    self.qualified_table()
                ),
                &[],
            )
            .await
            .map_err(|e| LedgerError::LookupError(format!("listing failed: {e}")))?;
        out.rows.iter().map(|r| LedgerRecord::from_row(r)).collect()
    }

    /// Check for the table without ever creating it, for read-only callers.
    pub async fn probe_table(&mut self) -> LedgerResult<bool> {
        if self.state == TableState::Unknown {
            let exists = self
                .db
                .table_exists(&self.schema, &self.table)
                .await
                .map_err(|e| LedgerError::TableError(format!("existence check failed: {e}")))?;
            self.state = if exists {
                TableState::Present
            } else {
                TableState::Missing
            };
        }
        Ok(self.state == TableState::Present)
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
