//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// A positional statement parameter.
///
/// Bound in order against `?` placeholders. Only the types the ledger
/// actually stores are represented.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Text value
    Text(String),
    /// 64-bit integer value
    Int(i64),
    /// SQL NULL
    Null,
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int(n)
    }
}

/// Rows returned from [`Database::query`].
///
/// Values surface as strings regardless of column type; NULL becomes the
/// literal string `"null"`. Callers that need typed values parse them.
#[derive(Debug, Clone, Default)]
pub struct QueryOutput {
    /// Number of rows returned
    pub row_count: usize,

    /// Row data, one `Vec<String>` per row in column order
    pub rows: Vec<Vec<String>>,
}

/// Database abstraction trait for Tidemark
///
/// Implementations must be Send + Sync for async operation. Parameterized
/// statements use positional `?` placeholders.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute SQL that modifies data, returns affected rows
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Execute one or more SQL statements with no parameters
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and return all rows
    async fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<QueryOutput>;

    /// Check whether a table exists via the catalog
    async fn table_exists(&self, schema: &str, table: &str) -> DbResult<bool>;

    /// Open a transaction
    async fn begin(&self) -> DbResult<()>;

    /// Commit the open transaction
    async fn commit(&self) -> DbResult<()>;

    /// Roll back the open transaction
    async fn rollback(&self) -> DbResult<()>;

    /// Release the connection
    async fn close(&self) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
