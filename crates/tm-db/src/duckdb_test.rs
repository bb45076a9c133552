//! Tests for the DuckDB backend.

use crate::traits::{Database, SqlValue};
use crate::DuckDbBackend;

#[tokio::test]
async fn in_memory_reports_type() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn execute_with_params() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INTEGER, name VARCHAR)")
        .await
        .unwrap();

    let affected = db
        .execute(
            "INSERT INTO t (id, name) VALUES (?, ?)",
            &[SqlValue::Int(1), SqlValue::Text("alpha".to_string())],
        )
        .await
        .unwrap();
    assert_eq!(affected, 1);
}

#[tokio::test]
async fn query_returns_string_rows() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t (id INTEGER, name VARCHAR); \
         INSERT INTO t VALUES (1, 'alpha'), (2, 'beta');",
    )
    .await
    .unwrap();

    let out = db
        .query("SELECT id, name FROM t ORDER BY id", &[])
        .await
        .unwrap();
    assert_eq!(out.row_count, 2);
    assert_eq!(out.rows[0], vec!["1", "alpha"]);
    assert_eq!(out.rows[1], vec!["2", "beta"]);
}

#[tokio::test]
async fn query_with_params_filters() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t (id INTEGER, name VARCHAR); \
         INSERT INTO t VALUES (1, 'alpha'), (2, 'beta');",
    )
    .await
    .unwrap();

    let out = db
        .query(
            "SELECT name FROM t WHERE id = ?",
            &[SqlValue::Int(2)],
        )
        .await
        .unwrap();
    assert_eq!(out.rows, vec![vec!["beta".to_string()]]);
}

#[tokio::test]
async fn null_surfaces_as_null_string() {
    let db = DuckDbBackend::in_memory().unwrap();
    let out = db.query("SELECT NULL", &[]).await.unwrap();
    assert_eq!(out.rows, vec![vec!["null".to_string()]]);
}

#[tokio::test]
async fn table_exists_checks_catalog() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert!(!db.table_exists("main", "t").await.unwrap());

    db.execute_batch("CREATE TABLE t (id INTEGER)").await.unwrap();
    assert!(db.table_exists("main", "t").await.unwrap());
    assert!(!db.table_exists("other", "t").await.unwrap());
}

#[tokio::test]
async fn commit_persists_rollback_discards() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE t (id INTEGER)").await.unwrap();

    db.begin().await.unwrap();
    db.execute("INSERT INTO t VALUES (1)", &[]).await.unwrap();
    db.commit().await.unwrap();

    db.begin().await.unwrap();
    db.execute("INSERT INTO t VALUES (2)", &[]).await.unwrap();
    db.rollback().await.unwrap();

    let out = db.query("SELECT COUNT(*) FROM t", &[]).await.unwrap();
    assert_eq!(out.rows, vec![vec!["1".to_string()]]);
}

#[tokio::test]
async fn rollback_discards_ddl() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.begin().await.unwrap();
    db.execute_batch("CREATE TABLE rolled (id INTEGER)")
        .await
        .unwrap();
    db.rollback().await.unwrap();

    assert!(!db.table_exists("main", "rolled").await.unwrap());
}

#[tokio::test]
async fn execution_error_reported() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute_batch("NOT VALID SQL").await.unwrap_err();
    assert!(err.to_string().contains("[D002]"));
}

#[tokio::test]
async fn file_backed_database_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.duckdb");
    {
        let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
        db.execute_batch("CREATE TABLE t (id INTEGER)").await.unwrap();
        db.close().await.unwrap();
    }
    assert!(path.exists());
}
