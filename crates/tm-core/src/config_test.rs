//! Tests for tidemark.yml parsing and validation.

use crate::config::{Config, DbType};
use crate::error::CoreError;

fn parse(yaml: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

#[test]
fn minimal_config_uses_defaults() {
    let config = parse("name: demo").unwrap();
    assert_eq!(config.name, "demo");
    assert_eq!(config.migrations_path, "migrations");
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.database.path, ":memory:");
    assert_eq!(config.ledger.schema, "main");
    assert_eq!(config.ledger.table, "tidemark_history");
}

#[test]
fn full_config_round_trips() {
    let config = parse(
        "name: warehouse\n\
         migrations_path: sql/migrations\n\
         database:\n\
           type: duckdb\n\
           path: target/dev.duckdb\n\
         ledger:\n\
           schema: ops\n\
           table: change_log\n",
    )
    .unwrap();
    assert_eq!(config.migrations_path, "sql/migrations");
    assert_eq!(config.database.path, "target/dev.duckdb");
    assert_eq!(config.ledger.schema, "ops");
    assert_eq!(config.ledger.table, "change_log");
}

#[test]
fn unknown_fields_rejected() {
    assert!(parse("name: demo\nmigrations_dir: oops\n").is_err());
}

#[test]
fn load_from_dir_finds_yml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tidemark.yml"), "name: demo\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "demo");
}

#[test]
fn load_from_dir_missing_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn ledger_identifiers_validated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tidemark.yml"),
        "name: demo\nledger:\n  table: \"bad;table\"\n",
    )
    .unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn migrations_dir_joins_root() {
    let config = parse("name: demo\nmigrations_path: db/changes\n").unwrap();
    let dir = config.migrations_dir(std::path::Path::new("/proj"));
    assert_eq!(dir, std::path::PathBuf::from("/proj/db/changes"));
}
