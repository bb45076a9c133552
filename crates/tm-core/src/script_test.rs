//! Tests for script discovery and loading.

use crate::error::CoreError;
use crate::script::{load_scripts, Script};
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn script_new_trims_content() {
    let script = Script::new("001_a.sql", "  SELECT 1;\n\n").unwrap();
    assert_eq!(script.content, "SELECT 1;");
}

#[test]
fn script_new_rejects_blank_content() {
    assert!(Script::new("001_a.sql", "").is_none());
    assert!(Script::new("001_a.sql", "   \r\n\t  \n").is_none());
}

#[test]
fn identical_content_shares_fingerprint_across_names() {
    let a = Script::new("001_a.sql", "SELECT 1;").unwrap();
    let b = Script::new("999_z.sql", "SELECT 1;").unwrap();
    assert_eq!(a.fingerprint, b.fingerprint);
}

#[test]
fn loads_in_lexicographic_filename_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "002_x.sql", "SELECT 2;");
    write(dir.path(), "001_y.sql", "SELECT 1;");
    write(dir.path(), "010_z.sql", "SELECT 10;");

    let scripts = load_scripts(dir.path()).unwrap();
    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["001_y.sql", "002_x.sql", "010_z.sql"]);
}

#[test]
fn filters_to_sql_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "001_a.sql", "SELECT 1;");
    write(dir.path(), "002_b.SQL", "SELECT 2;");
    write(dir.path(), "notes.txt", "not sql");
    write(dir.path(), "README.md", "# docs");

    let scripts = load_scripts(dir.path()).unwrap();
    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["001_a.sql", "002_b.SQL"]);
}

#[test]
fn excludes_empty_scripts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "001_a.sql", "SELECT 1;");
    write(dir.path(), "002_blank.sql", "   \n\n");
    write(dir.path(), "003_b.sql", "SELECT 3;");

    let scripts = load_scripts(dir.path()).unwrap();
    let names: Vec<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["001_a.sql", "003_b.sql"]);
}

#[test]
fn ignores_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "001_a.sql", "SELECT 1;");
    std::fs::create_dir(dir.path().join("archive.sql")).unwrap();

    let scripts = load_scripts(dir.path()).unwrap();
    assert_eq!(scripts.len(), 1);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    let err = load_scripts(&missing).unwrap_err();
    assert!(matches!(err, CoreError::MigrationsDirUnreadable { .. }));
}
