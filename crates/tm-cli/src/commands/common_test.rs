//! Tests for shared command utilities.

use crate::cli::GlobalArgs;
use crate::commands::common::{calculate_column_widths, load_config};

fn global(project_dir: &str) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: project_dir.to_string(),
        config: None,
    }
}

#[test]
fn load_config_from_project_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tidemark.yml"),
        "name: demo\nmigrations_path: db\n",
    )
    .unwrap();

    let (config, root) = load_config(&global(dir.path().to_str().unwrap())).unwrap();
    assert_eq!(config.name, "demo");
    assert_eq!(config.migrations_dir(&root), dir.path().join("db"));
}

#[test]
fn load_config_explicit_path_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("other.yml");
    std::fs::write(&config_path, "name: elsewhere\n").unwrap();

    let mut args = global(dir.path().to_str().unwrap());
    args.config = Some(config_path.display().to_string());
    let (config, _) = load_config(&args).unwrap();
    assert_eq!(config.name, "elsewhere");
}

#[test]
fn load_config_missing_reports_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&global(dir.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("configuration"));
}

#[test]
fn column_widths_cover_headers_and_cells() {
    let widths = calculate_column_widths(
        &["SCRIPT", "STATE"],
        &[vec!["001_create_users.sql".to_string(), "ok".to_string()]],
    );
    assert_eq!(widths, vec![20, 5]);
}
