//! Loading `som.toml` from disk.

use som_config::{ConfigError, SomConfig, CONFIG_FILE_NAME};
use som_runtime::OverflowPolicy;
use tempfile::TempDir;

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[arithmetic]\noverflow = \"checked\"\n").unwrap();

    let config = SomConfig::from_file(&path).unwrap();
    assert_eq!(config.arithmetic.overflow, OverflowPolicy::Checked);
}

#[test]
fn test_from_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = SomConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));
}

#[test]
fn test_discover_finds_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[project]\nname = \"answer\"\n[arithmetic]\noverflow = \"checked\"\n",
    )
    .unwrap();

    let config = SomConfig::discover(dir.path()).unwrap();
    assert_eq!(config.project.name.as_deref(), Some("answer"));
    assert_eq!(config.arithmetic.overflow, OverflowPolicy::Checked);
}

#[test]
fn test_discover_without_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = SomConfig::discover(dir.path()).unwrap();
    assert_eq!(config, SomConfig::default());
}

#[test]
fn test_discover_reports_invalid_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[arithmetic\n").unwrap();

    let err = SomConfig::discover(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml(_)));
}
