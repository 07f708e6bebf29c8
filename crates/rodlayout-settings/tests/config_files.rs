//! Loading and saving configuration files

use rodlayout_settings::{CellViewSource, Config, OpenCellView, SettingsError};

#[test]
fn test_partial_toml_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[script]
source = "open"
precision = 2

[script.open]
lib = "demo"
cell = "inv"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.script.cell_view_var, "cv");
    assert_eq!(config.script.source, CellViewSource::Open);
    assert_eq!(config.script.precision, 2);
    assert_eq!(
        config.script.open,
        Some(OpenCellView {
            lib: "demo".to_string(),
            cell: "inv".to_string(),
            view: "layout".to_string(),
            mode: "a".to_string(),
        })
    );
}

#[test]
fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::new();
    config.logging.json = true;
    config.script.cell_view_var = "topCv".to_string();
    config.save_to_file(&path).unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[script]\nprecision = 12\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Config::load_or_default(Some(&missing)),
        Err(SettingsError::LoadError(_))
    ));
}
