use pixgrid::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn defaults_are_valid() {
    let config = Config::default();
    config.validate().unwrap();

    assert_eq!(config.gallery.page_size, 9);
    assert_eq!(config.gallery.debounce_ms, 500);
    assert_eq!(config.gallery.default_category, "sport");
    assert_eq!(config.api.key_env_var, "PIXGRID_API_KEY");
}

#[test]
fn load_from_parses_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[api]
base_url = "https://images.example.com/api"

[gallery]
page_size = 12
debounce_ms = 250
default_category = "nature"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://images.example.com/api");
    assert_eq!(config.gallery.page_size, 12);
    assert_eq!(config.gallery.debounce_ms, 250);
    assert_eq!(config.gallery.default_category, "nature");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"https://images.example.com\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.gallery.page_size, 9);
}

#[test]
fn zero_page_size_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[gallery]\npage_size = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"  \"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn garbage_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
