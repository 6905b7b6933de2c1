use chartkit::color::{ColorScheme, RgbColor};
use chartkit::config::Config;
use chartkit::ConfigError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_config(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("chartkit-test-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("config.toml")
}

#[test]
fn set_value_creates_file_from_template() {
    let path = temp_config("create");
    Config::set_value(&path, "labels.color_scheme", "fire").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# Color scheme:"), "comments are kept");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.labels.color_scheme, ColorScheme::Fire);
    assert_eq!(config.canvas.width, 480);
}

#[test]
fn set_value_accepts_typed_values() {
    let path = temp_config("typed");
    Config::set_value(&path, "text.color", "#FF0000").unwrap();
    Config::set_value(&path, "canvas.width", "640").unwrap();
    Config::set_value(&path, "labels.digits", "3").unwrap();
    Config::set_value(&path, "labels.thousands_separator", "false").unwrap();
    Config::set_value(&path, "text.alignment", "right").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.text.color, RgbColor::new(255, 0, 0));
    assert_eq!(config.canvas.width, 640);
    assert_eq!(config.labels.digits, Some(3));
    assert!(!config.labels.thousands_separator);
    assert_eq!(config.formatter(1.0).format(1234.5), "1234.500");
}

#[test]
fn set_value_rejects_unknown_key() {
    let path = temp_config("unknown");
    let err = Config::set_value(&path, "labels.font", "big").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKey(_)));
    assert!(!path.exists());
}

#[test]
fn set_value_rejects_mistyped_value() {
    let path = temp_config("mistyped");
    let err = Config::set_value(&path, "canvas.width", "wide").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(!path.exists());
}

#[test]
fn load_missing_file_is_io_error() {
    let path = temp_config("missing");
    assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn load_rejects_bad_toml() {
    let path = temp_config("bad");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[canvas]\nwidth = \"wide\"\n").unwrap();
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn written_template_loads_as_defaults() {
    let path = temp_config("template");
    Config::write_template(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn formatter_derives_digits_from_interval() {
    let config = Config::default();
    assert_eq!(config.formatter(0.25).digits, 3);
    assert_eq!(config.formatter(0.25).format(2.5), "2.500");
    assert_eq!(config.text_attributes().scale, 2);
}
