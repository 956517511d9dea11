use foodpacker_domain::config::{AppConfig, LoggingConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "FoodPacker");
    assert!((window.width - 1200.0).abs() < f64::EPSILON);
    assert!((window.height - 800.0).abs() < f64::EPSILON);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn app_config_deserializes_partial_input() {
    let raw = json!({
        "window": { "title": "FoodPacker (dev)" },
        "logging": { "level": "debug", "directory": "/tmp/foodpacker" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "FoodPacker (dev)");
    assert!((cfg.window.width - 1200.0).abs() < f64::EPSILON);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/foodpacker")));
}

#[test]
fn empty_input_yields_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, AppConfig::default());
}
