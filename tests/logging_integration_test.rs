//! Integration tests for logging functionality

use export_swagger::config::{parse_config, LoggingConfig};
use export_swagger::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_logging_section_is_optional() {
    let config = parse_config(
        r#"
[service]
name = "users-api"
"#,
    )
    .unwrap();

    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_invalid_rotation_is_rejected() {
    let result = parse_config(
        r#"
[service]
name = "users-api"

[logging]
local_rotation = "weekly"
"#,
    );

    let err = result.unwrap_err().to_string();
    assert!(err.contains("weekly"));
}

#[test]
fn test_invalid_level_is_rejected_before_subscriber_install() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(result.is_err());
}

// Installs the global subscriber; keep it the only test in this binary that succeeds at init.
#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();
    tracing::info!("written to file");
    drop(guard);

    assert!(log_path.is_dir());
    assert!(log_path.join("export-swagger.log").exists());
}
