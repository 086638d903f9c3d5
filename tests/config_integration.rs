use docqet_web::config::{AppConfig, Environment};
use serial_test::serial;
use std::env;
use std::fs;

const BIN: &str = "docqet-web";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    // SAFETY: tests touching the environment are serialized with `#[serial]`.
    unsafe {
        for key in [
            "DOCQET_SERVER__PORT",
            "DOCQET_SERVER__HOST",
            "DOCQET_APP__ENVIRONMENT",
            "DOCQET_LOGGING__LEVEL",
            "DOCQET_LOGGING__JSON",
            "DOCQET_CORS__ALLOWED_ORIGINS",
            "DOCQET_ENV",
            "CONFIG_FILE",
            "HOST",
            "PORT",
        ] {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let loaded = AppConfig::load_from_args([BIN]).expect("defaults should load");
    let config = loaded.config;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.request_timeout_secs, 30);
    assert_eq!(config.app.environment, Environment::Development);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert_eq!(
        config.cors.allowed_origins,
        vec!["http://localhost:3000", "http://127.0.0.1:3000"]
    );
    assert!(loaded.export_dir.is_none());
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    // SAFETY: serialized with `#[serial]`.
    unsafe {
        env::set_var("DOCQET_SERVER__PORT", "9090");
        env::set_var(
            "DOCQET_CORS__ALLOWED_ORIGINS",
            "https://docqet.app,https://www.docqet.app",
        );
    }

    let config = AppConfig::load_from_args([BIN])
        .expect("Failed to load config")
        .config;
    assert_eq!(config.server.port, 9090);
    assert_eq!(
        config.cors.allowed_origins,
        vec!["https://docqet.app", "https://www.docqet.app"]
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_beats_env() {
    clear_env_vars();
    // SAFETY: serialized with `#[serial]`.
    unsafe {
        env::set_var("DOCQET_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "7000", "--host", "127.0.0.1"])
        .expect("Failed to load config")
        .config;
    assert_eq!(config.server.port, 7000);
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("docqet.yaml");
    fs::write(
        &file_path,
        r"
server:
  port: 7070
logging:
  level: debug
",
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([BIN, "--config", file_path.to_str().unwrap()])
        .expect("Failed to load config from file")
        .config;
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.logging.level, "debug");
    // Untouched keys keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/definitely/not/here.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_production_forces_json_logs() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN, "--environment", "Production"])
        .expect("Failed to load config")
        .config;
    assert_eq!(config.app.environment, Environment::Production);
    assert!(config.logging.json);
    assert_eq!(config.logging.level, "warn");
}

#[test]
#[serial]
fn test_production_keeps_explicit_level() {
    clear_env_vars();
    // SAFETY: serialized with `#[serial]`.
    unsafe {
        env::set_var("DOCQET_LOGGING__LEVEL", "debug");
    }

    let config = AppConfig::load_from_args([BIN, "--environment", "production"])
        .expect("Failed to load config")
        .config;
    assert_eq!(config.logging.level, "debug");

    clear_env_vars();
}

#[test]
#[serial]
fn test_export_flag() {
    clear_env_vars();

    let loaded = AppConfig::load_from_args([BIN, "--export", "dist"]).expect("Failed to load config");
    assert_eq!(loaded.export_dir.as_deref(), Some(std::path::Path::new("dist")));
}

#[test]
#[serial]
fn test_production_keeps_explicit_info_level() {
    clear_env_vars();
    // SAFETY: serialized with `#[serial]`.
    unsafe {
        env::set_var("DOCQET_LOGGING__LEVEL", "info");
    }

    let config = AppConfig::load_from_args([BIN, "--environment", "production"])
        .expect("Failed to load config")
        .config;
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_production_keeps_info_level_from_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("docqet.yaml");
    fs::write(
        &file_path,
        r"
app:
  environment: production
logging:
  level: info
",
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([BIN, "--config", file_path.to_str().unwrap()])
        .expect("Failed to load config from file")
        .config;
    assert_eq!(config.app.environment, Environment::Production);
    assert_eq!(config.logging.level, "info");
}
