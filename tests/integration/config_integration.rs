//! Configuration loading through files and environment overrides.

use super::test_utils::EnvGuard;
use gish::config::{global_config_path, ConfigLoader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_explicit_file() {
    let _env = EnvGuard::set(&[]);
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gish.toml");
    fs::write(
        &path,
        r#"
[github]
api_url = "http://localhost:8080"
request_timeout_secs = 5

[shell]
prompt = "gh:"
color = false
browser = "firefox"

[logging]
enabled = true
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.github.api_url, "http://localhost:8080");
    assert_eq!(config.github.request_timeout_secs, 5);
    assert_eq!(config.github.web_url, "https://www.github.com");
    assert_eq!(config.shell.prompt, "gh:");
    assert!(!config.shell.color);
    assert_eq!(config.shell.browser.as_deref(), Some("firefox"));
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_global_file_and_environment_precedence() {
    let temp = TempDir::new().unwrap();
    let config_home = temp.path().join("config");
    fs::create_dir_all(config_home.join("gish")).unwrap();
    fs::write(
        config_home.join("gish").join("config.toml"),
        "[shell]\nprompt = \"from-file:\"\n\n[github]\nweb_url = \"https://file.example\"\n",
    )
    .unwrap();

    let _env = EnvGuard::set(&[
        ("XDG_CONFIG_HOME", config_home.to_str().unwrap()),
        ("GISH__GITHUB__WEB_URL", "https://env.example"),
    ]);

    assert_eq!(
        global_config_path().unwrap(),
        config_home.join("gish").join("config.toml")
    );
    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.shell.prompt, "from-file:");
    assert_eq!(config.github.web_url, "https://env.example");
}

#[test]
fn test_defaults_without_any_file() {
    let temp = TempDir::new().unwrap();
    let _env = EnvGuard::set(&[("XDG_CONFIG_HOME", temp.path().to_str().unwrap())]);

    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.shell.prompt, "gish:");
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_fail_validation() {
    let _env = EnvGuard::set(&[]);
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[github]\napi_url = \"\"\nconnect_timeout_secs = 0\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    let errors = config.validate().unwrap_err();
    assert!(!errors.is_empty());
    assert!(config.ensure_valid().is_err());
}
