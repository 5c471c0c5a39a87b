// tests/config_test.rs
use gitlab_debranch::config::{load_config, Config};
use gitlab_debranch::settings::{resolve, CliOptions};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn options() -> CliOptions {
    CliOptions {
        group: "acme".to_string(),
        token: "glpat-secret".to_string(),
        ..CliOptions::default()
    }
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
api_url = "https://git.internal.example/api/v4"
timeout_secs = 10

[filters]
ignored_days = 45
ignored_projects = ["sandbox-"]
only_branches = ["feature/", "bugfix/"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.api_url, "https://git.internal.example/api/v4");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.filters.ignored_days, Some(45));
    assert_eq!(
        config.filters.ignored_projects,
        Some(vec!["sandbox-".to_string()])
    );
    assert_eq!(
        config.filters.only_branches,
        Some(vec!["feature/".to_string(), "bugfix/".to_string()])
    );
}

#[test]
fn test_file_filters_feed_settings() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[filters]\nignored_branches = [\"release/\"]\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    let settings = resolve(options(), &config).unwrap();
    assert_eq!(
        settings.ignored_branches,
        Some(vec!["release/".to_string()])
    );
    assert!(settings.dry_run);
}

#[test]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"api_url = [not toml").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_config_in_current_directory_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("debranch.toml"),
        "[filters]\nignored_days = 12\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(loaded.unwrap().filters.ignored_days, Some(12));
}

#[test]
#[serial]
fn test_bad_config_in_current_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("debranch.toml"), "token = \"nope\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert!(loaded.is_err());
}

#[test]
fn test_default_config_resolves() {
    let settings = resolve(options(), &Config::default()).unwrap();
    assert_eq!(settings.api_url, "https://gitlab.com/api/v4");
    assert_eq!(settings.ignored_days, 90);
}
