// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_gitlab_debranch_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "gitlab-debranch", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Delete stale branches"));
    assert!(stdout.contains("--ignored-days"));
    assert!(stdout.contains("--no-dry-run"));
}

#[test]
fn test_missing_group_is_usage_error() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "gitlab-debranch", "--", "--token", "x"])
        .env_remove("GITLAB_TOKEN")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unreachable_server_is_fatal() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--quiet",
            "--bin",
            "gitlab-debranch",
            "--",
            "--token",
            "glpat-secret",
            "--group",
            "acme",
            "--api-url",
            "http://127.0.0.1:9/api/v4",
        ])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("Running with the following arguments:"));
    assert!(!stdout.contains("Done!"));
    assert!(stdout
        .trim_end()
        .ends_with("Failed to access group. Confirm group and check token permissions."));
    assert!(!stderr.contains(" WARN "));
    assert!(!stdout.contains("glpat-secret"));
    assert!(!stderr.contains("glpat-secret"));
}
