// End-to-end tests for the themecheck binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn themecheck() -> Command {
    let mut cmd = Command::cargo_bin("themecheck").expect("binary built");
    cmd.env_remove("THEMECHECK_ROOT")
        .env_remove("THEMECHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_bundled_themes_pass_without_arguments() {
    themecheck()
        .assert()
        .code(0)
        .stdout("All theme manifests look good.\n")
        .stderr("");
}

#[test]
fn cli_reports_issues_with_exit_one() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("broken")).unwrap();

    themecheck()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(
            "Theme manifest validation failed:\n  - broken/manifest.json: missing manifest.json\n",
        )
        .stderr("");
}

#[test]
fn cli_missing_root_exits_two() {
    let temp = TempDir::new().unwrap();

    themecheck()
        .arg("--root")
        .arg(temp.path().join("absent"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("error: themes directory not found:"));
}

#[test]
fn cli_root_from_environment() {
    let temp = TempDir::new().unwrap();
    let theme = temp.path().join("plain");
    fs::create_dir(&theme).unwrap();
    fs::write(
        theme.join("manifest.json"),
        r#"{"manifest_version":3,"name":"Plain","version":"1","theme":{}}"#,
    )
    .unwrap();

    themecheck()
        .env("THEMECHECK_ROOT", temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "plain/manifest.json: theme block should include at least 'colors' or 'images'",
        ));
}

#[test]
fn cli_root_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("themes/broken")).unwrap();
    let config = temp.path().join("themecheck.toml");
    fs::write(&config, "themes_dir = \"themes\"\n").unwrap();

    themecheck()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("broken/manifest.json: missing manifest.json"));
}

#[test]
fn cli_json_format() {
    let temp = TempDir::new().unwrap();

    themecheck()
        .args(["--format", "json", "--root"])
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"issues\": []"));
}

#[test]
fn cli_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    themecheck()
        .arg("--config")
        .arg(temp.path().join("typo.toml"))
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::starts_with("error: "));
}

#[test]
fn cli_global_rust_log_keeps_stderr_quiet() {
    themecheck()
        .env("RUST_LOG", "debug")
        .assert()
        .code(0)
        .stdout("All theme manifests look good.\n")
        .stderr("");
}
