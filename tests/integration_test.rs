// tests/integration_test.rs
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_release-tag-version"))
}

#[test]
fn test_help() {
    let output = binary().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-tag-version"));
    assert!(stdout.contains("Infer a version code and name"));
}

#[test]
fn test_version_flag() {
    let output = binary().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_build_type_fails() {
    let project = TempDir::new().unwrap();
    let output = binary()
        .arg("--project-dir")
        .arg(project.path())
        .output()
        .expect("Failed to execute command");

    // clap's usage error
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required"));
    assert!(stderr.contains("--build-type"));
}

#[test]
fn test_fallback_outputs_are_written() {
    let project = TempDir::new().unwrap();
    let output = binary()
        .arg("--project-dir")
        .arg(project.path())
        .args(["--build-type", "release"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Using versionCode 1 from Fallback"));
    assert!(stdout.contains("Using versionName 1.0.0 from Fallback"));

    let out_dir = project
        .path()
        .join("build/generated/release-tag-version/release");
    assert_eq!(fs::read_to_string(out_dir.join("code.txt")).unwrap(), "1");
    assert_eq!(fs::read_to_string(out_dir.join("name.txt")).unwrap(), "1.0.0");
}

#[test]
fn test_cli_overrides_with_custom_output_dir() {
    let project = TempDir::new().unwrap();
    let out_dir = project.path().join("out");
    let output = binary()
        .arg("--project-dir")
        .arg(project.path())
        .args(["--build-type", "debug"])
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--version-override", "1.0.3+4"])
        .args(["--version-code-override", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Using versionCode 5 from OverridingProperty"));
    assert!(stdout.contains("Using versionName 1.0.3 from OverridingProperty"));
    assert_eq!(fs::read_to_string(out_dir.join("code.txt")).unwrap(), "5");
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".version-override"), "1.0.2+3").unwrap();
    let output = binary()
        .arg("--project-dir")
        .arg(project.path())
        .args(["--build-type", "release", "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Using versionCode 3 from OverridingFile"));
    assert!(!project.path().join("build").exists());
}

#[test]
fn test_invalid_config_fails() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("release-tag-version.toml"),
        "unknown_key = true\n",
    )
    .unwrap();
    let output = binary()
        .arg("--project-dir")
        .arg(project.path())
        .args(["--build-type", "release"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error loading config"));
}
