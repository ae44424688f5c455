//! Integration tests for the leo-setup binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn leo_setup() -> Command {
    let mut cmd = Command::new(cargo_bin("leo-setup"));
    cmd.env_remove("LEO_SETUP_PYTHON")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".leo-setup");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    leo_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bootstrap the Joint-LEO"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    leo_setup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_command() -> Result<(), Box<dyn std::error::Error>> {
    leo_setup().arg("deploy").assert().failure();
    Ok(())
}

#[test]
fn config_shows_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    leo_setup()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("requirements.txt"))
        .stdout(predicate::str::contains("checkpoints"));
    Ok(())
}

#[test]
fn config_json_uses_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("project_name: Pensieve");
    let output = leo_setup()
        .args(["config", "--json", "--project"])
        .arg(temp.path())
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["project_name"], "Pensieve");
    assert_eq!(value["min_python"], "3.7");
    Ok(())
}

#[test]
fn invalid_config_exits_with_code_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: []");
    leo_setup()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("At least one package"));
    Ok(())
}

#[test]
fn missing_config_override_exits_with_code_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    leo_setup()
        .current_dir(temp.path())
        .args(["check", "--config", "nope.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn missing_interpreter_exits_with_code_1() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "numpy\n")?;
    leo_setup()
        .current_dir(temp.path())
        .args(["--python", "leo-setup-no-such-python"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("leo-setup-no-such-python"));
    assert!(!temp.path().join("results").exists());
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    leo_setup()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("leo-setup"));
    Ok(())
}

/// End-to-end runs against a shell script standing in for the interpreter.
#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const FAKE_PYTHON: &str = r#"#!/bin/sh
case "$1" in
  --version)
    echo "Python ${FAKE_PY_VERSION:-3.11.4}"
    ;;
  -m)
    echo "Collecting numpy"
    exit "${FAKE_PIP_EXIT:-0}"
    ;;
  -c)
    echo "Matplotlib is building the font cache; this may take a moment."
    case "$2" in
      *"import ${FAKE_MISSING:-__none__};"*)
        echo "Traceback (most recent call last):" >&2
        echo "ModuleNotFoundError: No module named '${FAKE_MISSING}'" >&2
        exit 1
        ;;
    esac
    echo "1.0.0"
    ;;
esac
"#;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "tensorflow\nnumpy\nmatplotlib\n",
        )
        .unwrap();
        let script = temp.path().join("fake-python");
        fs::write(&script, FAKE_PYTHON).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        temp
    }

    fn run_in(temp: &TempDir) -> Command {
        let mut cmd = leo_setup();
        cmd.current_dir(temp.path())
            .arg("--python")
            .arg(temp.path().join("fake-python"));
        cmd
    }

    fn no_dirs(root: &Path) -> bool {
        ["results", "logs", "checkpoints"]
            .iter()
            .all(|d| !root.join(d).exists())
    }

    #[test]
    fn full_run_succeeds_and_creates_directories() {
        let temp = project();
        run_in(&temp)
            .assert()
            .success()
            .stdout(predicate::str::contains("Joint-LEO Setup"))
            .stdout(predicate::str::contains("[1/4] Checking Python version"))
            .stdout(predicate::str::contains("Python 3.11 detected"))
            .stdout(predicate::str::contains("Dependencies installed successfully"))
            .stdout(predicate::str::contains("NumPy 1.0.0 installed"))
            .stdout(predicate::str::contains("Created checkpoints/"))
            .stdout(predicate::str::contains("Setup completed successfully!"))
            .stdout(predicate::str::contains("train_pensieve.py"));

        for dir in ["results", "logs", "checkpoints"] {
            assert!(temp.path().join(dir).is_dir());
        }
    }

    #[test]
    fn second_run_also_succeeds() {
        let temp = project();
        run_in(&temp).assert().success();
        fs::write(temp.path().join("logs").join("run.log"), "kept").unwrap();

        run_in(&temp).assert().success();

        assert_eq!(
            fs::read_to_string(temp.path().join("logs").join("run.log")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn old_python_fails_before_install() {
        let temp = project();
        run_in(&temp)
            .env("FAKE_PY_VERSION", "3.6.9")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Dependencies installed").not())
            .stderr(predicate::str::contains(
                "Python 3.7 or higher is required (found 3.6.9)",
            ));
        assert!(no_dirs(temp.path()));
    }

    #[test]
    fn pip_failure_is_reported_once() {
        let temp = project();
        run_in(&temp)
            .env("FAKE_PIP_EXIT", "1")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("installed").not())
            .stderr("✗ Failed to install dependencies from requirements.txt (exit code 1)\n");
        assert!(no_dirs(temp.path()));
    }

    #[test]
    fn import_chatter_does_not_leak_into_versions() {
        let temp = project();
        run_in(&temp)
            .assert()
            .success()
            .stdout(predicate::str::contains("TensorFlow 1.0.0 installed"))
            .stdout(predicate::str::contains("font cache").not());
    }

    #[test]
    fn blocked_directory_fails_the_run() {
        let temp = project();
        fs::write(temp.path().join("results"), "not a directory").unwrap();
        run_in(&temp)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("All dependencies verified successfully!"))
            .stdout(predicate::str::contains("Setup completed successfully!").not())
            .stderr(predicate::str::contains("Failed to create directory"))
            .stderr(predicate::str::contains("results"));
        assert!(temp.path().join("results").is_file());
        assert!(!temp.path().join("logs").exists());
    }

    #[test]
    fn import_failure_names_the_module() {
        let temp = project();
        run_in(&temp)
            .env("FAKE_MISSING", "matplotlib")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("NumPy 1.0.0 installed"))
            .stderr(predicate::str::contains(
                "Import error: ModuleNotFoundError: No module named 'matplotlib'",
            ));
        assert!(no_dirs(temp.path()));
    }

    #[test]
    fn missing_manifest_stops_the_run() {
        let temp = project();
        fs::remove_file(temp.path().join("requirements.txt")).unwrap();
        run_in(&temp)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Dependency manifest not found"));
        assert!(no_dirs(temp.path()));
    }

    #[test]
    fn skip_install_still_verifies() {
        let temp = project();
        run_in(&temp)
            .args(["run", "--skip-install"])
            .env("FAKE_PIP_EXIT", "1")
            .assert()
            .success()
            .stderr(predicate::str::contains("Skipping dependency installation"));
        assert!(temp.path().join("results").is_dir());
    }

    #[test]
    fn check_leaves_project_untouched() {
        let temp = project();
        run_in(&temp)
            .args(["check", "--non-interactive"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Environment check passed"));
        assert!(no_dirs(temp.path()));
    }
}
