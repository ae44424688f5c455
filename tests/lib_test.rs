//! Library integration tests.

use std::fs;

use leo_setup::config::{load_config, validate, PackageSpec, SetupConfig, CONFIG_DIR};
use leo_setup::python::PythonVersion;
use leo_setup::runner::{BootstrapRunner, RunOptions};
use leo_setup::steps::{create_directories, BootstrapStep};
use leo_setup::ui::{MockUI, OutputMode};
use leo_setup::SetupError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = SetupError::ManifestNotFound {
        path: "requirements.txt".into(),
    };
    assert!(err.to_string().contains("requirements.txt"));
    assert!(!err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> leo_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use leo_setup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["leo-setup", "config", "--json"]);

    if let Some(Commands::Config(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn plan_runs_steps_in_order() {
    assert_eq!(
        BootstrapRunner::plan(),
        [
            BootstrapStep::VersionCheck,
            BootstrapStep::Install,
            BootstrapStep::Verify,
            BootstrapStep::Directories,
        ]
    );
    assert_eq!(
        BootstrapRunner::check_plan(),
        [BootstrapStep::VersionCheck, BootstrapStep::Verify]
    );
}

#[test]
fn version_threshold_is_inclusive() {
    let minimum = SetupConfig::default().min_python;
    assert!(PythonVersion::new(3, 7).satisfies(&minimum));
    assert!(PythonVersion::with_patch(3, 7, 0).satisfies(&minimum));
    assert!(!PythonVersion::with_patch(3, 6, 15).satisfies(&minimum));
    assert!(PythonVersion::new(3, 10).satisfies(&minimum));
}

#[test]
fn project_config_customizes_packages() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        r#"
project_name: Pensieve
min_python: "3.8"
packages:
  - module: numpy
    display_name: NumPy
  - module: scipy
directories: [runs, runs/plots]
"#,
    )
    .unwrap();

    let config = load_config(temp.path(), None).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.project_name, "Pensieve");
    assert_eq!(config.min_python, PythonVersion::new(3, 8));
    assert_eq!(
        config.packages,
        vec![
            PackageSpec::new("numpy", "NumPy"),
            PackageSpec {
                module: "scipy".to_string(),
                display_name: None,
            },
        ]
    );
    assert!(config.install);
}

#[test]
fn directories_can_be_created_twice() {
    let temp = TempDir::new().unwrap();
    let dirs = SetupConfig::default().directories;
    let mut ui = MockUI::with_mode(OutputMode::Quiet);

    let first = create_directories(temp.path(), &dirs, &mut ui).unwrap();
    let second = create_directories(temp.path(), &dirs, &mut ui).unwrap();

    assert_eq!(first, second);
    assert!(second.iter().all(|p| p.is_dir()));
}

#[test]
fn missing_interpreter_stops_the_run() {
    use leo_setup::python::PythonToolchain;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();
    let config = SetupConfig::default();
    let toolchain = PythonToolchain::new("leo-setup-no-such-python", temp.path());
    let mut ui = MockUI::new();

    let err = BootstrapRunner::new(&config, &toolchain, temp.path())
        .run(&RunOptions::default(), &mut ui)
        .unwrap_err();

    assert!(matches!(err, SetupError::InterpreterUnavailable { .. }));
    assert!(!temp.path().join("results").exists());
}
