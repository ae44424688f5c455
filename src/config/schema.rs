//! Configuration schema definitions.
//!
//! This module contains the structs that map to the YAML configuration file
//! format. Defaults reproduce the stock Joint-LEO bootstrap.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::python::{default_interpreter, PythonVersion};

/// Root configuration structure for `.leo-setup/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Project name shown in the banner.
    pub project_name: String,

    /// Interpreter program (defaults to `python3`, or `python` on Windows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,

    /// Oldest acceptable interpreter version.
    pub min_python: PythonVersion,

    /// Dependency manifest, relative to the project root.
    pub manifest: PathBuf,

    /// Whether to run the package manager at all.
    pub install: bool,

    /// Packages whose import is verified after install, in order.
    pub packages: Vec<PackageSpec>,

    /// Output directories to create, relative to the project root.
    pub directories: Vec<String>,

    /// Hints printed after a successful run.
    pub next_steps: Vec<String>,

    /// Default output mode when no CLI flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            project_name: "Joint-LEO".to_string(),
            interpreter: None,
            min_python: PythonVersion::new(3, 7),
            manifest: PathBuf::from("requirements.txt"),
            install: true,
            packages: vec![
                PackageSpec::new("tensorflow", "TensorFlow"),
                PackageSpec::new("numpy", "NumPy"),
                PackageSpec::new("matplotlib", "Matplotlib"),
            ],
            directories: vec![
                "results".to_string(),
                "logs".to_string(),
                "checkpoints".to_string(),
            ],
            next_steps: vec![
                "Navigate to src/models/rl_multi_bw_share/".to_string(),
                "Run: python train_pensieve.py --user 1".to_string(),
            ],
            default_output: None,
        }
    }
}

impl SetupConfig {
    /// Interpreter program to run, falling back to the platform default.
    pub fn interpreter_program(&self) -> &str {
        self.interpreter
            .as_deref()
            .unwrap_or(default_interpreter())
    }
}

/// A package whose import is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Importable module name (e.g. `numpy`).
    pub module: String,

    /// Name shown to users (e.g. `NumPy`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PackageSpec {
    /// Create a package with a display name.
    pub fn new(module: &str, display_name: &str) -> Self {
        Self {
            module: module.to_string(),
            display_name: Some(display_name.to_string()),
        }
    }

    /// Name to show in progress output.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.module)
    }
}

/// Output mode options in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}
