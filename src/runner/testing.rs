//! In-memory [`Toolchain`] for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::python::{OutputSink, PythonVersion, Toolchain};
use crate::shell::{CommandResult, OutputLine};

/// A fake interpreter that records what it was asked to do.
#[derive(Debug)]
pub struct FakeToolchain {
    version: Option<PythonVersion>,
    install_exit: Option<i32>,
    modules: HashMap<String, String>,
    installs: RefCell<Vec<PathBuf>>,
    imports: RefCell<Vec<String>>,
}

impl FakeToolchain {
    /// An interpreter reporting `version` with no importable modules.
    pub fn new(version: PythonVersion) -> Self {
        Self {
            version: Some(version),
            install_exit: None,
            modules: HashMap::new(),
            installs: RefCell::new(Vec::new()),
            imports: RefCell::new(Vec::new()),
        }
    }

    /// An interpreter that cannot be run at all.
    pub fn unavailable() -> Self {
        Self {
            version: None,
            ..Self::new(PythonVersion::new(0, 0))
        }
    }

    /// Make `module` importable with the given version.
    pub fn with_module(mut self, module: &str, version: &str) -> Self {
        self.modules.insert(module.to_string(), version.to_string());
        self
    }

    /// Make every default package importable.
    pub fn with_default_packages(self) -> Self {
        self.with_module("tensorflow", "2.15.0")
            .with_module("numpy", "1.26.4")
            .with_module("matplotlib", "3.8.2")
    }

    /// Make pip exit with `code`.
    pub fn failing_install(mut self, code: i32) -> Self {
        self.install_exit = Some(code);
        self
    }

    pub fn install_calls(&self) -> usize {
        self.installs.borrow().len()
    }

    pub fn installed_manifests(&self) -> Vec<PathBuf> {
        self.installs.borrow().clone()
    }

    pub fn imported(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }
}

impl Toolchain for FakeToolchain {
    fn program(&self) -> &str {
        "fake-python"
    }

    fn version(&self) -> Result<PythonVersion> {
        self.version.ok_or_else(|| SetupError::InterpreterUnavailable {
            program: "fake-python".to_string(),
            message: "could not be executed".to_string(),
        })
    }

    fn install(&self, manifest: &Path, sink: OutputSink) -> Result<CommandResult> {
        self.installs.borrow_mut().push(manifest.to_path_buf());
        if let OutputSink::Stream(callback) = sink {
            callback(OutputLine::Stdout("Collecting numpy".to_string()));
        }

        Ok(match self.install_exit {
            None => CommandResult::success(String::new(), String::new(), Duration::ZERO),
            Some(code) => CommandResult::failure(
                Some(code),
                String::new(),
                "ERROR: No matching distribution found".to_string(),
                Duration::ZERO,
            ),
        })
    }

    fn module_version(&self, module: &str) -> Result<String> {
        self.imports.borrow_mut().push(module.to_string());
        self.modules
            .get(module)
            .cloned()
            .ok_or_else(|| SetupError::VerificationFailed {
                package: module.to_string(),
                message: format!("No module named '{}'", module),
            })
    }
}
