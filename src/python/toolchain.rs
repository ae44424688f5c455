//! The interpreter seam used by the bootstrap steps.
//!
//! Steps never spawn processes themselves; they go through [`Toolchain`] so
//! tests can substitute a fake interpreter.

use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::shell::{self, CommandOptions, CommandResult, OutputCallback};

use super::version::PythonVersion;

/// Where the package manager's output should go.
pub enum OutputSink {
    /// Pass the subprocess's output straight through to the terminal.
    Inherit,
    /// Capture output silently.
    Capture,
    /// Capture output and feed each line to a callback.
    Stream(OutputCallback),
}

/// Operations the bootstrap needs from a Python installation.
pub trait Toolchain {
    /// Program name or path used to invoke the interpreter.
    fn program(&self) -> &str;

    /// Detect the interpreter's version.
    fn version(&self) -> Result<PythonVersion>;

    /// Install every package listed in `manifest`.
    ///
    /// A non-zero exit from the package manager is `Ok` with
    /// `success == false`.
    fn install(&self, manifest: &Path, sink: OutputSink) -> Result<CommandResult>;

    /// Import `module` and return its reported `__version__`.
    fn module_version(&self, module: &str) -> Result<String>;
}

/// Default interpreter program for the current platform.
pub fn default_interpreter() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// A real interpreter reached through subprocesses.
#[derive(Debug, Clone)]
pub struct PythonToolchain {
    program: String,
    cwd: PathBuf,
}

impl PythonToolchain {
    /// Create a toolchain that runs `program` with `cwd` as working directory.
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.to_path_buf(),
        }
    }

    fn options(&self, capture: bool) -> CommandOptions {
        CommandOptions {
            cwd: Some(self.cwd.clone()),
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        }
    }

    fn unavailable(&self, message: impl Into<String>) -> SetupError {
        SetupError::InterpreterUnavailable {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

/// Build the `-c` snippet that imports a module and prints its version.
pub fn import_snippet(module: &str) -> String {
    format!("import {m}; print(getattr({m}, '__version__', 'unknown'))", m = module)
}

/// The version a snippet printed: its last non-empty stdout line.
///
/// Modules may print on import, so earlier lines are ignored.
fn reported_version(stdout: &str) -> String {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

impl Toolchain for PythonToolchain {
    fn program(&self) -> &str {
        &self.program
    }

    fn version(&self) -> Result<PythonVersion> {
        let result = shell::execute_quiet(&self.program, &["--version"], Some(self.cwd.as_path()))
            .map_err(|_| self.unavailable("could not be executed"))?;

        // Python 2 prints its banner on stderr.
        let banner = format!("{}\n{}", result.stdout, result.stderr);
        PythonVersion::from_banner(&banner).ok_or_else(|| {
            tracing::debug!("Unrecognized version output: {:?}", banner.trim());
            self.unavailable("did not report a Python version")
        })
    }

    fn install(&self, manifest: &Path, sink: OutputSink) -> Result<CommandResult> {
        let manifest_arg = manifest.to_string_lossy();
        let args = ["-m", "pip", "install", "-r", manifest_arg.as_ref()];

        match sink {
            OutputSink::Inherit => shell::execute(&self.program, &args, &self.options(false)),
            OutputSink::Capture => shell::execute(&self.program, &args, &self.options(true)),
            OutputSink::Stream(callback) => {
                shell::execute_streaming(&self.program, &args, &self.options(true), callback)
            }
        }
    }

    fn module_version(&self, module: &str) -> Result<String> {
        let snippet = import_snippet(module);
        let result = shell::execute(&self.program, &["-c", &snippet], &self.options(true))?;

        if result.success {
            Ok(reported_version(&result.stdout))
        } else {
            let message = result
                .last_error_line()
                .map(str::to_string)
                .unwrap_or_else(|| format!("No module named '{}'", module));
            Err(SetupError::VerificationFailed {
                package: module.to_string(),
                message,
            })
        }
    }
}
