//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every bootstrap step returns `Result<T>`; the runner short-circuits on
//!   the first `Err` and the command layer turns it into an exit code
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

use crate::python::PythonVersion;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Interpreter is older than the configured minimum.
    #[error("Python {required} or higher is required (found {found})")]
    UnsupportedRuntime {
        found: PythonVersion,
        required: PythonVersion,
    },

    /// Interpreter could not be run or did not report a version.
    #[error("Python interpreter '{program}' is not usable: {message}")]
    InterpreterUnavailable { program: String, message: String },

    /// Dependency manifest is missing.
    #[error("Dependency manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Package manager exited non-zero.
    #[error(
        "Failed to install dependencies from {} ({})",
        .manifest.display(),
        describe_exit(.code)
    )]
    InstallFailed {
        manifest: PathBuf,
        code: Option<i32>,
    },

    /// A required package could not be imported after install.
    #[error("Import error: {message}")]
    VerificationFailed { package: String, message: String },

    /// Output directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Subprocess could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Whether this error comes from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SetupError::ConfigNotFound { .. }
                | SetupError::ConfigParseError { .. }
                | SetupError::ConfigValidationError { .. }
        )
    }
}

/// Render a process exit code for messages.
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SetupError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SetupError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn install_failed_displays_plain_exit_code() {
        let err = SetupError::InstallFailed {
            manifest: PathBuf::from("requirements.txt"),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Failed to install dependencies from requirements.txt (exit code 1)"
        );
    }

    #[test]
    fn install_failed_without_code_was_signalled() {
        let err = SetupError::InstallFailed {
            manifest: PathBuf::from("requirements.txt"),
            code: None,
        };
        assert_eq!(
            err.to_string(),
            "Failed to install dependencies from requirements.txt (terminated by signal)"
        );
    }

    #[test]
    fn unsupported_runtime_displays_both_versions() {
        let err = SetupError::UnsupportedRuntime {
            found: PythonVersion::new(3, 6),
            required: PythonVersion::new(3, 7),
        };
        assert_eq!(
            err.to_string(),
            "Python 3.7 or higher is required (found 3.6)"
        );
    }

    #[test]
    fn interpreter_unavailable_displays_program() {
        let err = SetupError::InterpreterUnavailable {
            program: "python3".into(),
            message: "not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn verification_failed_surfaces_import_message() {
        let err = SetupError::VerificationFailed {
            package: "numpy".into(),
            message: "No module named 'numpy'".into(),
        };
        assert_eq!(err.to_string(), "Import error: No module named 'numpy'");
    }

    #[test]
    fn directory_creation_displays_path_and_cause() {
        let err = SetupError::DirectoryCreation {
            path: PathBuf::from("/ro/results"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/ro/results"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(SetupError::ConfigValidationError {
            message: "x".into()
        }
        .is_config_error());
        assert!(!SetupError::ManifestNotFound {
            path: PathBuf::from("requirements.txt")
        }
        .is_config_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }
}
