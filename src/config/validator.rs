//! Configuration validation rules.
//!
//! - At least one package must be verified
//! - Module names must be dotted Python identifiers (they are spliced into
//!   an `import` statement)
//! - Directories must be relative and stay inside the project root
//! - The manifest and interpreter must be non-empty

use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};

static RE_MODULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_packages(config));
    errors.extend(validate_directories(config));

    if config.manifest.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-manifest",
            "'manifest' must not be empty".to_string(),
        ));
    }

    if config
        .interpreter
        .as_deref()
        .is_some_and(|i| i.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "empty-interpreter",
            "'interpreter' must not be empty".to_string(),
        ));
    }

    errors
}

fn validate_packages(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.packages.is_empty() {
        errors.push(ValidationError::new(
            "no-packages",
            "At least one package must be listed under 'packages'".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for package in &config.packages {
        if !RE_MODULE.is_match(&package.module) {
            errors.push(ValidationError::new(
                "invalid-module",
                format!("'{}' is not a valid Python module name", package.module),
            ));
        } else if !seen.insert(package.module.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-module",
                format!("Package '{}' is listed more than once", package.module),
            ));
        }
    }

    errors
}

fn validate_directories(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for dir in &config.directories {
        let path = Path::new(dir);
        if dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-directory",
                "Directory names must not be empty".to_string(),
            ));
        } else if path.has_root() || path.is_absolute() {
            errors.push(ValidationError::new(
                "absolute-directory",
                format!("Directory '{}' must be relative to the project root", dir),
            ));
        } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
            errors.push(ValidationError::new(
                "escaping-directory",
                format!("Directory '{}' must not contain '..'", dir),
            ));
        }
    }

    errors
}

/// Validate and return an error joining every message.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(SetupError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
