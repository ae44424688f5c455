//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory (relative to the project root) holding config files.
pub const CONFIG_DIR: &str = ".leo-setup";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .leo-setup/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .leo-setup/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let existing = |name: &str| {
            let path = project_root.join(CONFIG_DIR).join(name);
            path.exists().then_some(path)
        };

        Self {
            project: existing("config.yml"),
            project_local: existing("config.local.yml"),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project
            .iter()
            .chain(self.project_local.iter())
            .collect()
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })
}

fn parse_value(content: &str, source_path: &Path) -> Result<serde_yaml::Value> {
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a [`SetupConfig`].
///
/// Missing fields take their defaults; an empty document is the default
/// config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    let value = parse_value(content, source_path)?;
    serde_yaml::from_value(value).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Load the configuration for a project.
///
/// With `config_override`, only that file is loaded and it must exist.
/// Otherwise the project and local files are merged over the built-in
/// defaults; a project with neither gets [`SetupConfig::default`].
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<SetupConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config override {}", path.display());
        return load_config_file(path);
    }

    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();
    if existing.is_empty() {
        tracing::debug!("No config file found, using defaults");
        return Ok(SetupConfig::default());
    }

    let mut layers = Vec::new();
    for path in &existing {
        tracing::debug!("Loading config layer {}", path.display());
        let content = read_config(path)?;
        layers.push(parse_value(&content, path)?);
    }

    let merged = merge_configs(&layers);
    let source = existing[existing.len() - 1].clone();
    serde_yaml::from_value(merged).map_err(|e| SetupError::ConfigParseError {
        path: source,
        message: e.to_string(),
    })
}
