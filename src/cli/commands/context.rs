//! State shared by every command.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, SetupConfig};
use crate::error::Result;
use crate::python::PythonToolchain;
use crate::ui::{OutputMode, UserInterface};

/// Where the project lives and how it was asked to be set up.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root; relative config paths resolve against it.
    pub project_root: PathBuf,
    /// Explicit config file from `--config`.
    pub config_override: Option<PathBuf>,
    /// Interpreter from `--python` or `LEO_SETUP_PYTHON`.
    pub python: Option<String>,
}

impl CommandContext {
    /// Context for `project_root` with no overrides.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_override: None,
            python: None,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the configuration.
    ///
    /// Also applies the configured `default_output` when no output flag was
    /// given.
    pub fn load_config(&self, ui: &mut dyn UserInterface) -> Result<SetupConfig> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;

        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.default_output {
                ui.set_output_mode(mode.into());
            }
        }

        Ok(config)
    }

    /// Build the interpreter toolchain.
    ///
    /// The command line wins over the config file, which wins over the
    /// platform default.
    pub fn toolchain(&self, config: &SetupConfig) -> PythonToolchain {
        let program = self
            .python
            .as_deref()
            .unwrap_or_else(|| config.interpreter_program());
        tracing::debug!("Using interpreter {}", program);
        PythonToolchain::new(program, &self.project_root)
    }
}
