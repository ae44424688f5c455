//! Config command implementation.
//!
//! `leo-setup config` shows the resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, validate_config, ConfigPaths};
use crate::error::{Result, SetupError};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::EXIT_CONFIG_ERROR;

/// The config command implementation.
pub struct ConfigCommand {
    context: CommandContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: CommandContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.context.project_root();
        let override_path = self.context.config_override.as_deref();

        let config = match load_config(root, override_path) {
            Ok(config) => config,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        if !self.args.json {
            match override_path {
                Some(path) => ui.message(&format!("# {}", path.display())),
                None => {
                    let paths = ConfigPaths::discover(root);
                    let existing = paths.all_existing();
                    if existing.is_empty() {
                        ui.message("# built-in defaults");
                    }
                    for path in existing {
                        ui.message(&format!("# {}", path.display()));
                    }
                }
            }
        }

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).map_err(|e| SetupError::Other(e.into()))?
        } else {
            serde_yaml::to_string(&config).map_err(|e| SetupError::Other(e.into()))?
        };
        ui.message(rendered.trim_end());

        let problems = validate_config(&config);
        if problems.is_empty() {
            return Ok(CommandResult::success());
        }

        for problem in &problems {
            ui.error(&format!("[{}] {}", problem.rule, problem.message));
        }
        Ok(CommandResult::failure(EXIT_CONFIG_ERROR))
    }
}
