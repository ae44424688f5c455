//! Check command implementation.
//!
//! `leo-setup check` runs the version check and import verification only.
//! Nothing is installed and no directories are created.

use crate::error::Result;
use crate::runner::BootstrapRunner;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::{EXIT_CONFIG_ERROR, EXIT_STEP_FAILED};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(config) => config,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        let toolchain = self.context.toolchain(&config);
        let runner = BootstrapRunner::new(&config, &toolchain, self.context.project_root());

        match runner.check(ui) {
            Ok(_) => Ok(CommandResult::success()),
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_STEP_FAILED))
            }
        }
    }
}
