//! Run command implementation.
//!
//! `leo-setup run` performs the full bootstrap.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::runner::{BootstrapRunner, RunOptions};
use crate::ui::{format_duration, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::{EXIT_CONFIG_ERROR, EXIT_STEP_FAILED};

/// The run command implementation.
pub struct RunCommand {
    context: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(context: CommandContext, args: RunArgs) -> Self {
        Self { context, args }
    }
}

impl Command for RunCommand {
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
        let options = RunOptions {
            skip_install: self.args.skip_install,
        };

        match runner.run(&options, ui) {
            Ok(report) => {
                tracing::info!(
                    "Setup finished in {} with Python {}",
                    format_duration(report.duration),
                    report.python
                );
                Ok(CommandResult::success())
            }
            Err(e) => {
                tracing::debug!("Setup stopped: {:?}", e);
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_STEP_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_override_exits_with_config_error() {
        let temp = TempDir::new().unwrap();
        let mut context = CommandContext::new(temp.path());
        context.config_override = Some(temp.path().join("missing.yml"));
        let mut ui = MockUI::new();

        let result = RunCommand::new(context, RunArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
        assert!(ui.has_error("Configuration not found"));
    }

    #[test]
    fn missing_interpreter_fails_the_run() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();
        let mut context = CommandContext::new(temp.path());
        context.python = Some("leo-setup-no-such-python".to_string());
        let mut ui = MockUI::new();

        let result = RunCommand::new(context, RunArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, EXIT_STEP_FAILED);
        assert!(ui.has_error("leo-setup-no-such-python"));
        assert!(!temp.path().join("results").exists());
    }
}
