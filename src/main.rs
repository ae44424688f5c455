//! leo-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use leo_setup::cli::commands::{EXIT_CONFIG_ERROR, EXIT_STEP_FAILED};
use leo_setup::cli::{Cli, CommandContext, CommandDispatcher};
use leo_setup::shell::is_ci;
use leo_setup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never mix with `config --json` or completion
/// scripts on stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("leo_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leo_setup=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("leo-setup starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = match cli.project.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {}", e);
                return ExitCode::from(EXIT_CONFIG_ERROR as u8);
            }
        },
    };

    let is_interactive = !cli.non_interactive && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let context = CommandContext {
        project_root,
        config_override: cli.config.clone(),
        python: cli.python.clone(),
    };
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            let code = if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_STEP_FAILED
            };
            ExitCode::from(code as u8)
        }
    }
}
