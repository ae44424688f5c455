//! Dependency installation through the package manager.

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SetupError};
use crate::python::{OutputSink, Toolchain};
use crate::ui::{live_output_callback, UserInterface};

/// Lines of pip output kept beneath the spinner.
const LIVE_OUTPUT_LINES: usize = 3;

/// What happened to the install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    /// The package manager ran and succeeded.
    Installed,
    /// Installation was turned off by flag or config.
    Skipped,
}

/// Install every package listed in `manifest` (relative to `project_root`).
///
/// In verbose mode pip writes straight to the terminal; otherwise its
/// output is captured and the tail is shown under a spinner. Failures are
/// returned as [`SetupError::InstallFailed`] and not reported here.
pub fn install_dependencies(
    toolchain: &dyn Toolchain,
    project_root: &Path,
    manifest: &Path,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let manifest_path = project_root.join(manifest);
    if !manifest_path.is_file() {
        return Err(SetupError::ManifestNotFound {
            path: manifest_path,
        });
    }

    tracing::debug!(
        "Installing from {} with {}",
        manifest_path.display(),
        toolchain.program()
    );

    let result = if ui.output_mode().shows_command_output() {
        ui.message("Installing dependencies...");
        let result = toolchain.install(&manifest_path, OutputSink::Inherit)?;
        if result.success {
            ui.success("Dependencies installed successfully");
        }
        result
    } else {
        let base = "Installing dependencies...".to_string();
        let mut spinner = ui.start_spinner(&base);
        let sink = match spinner.progress_bar() {
            Some(bar) => OutputSink::Stream(live_output_callback(bar, base, LIVE_OUTPUT_LINES)),
            None => OutputSink::Capture,
        };
        let result = match toolchain.install(&manifest_path, sink) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };
        if result.success {
            spinner.finish_success("Dependencies installed successfully");
        } else {
            spinner.finish_and_clear();
        }
        result
    };

    if !result.success {
        if !result.stderr.trim().is_empty() {
            tracing::debug!("pip stderr:\n{}", result.stderr.trim_end());
        }
        return Err(SetupError::InstallFailed {
            manifest: manifest.to_path_buf(),
            code: result.exit_code,
        });
    }

    tracing::debug!("pip finished in {:?}", result.duration);
    Ok(())
}
