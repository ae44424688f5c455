//! Interpreter version check.

use crate::error::{Result, SetupError};
use crate::python::{PythonVersion, Toolchain};
use crate::ui::UserInterface;

/// Confirm the interpreter is at least `minimum`.
///
/// Has no side effects beyond running `<python> --version`.
pub fn check_python_version(
    toolchain: &dyn Toolchain,
    minimum: &PythonVersion,
    ui: &mut dyn UserInterface,
) -> Result<PythonVersion> {
    let found = toolchain.version()?;
    tracing::debug!("{} reports Python {}", toolchain.program(), found);

    if !found.satisfies(minimum) {
        return Err(SetupError::UnsupportedRuntime {
            found,
            required: *minimum,
        });
    }

    ui.success(&format!("Python {} detected", found.short()));
    Ok(found)
}
