//! Post-install import checks.

use serde::Serialize;

use crate::config::PackageSpec;
use crate::error::Result;
use crate::python::Toolchain;
use crate::ui::UserInterface;

/// A package that imported successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedPackage {
    /// Module that was imported.
    pub module: String,
    /// Name shown to users.
    pub display_name: String,
    /// Reported `__version__`, or `unknown`.
    pub version: String,
}

/// Import each package in order and report its version.
///
/// Stops at the first package that fails to import.
pub fn verify_packages(
    toolchain: &dyn Toolchain,
    packages: &[PackageSpec],
    ui: &mut dyn UserInterface,
) -> Result<Vec<VerifiedPackage>> {
    let mut verified = Vec::with_capacity(packages.len());

    for package in packages {
        tracing::debug!("Importing {}", package.module);
        let version = toolchain.module_version(&package.module)?;
        if ui.output_mode().shows_details() {
            ui.success(&format!("{} {} installed", package.display(), version));
        }
        verified.push(VerifiedPackage {
            module: package.module.clone(),
            display_name: package.display().to_string(),
            version,
        });
    }

    ui.success("All dependencies verified successfully!");
    Ok(verified)
}
