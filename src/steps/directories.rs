//! Output directory creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::ui::UserInterface;

/// Ensure each directory exists under `project_root`.
///
/// Existing directories are left untouched, so running twice is harmless.
pub fn create_directories(
    project_root: &Path,
    directories: &[String],
    ui: &mut dyn UserInterface,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(directories.len());

    for name in directories {
        let path = project_root.join(name);
        fs::create_dir_all(&path).map_err(|source| SetupError::DirectoryCreation {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Ensured {}", path.display());
        if ui.output_mode().shows_details() {
            ui.success(&format!("Created {}/", name.trim_end_matches('/')));
        }
        created.push(path);
    }

    Ok(created)
}
