//! The bootstrap steps.
//!
//! Each step is a plain function returning [`Result`](crate::Result); none
//! of them exit the process. [`BootstrapRunner`](crate::runner::BootstrapRunner)
//! sequences them and stops at the first error.
//!
//! - [`check_python_version`] - interpreter is new enough
//! - [`install_dependencies`] - `pip install -r <manifest>`
//! - [`verify_packages`] - required modules import
//! - [`create_directories`] - output directories exist

pub mod directories;
pub mod install;
pub mod verify;
pub mod version_check;

pub use directories::create_directories;
pub use install::{install_dependencies, InstallOutcome};
pub use verify::{verify_packages, VerifiedPackage};
pub use version_check::check_python_version;

use std::fmt;

/// One of the bootstrap steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    VersionCheck,
    Install,
    Verify,
    Directories,
}

impl BootstrapStep {
    /// Title shown when the step starts.
    pub fn title(self) -> &'static str {
        match self {
            Self::VersionCheck => "Checking Python version",
            Self::Install => "Installing dependencies",
            Self::Verify => "Verifying installation",
            Self::Directories => "Creating directories",
        }
    }
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VersionCheck => "version-check",
            Self::Install => "install",
            Self::Verify => "verify",
            Self::Directories => "directories",
        };
        f.write_str(name)
    }
}
