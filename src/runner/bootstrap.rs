//! Sequencing of the bootstrap steps.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::SetupConfig;
use crate::error::Result;
use crate::python::{PythonVersion, Toolchain};
use crate::steps::{
    check_python_version, create_directories, install_dependencies, verify_packages,
    BootstrapStep, InstallOutcome, VerifiedPackage,
};
use crate::ui::{format_duration, UserInterface};

/// Options for a bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Skip the package manager even if the config enables it.
    pub skip_install: bool,
}

/// Runs the bootstrap steps in order, stopping at the first failure.
pub struct BootstrapRunner<'a> {
    config: &'a SetupConfig,
    toolchain: &'a dyn Toolchain,
    project_root: &'a Path,
}

/// What a successful run did.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Interpreter version that passed the check.
    pub python: PythonVersion,
    /// Install step outcome; `None` when the step was not part of the run.
    pub install: Option<InstallOutcome>,
    /// Packages verified, in order.
    pub packages: Vec<VerifiedPackage>,
    /// Directories ensured, as absolute paths.
    pub directories: Vec<PathBuf>,
    /// Wall-clock time for the run.
    #[serde(skip)]
    pub duration: Duration,
}

impl<'a> BootstrapRunner<'a> {
    /// Create a runner for the project at `project_root`.
    pub fn new(
        config: &'a SetupConfig,
        toolchain: &'a dyn Toolchain,
        project_root: &'a Path,
    ) -> Self {
        Self {
            config,
            toolchain,
            project_root,
        }
    }

    /// Steps performed by [`run`](Self::run).
    pub fn plan() -> [BootstrapStep; 4] {
        [
            BootstrapStep::VersionCheck,
            BootstrapStep::Install,
            BootstrapStep::Verify,
            BootstrapStep::Directories,
        ]
    }

    /// Steps performed by [`check`](Self::check).
    pub fn check_plan() -> [BootstrapStep; 2] {
        [BootstrapStep::VersionCheck, BootstrapStep::Verify]
    }

    /// Run the full bootstrap.
    ///
    /// Any step error is returned immediately; later steps do not run.
    pub fn run(&self, options: &RunOptions, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let start = Instant::now();
        let plan = Self::plan();
        let total = plan.len();

        ui.show_header(&format!("{} Setup", self.config.project_name));

        let mut python = None;
        let mut install = None;
        let mut packages = Vec::new();
        let mut directories = Vec::new();

        for (index, step) in plan.into_iter().enumerate() {
            ui.show_step(index + 1, total, step.title());
            tracing::debug!("Starting step {}", step);

            match step {
                BootstrapStep::VersionCheck => {
                    python = Some(self.version_check(ui)?);
                }
                BootstrapStep::Install => {
                    install = Some(self.install(options, ui)?);
                }
                BootstrapStep::Verify => {
                    packages = verify_packages(self.toolchain, &self.config.packages, ui)?;
                }
                BootstrapStep::Directories => {
                    directories =
                        create_directories(self.project_root, &self.config.directories, ui)?;
                }
            }
        }

        let duration = start.elapsed();
        tracing::debug!("Setup finished in {}", format_duration(duration));

        ui.success("Setup completed successfully!");
        ui.show_next_steps(&self.config.next_steps);
        ui.message("For more information, see README.md");

        Ok(RunReport {
            python: python.unwrap_or(self.config.min_python),
            install,
            packages,
            directories,
            duration,
        })
    }

    /// Check the interpreter and imports without changing anything.
    pub fn check(&self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let start = Instant::now();
        let plan = Self::check_plan();
        let total = plan.len();

        ui.show_header(&format!("{} Environment Check", self.config.project_name));

        let mut python = None;
        let mut packages = Vec::new();

        for (index, step) in plan.into_iter().enumerate() {
            ui.show_step(index + 1, total, step.title());
            match step {
                BootstrapStep::VersionCheck => python = Some(self.version_check(ui)?),
                BootstrapStep::Verify => {
                    packages = verify_packages(self.toolchain, &self.config.packages, ui)?;
                }
                BootstrapStep::Install | BootstrapStep::Directories => {}
            }
        }

        ui.success("Environment check passed");

        Ok(RunReport {
            python: python.unwrap_or(self.config.min_python),
            install: None,
            packages,
            directories: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn version_check(&self, ui: &mut dyn UserInterface) -> Result<PythonVersion> {
        check_python_version(self.toolchain, &self.config.min_python, ui)
    }

    fn install(&self, options: &RunOptions, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        if options.skip_install || !self.config.install {
            tracing::debug!(
                "Install skipped (flag: {}, config: {})",
                options.skip_install,
                !self.config.install
            );
            ui.warning("Skipping dependency installation");
            return Ok(InstallOutcome::Skipped);
        }

        install_dependencies(self.toolchain, self.project_root, &self.config.manifest, ui)?;
        Ok(InstallOutcome::Installed)
    }
}
