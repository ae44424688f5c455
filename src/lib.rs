//! leo-setup - Environment bootstrap for the Joint-LEO project.
//!
//! Prepares a Python environment for training and evaluation in four
//! steps, stopping at the first failure:
//!
//! 1. Check the interpreter is new enough
//! 2. Install dependencies from `requirements.txt`
//! 3. Verify the core packages import and report their versions
//! 4. Create the output directories
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter versions and subprocess access
//! - [`runner`] - Step sequencing
//! - [`shell`] - Process execution
//! - [`steps`] - The individual bootstrap steps
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use leo_setup::python::PythonVersion;
//!
//! let found = PythonVersion::from_banner("Python 3.8.10").unwrap();
//! assert!(found.satisfies(&PythonVersion::new(3, 7)));
//! assert_eq!(found.short(), "3.8");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};
