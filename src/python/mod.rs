//! Python interpreter access.
//!
//! - [`version`] parses and compares interpreter versions
//! - [`toolchain`] defines the [`Toolchain`] seam the bootstrap steps talk
//!   to, and [`PythonToolchain`], which drives a real interpreter

pub mod toolchain;
pub mod version;

pub use toolchain::{default_interpreter, OutputSink, PythonToolchain, Toolchain};
pub use version::PythonVersion;
