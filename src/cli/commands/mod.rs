//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands report failures through the UI and an
//! exit code instead of returning errors:
//!
//! - `0` - success
//! - `1` - a bootstrap step failed
//! - `2` - the configuration could not be loaded or is invalid

pub mod check;
pub mod completions;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod run;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Exit code for a failed bootstrap step.
pub const EXIT_STEP_FAILED: i32 = 1;

/// Exit code for configuration problems.
pub const EXIT_CONFIG_ERROR: i32 = 2;
