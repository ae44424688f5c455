//! Subprocess execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_quiet, execute_streaming, CommandOptions, CommandResult, OutputCallback,
    OutputLine,
};
pub use platform::is_ci;
