//! Bootstrap orchestration.

pub mod bootstrap;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{BootstrapRunner, RunOptions, RunReport};
