//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! Every field has a default, so a project without any config file gets the
//! stock Joint-LEO bootstrap.
//!
//! # Example
//!
//! ```
//! use leo_setup::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".leo-setup");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "directories: [runs]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.directories, vec!["runs".to_string()]);
//! assert_eq!(config.manifest.to_str(), Some("requirements.txt"));
//! ```
//!
//! # Configuration File Locations
//!
//! Layers are merged in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`.leo-setup/config.yml`)
//! 3. Local overrides (`.leo-setup/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::{OutputMode, PackageSpec, SetupConfig};
pub use validator::{validate, validate_config, ValidationError};
