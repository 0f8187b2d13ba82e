//! Parsing and validation of `elab.toml` run configuration.
//!
//! Selects the name-ordering mode, the gate library to instantiate
//! against, and an optional top-entity override for one elaboration run.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{ElabConfig, NameMode};
