//! Errors produced while loading an `elab.toml` configuration.

/// An error loading or validating an [`ElabConfig`](crate::types::ElabConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read from disk.
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file's TOML was malformed.
    #[error("could not parse config: {0}")]
    Parse(String),
    /// A required field was missing.
    #[error("missing required field: {0}")]
    MissingField(String),
}
