//! Error types for som-config.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for som-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file: {0}")]
    #[diagnostic(code(som::config::read))]
    Read(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(code(som::config::toml))]
    ParseToml(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("Config validation error: {0}")]
    #[diagnostic(code(som::config::invalid))]
    Validation(String),
}
