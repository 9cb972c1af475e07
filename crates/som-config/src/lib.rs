//! Project configuration for the som toolchain.
//!
//! This crate provides the `som.toml` format and its loading rules.
//!
//! # Example
//!
//! ```toml
//! # som.toml
//! [project]
//! name = "answer"
//!
//! [arithmetic]
//! overflow = "checked"   # or "wrapping" (default)
//! ```

mod config;
mod error;

pub use config::{ArithmeticConfig, ProjectConfig, SomConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, Result};
