//! Configuration types (som.toml format).

use serde::{Deserialize, Serialize};
use som_runtime::OverflowPolicy;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// File name looked up by [`SomConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "som.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SomConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Arithmetic settings.
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,
}

/// Project metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name (optional).
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithmeticConfig {
    /// Overflow behavior of `S32_ADD`/`S32_MUL` (wrapping or checked).
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl SomConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SomConfig = content.parse()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `som.toml` from `dir` if it exists, otherwise use defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.project.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "project.name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Replace the overflow policy, e.g. from a command-line override.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.arithmetic.overflow = overflow;
        self
    }
}

impl FromStr for SomConfig {
    type Err = ConfigError;

    /// Parse and validate configuration text.
    fn from_str(s: &str) -> Result<Self> {
        let config: SomConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[project]
name = "answer"

[arithmetic]
overflow = "checked"
        "#;

        let config: SomConfig = toml.parse().unwrap();

        assert_eq!(config.project.name, Some("answer".to_string()));
        assert_eq!(config.arithmetic.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SomConfig = "".parse().unwrap();
        assert_eq!(config, SomConfig::default());
        assert_eq!(config.arithmetic.overflow, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = "[output]\nradix = 16".parse::<SomConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml(_)));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = "[arithmetic]\noverflow = \"saturating\""
            .parse::<SomConfig>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml(_)));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[arithmetic]\noverflw = \"checked\""
            .parse::<SomConfig>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml(_)));
    }

    #[test]
    fn test_blank_project_name_rejected() {
        let err = "[project]\nname = \"  \"".parse::<SomConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_with_overflow_overrides() {
        let config = SomConfig::default().with_overflow(OverflowPolicy::Checked);
        assert_eq!(config.arithmetic.overflow, OverflowPolicy::Checked);
    }
}
