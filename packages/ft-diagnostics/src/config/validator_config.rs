//! Validator configuration (YAML schema v1)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::fault_tolerance::DIAGNOSTIC_SOURCE;

pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Schema version; required in files, always 1 for v1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// `source` tag of emitted diagnostics
    #[serde(default = "default_diagnostic_source")]
    pub diagnostic_source: String,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub classpath: ClasspathConfig,
}

/// Rule on/off switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// `@Fallback(fallbackMethod = ...)` must name a method of the type
    #[serde(default = "enabled")]
    pub fallback_method: bool,

    /// `@Asynchronous` methods must return Future, CompletionStage or Uni
    #[serde(default = "enabled")]
    pub asynchronous_return_type: bool,
}

/// Types the project can resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClasspathConfig {
    /// Seed the index with `java.lang` and common JDK types
    #[serde(default = "enabled")]
    pub include_jdk: bool,

    /// Extra fully-qualified type names (typically the library annotations)
    #[serde(default)]
    pub types: Vec<String>,

    /// Directories scanned for `.java` files; relative paths are resolved
    /// against the configuration file's directory
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,
}

fn enabled() -> bool {
    true
}

fn default_diagnostic_source() -> String {
    DIAGNOSTIC_SOURCE.to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            version: Some(1),
            diagnostic_source: default_diagnostic_source(),
            rules: RulesConfig::default(),
            classpath: ClasspathConfig::default(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fallback_method: true,
            asynchronous_return_type: true,
        }
    }
}

impl Default for ClasspathConfig {
    fn default() -> Self {
        Self {
            include_jdk: true,
            types: Vec::new(),
            source_roots: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        if let Some(base) = path.parent() {
            config.classpath.source_roots = config
                .classpath
                .source_roots
                .into_iter()
                .map(|root| if root.is_relative() { base.join(root) } else { root })
                .collect();
        }
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        match self.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        if !self.rules.fallback_method && !self.rules.asynchronous_return_type {
            return Err(ConfigError::NoRulesEnabled);
        }

        if self.diagnostic_source.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "diagnostic_source",
                "must not be empty",
            ));
        }

        if let Some(bad) = self
            .classpath
            .types
            .iter()
            .find(|name| name.is_empty() || name.split('.').any(str::is_empty))
        {
            return Err(ConfigError::invalid_value(
                "classpath.types",
                format!("'{}' is not a qualified type name", bad),
            ));
        }

        Ok(())
    }
}
