//! Configuration system
//!
//! Versioned YAML configuration for the validator:
//!
//! ```yaml
//! version: 1
//! diagnostic_source: java
//! rules:
//!   fallback_method: true
//!   asynchronous_return_type: true
//! classpath:
//!   include_jdk: true
//!   types:
//!     - org.eclipse.microprofile.faulttolerance.Fallback
//!   source_roots:
//!     - src/main/java
//! ```
//!
//! Every section is optional; `ValidatorConfig::default()` enables both rules.

pub mod error;
pub mod validator_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use validator_config::{ClasspathConfig, RulesConfig, ValidatorConfig, SUPPORTED_VERSIONS};
