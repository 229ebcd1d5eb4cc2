//! Error types for ft-diagnostics
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for ft-diagnostics operations
#[derive(Debug, Error)]
pub enum FtError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A type reference could not be resolved to a qualified name
    #[error("Cannot resolve type '{name}': {reason}")]
    Resolution { name: String, reason: String },

    /// The project model could not answer a type lookup
    #[error("Project model unavailable: {0}")]
    ProjectModel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FtError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        FtError::Parse(msg.into())
    }

    /// Create a resolution error
    pub fn resolution(name: impl Into<String>, reason: impl Into<String>) -> Self {
        FtError::Resolution {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a project model error
    pub fn project_model(msg: impl Into<String>) -> Self {
        FtError::ProjectModel(msg.into())
    }
}

/// Result type alias for ft-diagnostics operations
pub type Result<T> = std::result::Result<T, FtError>;
