//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use crate::errors::Result;
use crate::features::parsing::domain::CompilationUnit;

/// Parser trait - abstraction over parsing implementation
pub trait Parser: Send + Sync {
    /// Parse source code into a CompilationUnit
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}
