//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.

pub mod constants;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::Span;
pub use utils::line_index::LineIndex;
