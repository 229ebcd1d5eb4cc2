//! Usecase Layer - File-level validation entry points
//!
//! Wires the parser, classpath index, type resolver and fault tolerance
//! participant into one service callable by:
//! - the `ftcheck` CLI
//! - editors or build tools embedding the library

pub mod diagnostics_service;

// Re-export main API
pub use diagnostics_service::{BatchReport, DiagnosticsService, FileFailure, FileReport};
