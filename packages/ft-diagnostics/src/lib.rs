/*
 * ft-diagnostics - MicroProfile Fault Tolerance annotation diagnostics
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, LineIndex, constants)
 * - features/    : Vertical slices (parsing → project_model → type_resolution
 *                  → diagnostics → fault_tolerance)
 * - usecases/    : File and batch validation
 * - config/      : Versioned YAML configuration
 *
 * Rules:
 * - @Fallback(fallbackMethod = "x") must name a method of the enclosing type
 * - @Asynchronous methods must return Future, CompletionStage or Uni
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_lifetimes)] // Explicit lifetimes for clarity

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;
pub mod usecases;

pub use config::ValidatorConfig;
pub use errors::{FtError, Result};
pub use features::diagnostics::{JavaDiagnosticsContext, JavaDiagnosticsParticipant};
pub use features::fault_tolerance::{
    is_applicable, validate, FaultToleranceDiagnosticsParticipant, FaultToleranceErrorCode,
};
pub use usecases::{BatchReport, DiagnosticsService, FileReport};
