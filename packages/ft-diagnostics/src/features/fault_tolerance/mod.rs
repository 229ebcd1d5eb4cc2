//! Fault Tolerance Feature
//!
//! Validates MicroProfile Fault Tolerance annotations on Java types:
//! - `@Fallback(fallbackMethod = "...")` must name a method declared on the
//!   enclosing type
//! - `@Asynchronous` methods (or every method of an `@Asynchronous` type)
//!   must return `Future`, `CompletionStage` or `Uni`
//!
//! ## Structure
//! - `domain/` - FaultToleranceErrorCode, annotation matching, MethodNameIndex
//! - `application/` - applicability gate, rules, ValidationPass, participant

pub mod application;
pub mod domain;

pub use application::{
    is_applicable, validate, FaultToleranceDiagnosticsParticipant, ValidationPass,
};
pub use domain::{FaultToleranceErrorCode, MethodNameIndex};
