//! Diagnostics Feature
//!
//! Host-side plumbing shared by diagnostics participants: the per-file
//! context (URI, parsed unit, project model, offset → range conversion), the
//! ordered sink and the participant contract.
//!
//! ## Structure
//! - `domain/` - DiagnosticSink, JavaErrorCode
//! - `ports/` - JavaDiagnosticsParticipant trait
//! - `application/` - JavaDiagnosticsContext

pub mod application;
pub mod domain;
pub mod ports;

pub use application::JavaDiagnosticsContext;
pub use domain::{DiagnosticSink, JavaErrorCode};
pub use ports::JavaDiagnosticsParticipant;
