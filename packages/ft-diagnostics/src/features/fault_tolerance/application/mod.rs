//! Fault tolerance application layer

mod applicability;
mod participant;
pub mod rules;
mod validator;

pub use applicability::is_applicable;
pub use participant::FaultToleranceDiagnosticsParticipant;
pub use validator::{validate, ValidationPass};
