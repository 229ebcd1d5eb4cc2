//! Diagnostics ports

mod participant;

pub use participant::JavaDiagnosticsParticipant;
