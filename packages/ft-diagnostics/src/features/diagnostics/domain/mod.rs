//! Diagnostics domain

mod error_code;
mod sink;

pub use error_code::JavaErrorCode;
pub use sink::DiagnosticSink;
