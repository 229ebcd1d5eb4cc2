//! Diagnostics application layer

mod context;

pub use context::JavaDiagnosticsContext;
