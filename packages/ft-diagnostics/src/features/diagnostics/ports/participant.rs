use lsp_types::Diagnostic;

use crate::errors::Result;
use crate::features::diagnostics::application::JavaDiagnosticsContext;

/// A unit of validation plugged into the host's per-file diagnostics run
pub trait JavaDiagnosticsParticipant: Send + Sync {
    /// Cheap check whether this participant has anything to validate in the
    /// context's project. Errors are surfaced, never read as `false`.
    fn is_adapted_for_diagnostics(&self, context: &JavaDiagnosticsContext) -> Result<bool>;

    /// Diagnostics for the context's compilation unit, in traversal order
    fn collect_diagnostics(&self, context: &JavaDiagnosticsContext) -> Result<Vec<Diagnostic>>;
}
