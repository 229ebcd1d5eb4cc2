use lsp_types::Diagnostic;

use super::{is_applicable, validate};
use crate::config::RulesConfig;
use crate::errors::Result;
use crate::features::diagnostics::{JavaDiagnosticsContext, JavaDiagnosticsParticipant};

/// Fault tolerance rules as a diagnostics participant
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultToleranceDiagnosticsParticipant {
    rules: RulesConfig,
}

impl FaultToleranceDiagnosticsParticipant {
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}

impl JavaDiagnosticsParticipant for FaultToleranceDiagnosticsParticipant {
    fn is_adapted_for_diagnostics(&self, context: &JavaDiagnosticsContext) -> Result<bool> {
        is_applicable(context.project())
    }

    fn collect_diagnostics(&self, context: &JavaDiagnosticsContext) -> Result<Vec<Diagnostic>> {
        Ok(validate(context, &self.rules))
    }
}
