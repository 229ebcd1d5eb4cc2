//! Per-file diagnostics context
//!
//! Bundles what a participant needs from the host for one compilation unit:
//! document URI, parsed unit, project model, type resolver and the
//! offset → range converter. Lives for one diagnostics run.

use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Range, Url};

use crate::features::diagnostics::domain::JavaErrorCode;
use crate::features::parsing::CompilationUnit;
use crate::features::project_model::ProjectModel;
use crate::features::type_resolution::TypeResolver;
use crate::shared::constants::fault_tolerance::DIAGNOSTIC_SOURCE;
use crate::shared::models::Span;
use crate::shared::utils::line_index::LineIndex;

pub struct JavaDiagnosticsContext<'a> {
    uri: Url,
    unit: &'a CompilationUnit,
    project: &'a dyn ProjectModel,
    resolver: &'a dyn TypeResolver,
    line_index: LineIndex,
    source_tag: String,
}

impl<'a> JavaDiagnosticsContext<'a> {
    pub fn new(
        uri: Url,
        unit: &'a CompilationUnit,
        project: &'a dyn ProjectModel,
        resolver: &'a dyn TypeResolver,
    ) -> Self {
        Self {
            uri,
            line_index: LineIndex::new(&unit.source),
            unit,
            project,
            resolver,
            source_tag: DIAGNOSTIC_SOURCE.to_string(),
        }
    }

    /// Override the `source` tag carried by created diagnostics
    pub fn with_source_tag(mut self, source_tag: impl Into<String>) -> Self {
        self.source_tag = source_tag.into();
        self
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn ast_root(&self) -> &'a CompilationUnit {
        self.unit
    }

    pub fn project(&self) -> &'a dyn ProjectModel {
        self.project
    }

    pub fn resolver(&self) -> &'a dyn TypeResolver {
        self.resolver
    }

    pub fn to_range(&self, offset: usize, length: usize) -> Range {
        self.line_index.to_range(offset, length)
    }

    /// Error-severity diagnostic covering `span`
    pub fn create_diagnostic(
        &self,
        message: impl Into<String>,
        span: Span,
        code: &dyn JavaErrorCode,
    ) -> Diagnostic {
        Diagnostic {
            range: self.to_range(span.offset(), span.len()),
            severity: Some(DiagnosticSeverity::ERROR),
            code: Some(NumberOrString::String(code.code().to_string())),
            code_description: None,
            source: Some(self.source_tag.clone()),
            message: message.into(),
            related_information: None,
            tags: None,
            data: None,
        }
    }
}
