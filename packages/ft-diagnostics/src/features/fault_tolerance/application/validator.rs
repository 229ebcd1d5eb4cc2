//! Validation traversal
//!
//! One `ValidationPass` per compilation unit. Types are visited in pre-order:
//! a type-level `@Asynchronous` is applied to every method of the type first,
//! then body declarations are visited in source order (a method, then the
//! local classes and the anonymous classes declared in it; member types
//! recursively). Methods of an anonymous class are owned by the nearest named
//! enclosing type, so their fallback names resolve against that type.
//!
//! A method whose return type cannot be resolved is logged and skipped; the
//! rest of the unit is still validated.

use lsp_types::Diagnostic;
use tracing::{debug, warn};

use super::rules;
use crate::config::RulesConfig;
use crate::features::diagnostics::{DiagnosticSink, JavaDiagnosticsContext};
use crate::features::fault_tolerance::domain::{find_annotation, is_match_annotation, MethodNameIndex};
use crate::features::parsing::{BodyDeclaration, MethodDeclaration, TypeDeclaration};
use crate::features::type_resolution::TypeScope;
use crate::shared::constants::fault_tolerance::{ASYNCHRONOUS_ANNOTATION, FALLBACK_ANNOTATION};

/// Validate one compilation unit
pub fn validate(context: &JavaDiagnosticsContext, rules: &RulesConfig) -> Vec<Diagnostic> {
    ValidationPass::new(context, *rules).run()
}

/// Call-scoped traversal state: the method name index and the sink are
/// discarded when the pass ends.
pub struct ValidationPass<'c, 'a> {
    context: &'c JavaDiagnosticsContext<'a>,
    rules: RulesConfig,
    index: MethodNameIndex,
    sink: DiagnosticSink,
}

impl<'c, 'a> ValidationPass<'c, 'a> {
    pub fn new(context: &'c JavaDiagnosticsContext<'a>, rules: RulesConfig) -> Self {
        Self {
            context,
            rules,
            index: MethodNameIndex::new(),
            sink: DiagnosticSink::new(),
        }
    }

    pub fn run(mut self) -> Vec<Diagnostic> {
        let unit = self.context.ast_root();
        let mut enclosing = Vec::new();
        for ty in &unit.types {
            self.visit_type(ty, &mut enclosing);
        }

        debug!(
            file = %unit.file_path,
            diagnostics = self.sink.len(),
            indexed_types = self.index.computed_types(),
            "fault tolerance validation finished"
        );
        self.sink.into_vec()
    }

    fn visit_type(&mut self, ty: &'a TypeDeclaration, enclosing: &mut Vec<&'a TypeDeclaration>) {
        let unit = self.context.ast_root();
        enclosing.push(ty);

        if self.rules.asynchronous_return_type
            && find_annotation(&ty.annotations, ASYNCHRONOUS_ANNOTATION, unit).is_some()
        {
            for method in ty.methods() {
                self.check_asynchronous(method, enclosing);
            }
        }

        self.visit_body(&ty.body, ty, enclosing);
        enclosing.pop();
    }

    fn visit_body(
        &mut self,
        body: &'a [BodyDeclaration],
        owner: &'a TypeDeclaration,
        enclosing: &mut Vec<&'a TypeDeclaration>,
    ) {
        for decl in body {
            match decl {
                BodyDeclaration::Method(method) => {
                    self.visit_method(method, owner, enclosing);
                    for local in &method.local_types {
                        self.visit_type(local, enclosing);
                    }
                    for anonymous in &method.anonymous_classes {
                        self.visit_body(&anonymous.body, owner, enclosing);
                    }
                }
                BodyDeclaration::Type(member) => self.visit_type(member, enclosing),
                BodyDeclaration::Anonymous(anonymous) => {
                    self.visit_body(&anonymous.body, owner, enclosing)
                }
            }
        }
    }

    fn visit_method(
        &mut self,
        method: &'a MethodDeclaration,
        owner: &'a TypeDeclaration,
        enclosing: &[&'a TypeDeclaration],
    ) {
        let unit = self.context.ast_root();
        for annotation in &method.annotations {
            if self.rules.fallback_method && is_match_annotation(annotation, FALLBACK_ANNOTATION, unit) {
                if let Some(diagnostic) = rules::fallback_method_exists(
                    self.context,
                    method,
                    Some(owner),
                    annotation,
                    &mut self.index,
                ) {
                    self.sink.push(diagnostic);
                }
            } else if self.rules.asynchronous_return_type
                && is_match_annotation(annotation, ASYNCHRONOUS_ANNOTATION, unit)
            {
                self.check_asynchronous(method, enclosing);
            }
        }
    }

    fn check_asynchronous(&mut self, method: &'a MethodDeclaration, enclosing: &[&'a TypeDeclaration]) {
        let unit = self.context.ast_root();
        let scope = TypeScope::new(unit)
            .with_enclosing(enclosing.to_vec())
            .with_method_type_parameters(&method.type_parameters);

        match rules::asynchronous_return_type(self.context, method, &scope) {
            Ok(Some(diagnostic)) => self.sink.push(diagnostic),
            Ok(None) => {}
            Err(e) => {
                warn!(
                    file = %unit.file_path,
                    method = %method.name,
                    error = %e,
                    "cannot validate @Asynchronous return type, skipping method"
                );
            }
        }
    }
}
