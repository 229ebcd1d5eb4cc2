//! Fault tolerance validation rules
//!
//! Each rule maps one annotated method to zero or one diagnostic.

use lsp_types::Diagnostic;
use tracing::debug;

use crate::errors::Result;
use crate::features::diagnostics::JavaDiagnosticsContext;
use crate::features::fault_tolerance::domain::annotation_matcher::annotation_member_value;
use crate::features::fault_tolerance::domain::{FaultToleranceErrorCode, MethodNameIndex};
use crate::features::parsing::{Annotation, MethodDeclaration, TypeDeclaration};
use crate::features::type_resolution::TypeScope;
use crate::shared::constants::async_types::ACCEPTED_RETURN_TYPES;
use crate::shared::constants::fault_tolerance::FALLBACK_METHOD_FALLBACK_ANNOTATION_MEMBER;

pub const ASYNCHRONOUS_RETURN_TYPE_MESSAGE: &str =
    "The annotated method does not return an object of type Future, CompletionStage or Uni";

pub fn fallback_method_does_not_exist_message(name: &str) -> String {
    format!("The referenced fallback method '{}' does not exist", name)
}

/// `@Fallback(fallbackMethod = "x")` requires a method named `x` on `owner`.
///
/// Any signature satisfies the rule. Without an owner the set of known names
/// is empty, so every reference is reported.
pub fn fallback_method_exists(
    context: &JavaDiagnosticsContext,
    method: &MethodDeclaration,
    owner: Option<&TypeDeclaration>,
    annotation: &Annotation,
    index: &mut MethodNameIndex,
) -> Option<Diagnostic> {
    let expression = annotation_member_value(annotation, FALLBACK_METHOD_FALLBACK_ANNOTATION_MEMBER)?;

    let Some(fallback_name) = expression.string_literal_value() else {
        debug!(
            method = %method.name,
            value = %expression.text,
            "fallbackMethod is not a string literal, skipping"
        );
        return None;
    };

    let exists = match owner {
        Some(ty) => index.contains(ty, fallback_name),
        None => false,
    };
    if exists {
        return None;
    }

    Some(context.create_diagnostic(
        fallback_method_does_not_exist_message(fallback_name),
        expression.span,
        &FaultToleranceErrorCode::FallbackMethodDoesNotExist,
    ))
}

/// `@Asynchronous` methods must return `Future`, `CompletionStage` or `Uni`.
///
/// The return type is compared by erasure. Constructors are never reported.
/// A return type that cannot be resolved is an error for the caller.
pub fn asynchronous_return_type(
    context: &JavaDiagnosticsContext,
    method: &MethodDeclaration,
    scope: &TypeScope,
) -> Result<Option<Diagnostic>> {
    let Some(return_type) = &method.return_type else {
        return Ok(None);
    };

    let erasure = context.resolver().erasure(return_type, scope)?;
    if ACCEPTED_RETURN_TYPES.contains(&erasure.as_str()) {
        return Ok(None);
    }

    Ok(Some(context.create_diagnostic(
        ASYNCHRONOUS_RETURN_TYPE_MESSAGE,
        return_type.span,
        &FaultToleranceErrorCode::FaultToleranceDefinitionException,
    )))
}
