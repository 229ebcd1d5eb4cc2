//! Custom assertions for diagnostics verification

use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};
use pretty_assertions::assert_eq;

pub const FALLBACK_METHOD_DOES_NOT_EXIST: &str = "FALLBACK_METHOD_DOES_NOT_EXIST";
pub const FAULT_TOLERANCE_DEFINITION_EXCEPTION: &str = "FAULT_TOLERANCE_DEFINITION_EXCEPTION";

pub const ASYNCHRONOUS_MESSAGE: &str =
    "The annotated method does not return an object of type Future, CompletionStage or Uni";

pub fn fallback_message(name: &str) -> String {
    format!("The referenced fallback method '{name}' does not exist")
}

/// Range of `len` characters starting at the unique occurrence of `anchor`
/// (ASCII sources only)
pub fn range_at(source: &str, anchor: &str, len: u32) -> Range {
    assert_eq!(
        source.matches(anchor).count(),
        1,
        "anchor {anchor:?} must occur exactly once"
    );
    let offset = source.find(anchor).unwrap();
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let character = (offset - line_start) as u32;
    Range::new(
        Position::new(line, character),
        Position::new(line, character + len),
    )
}

/// Range of the string literal `"literal"`, quotes included
pub fn literal_range(source: &str, literal: &str) -> Range {
    range_at(source, &format!("\"{literal}\""), literal.len() as u32 + 2)
}

/// Expected diagnostic: Error severity, `java` source
pub fn d(range: Range, message: impl Into<String>, code: &str) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(DiagnosticSeverity::ERROR),
        code: Some(NumberOrString::String(code.to_string())),
        code_description: None,
        source: Some("java".to_string()),
        message: message.into(),
        related_information: None,
        tags: None,
        data: None,
    }
}

/// Assert diagnostics match exactly, in order
pub fn assert_java_diagnostics(actual: &[Diagnostic], expected: &[Diagnostic]) {
    assert_eq!(actual, expected);
}

/// Assert the codes of `actual`, in order
pub fn assert_codes(actual: &[Diagnostic], expected: &[&str]) {
    let codes: Vec<String> = actual
        .iter()
        .map(|d| match &d.code {
            Some(NumberOrString::String(code)) => code.clone(),
            other => format!("{other:?}"),
        })
        .collect();
    assert_eq!(codes, expected);
}
