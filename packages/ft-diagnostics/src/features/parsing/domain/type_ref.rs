//! Type references as written in source

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Syntactic shape of a type reference, generic arguments already dropped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRefKind {
    Void,
    Primitive(String),
    /// Dotted name segments (`["java", "util", "List"]` or `["Map", "Entry"]`)
    Named(Vec<String>),
    Array(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub kind: TypeRefKind,
    /// Full source text including generic arguments
    pub text: String,
    pub span: Span,
}

impl TypeRef {
    pub fn new(kind: TypeRefKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeRefKind::Void)
    }

    /// Raw name with generic arguments stripped (`Future<String>` -> `Future`)
    pub fn raw_name(&self) -> String {
        match &self.kind {
            TypeRefKind::Void => "void".to_string(),
            TypeRefKind::Primitive(name) => name.clone(),
            TypeRefKind::Named(segments) => segments.join("."),
            TypeRefKind::Array(element) => format!("{}[]", element.raw_name()),
        }
    }
}
