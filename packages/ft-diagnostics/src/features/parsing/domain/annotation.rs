//! Annotations and their member values
//!
//! Marker (`@A`), single-member (`@A("x")`) and normal (`@A(k = "x")`)
//! annotations share one representation. A single-member annotation stores
//! its value under the implicit member name `value`.

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Implicit member name of a single-member annotation
pub const VALUE_MEMBER: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    Marker,
    SingleMember,
    Normal,
}

/// Annotation attached to a type or method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Name as written in source (`Fallback` or `org.x.Fallback`)
    pub name: String,
    pub kind: AnnotationKind,
    pub members: Vec<MemberValuePair>,
    pub span: Span,
}

impl Annotation {
    pub fn marker(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: AnnotationKind::Marker,
            members: Vec::new(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last segment of the written name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is_qualified(&self) -> bool {
        self.name.contains('.')
    }

    /// Value expression of the member `name`, if the annotation carries it
    pub fn member_value(&self, name: &str) -> Option<&Expression> {
        self.members
            .iter()
            .find(|pair| pair.name == name)
            .map(|pair| &pair.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberValuePair {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionKind {
    StringLiteral,
    Other,
}

/// Annotation member value expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    /// Source text, quotes included for string literals
    pub text: String,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Literal text with the surrounding quote characters removed.
    /// Escape sequences are left as written.
    pub fn string_literal_value(&self) -> Option<&str> {
        if self.kind != ExpressionKind::StringLiteral {
            return None;
        }
        let mut chars = self.text.char_indices();
        let (_, first) = chars.next()?;
        let (last_idx, _) = chars.next_back()?;
        Some(&self.text[first.len_utf8()..last_idx])
    }
}
