//! Annotation name matching
//!
//! An annotation written `@org.x.Fallback` matches only that qualified name.
//! One written `@Fallback` matches when the simple name agrees and nothing in
//! the unit binds `Fallback` to a different type: a single-type import or a
//! type declared in the same file.

use crate::features::parsing::{Annotation, CompilationUnit, Expression};

pub fn is_match_annotation(annotation: &Annotation, qualified_name: &str, unit: &CompilationUnit) -> bool {
    if annotation.is_qualified() {
        return annotation.name() == qualified_name;
    }

    let simple_name = annotation.simple_name();
    if qualified_name.rsplit('.').next() != Some(simple_name) {
        return false;
    }

    if let Some(import) = unit.single_type_import(simple_name) {
        return import.name == qualified_name;
    }

    !unit
        .declared_types_named(simple_name)
        .any(|declared| declared != qualified_name)
}

/// First annotation in `annotations` matching `qualified_name`
pub fn find_annotation<'a>(
    annotations: &'a [Annotation],
    qualified_name: &str,
    unit: &CompilationUnit,
) -> Option<&'a Annotation> {
    annotations
        .iter()
        .find(|annotation| is_match_annotation(annotation, qualified_name, unit))
}

/// Value expression of `member` on `annotation`; `None` when absent
pub fn annotation_member_value<'a>(annotation: &'a Annotation, member: &str) -> Option<&'a Expression> {
    annotation.member_value(member)
}
