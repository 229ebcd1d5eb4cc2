//! Parsing domain models

mod annotation;
mod compilation_unit;
mod type_ref;

pub use annotation::{
    Annotation, AnnotationKind, Expression, ExpressionKind, MemberValuePair, VALUE_MEMBER,
};
pub use compilation_unit::{
    AnonymousClass, BodyDeclaration, CompilationUnit, ImportDecl, MethodDeclaration,
    TypeDeclaration, TypeId, TypeKind, TypeParameter,
};
pub use type_ref::{TypeRef, TypeRefKind};
