//! Parsing Feature
//!
//! Turns a Java source file into an immutable `CompilationUnit`.
//!
//! ## Structure
//! - `domain/` - CompilationUnit, TypeDeclaration, MethodDeclaration, Annotation, TypeRef
//! - `ports/` - Parser trait
//! - `infrastructure/` - JavaParser (tree-sitter)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    Annotation, AnnotationKind, AnonymousClass, BodyDeclaration, CompilationUnit, Expression,
    ExpressionKind, ImportDecl, MemberValuePair, MethodDeclaration, TypeDeclaration, TypeId,
    TypeKind, TypeParameter, TypeRef, TypeRefKind,
};
pub use infrastructure::JavaParser;
pub use ports::Parser;
