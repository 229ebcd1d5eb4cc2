//! Compilation unit representation
//!
//! Read-only view of one parsed Java file: package, imports and the type
//! declarations with their methods and annotations. Body declarations keep
//! source order so a pre-order walk matches the file layout.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::annotation::Annotation;
use super::type_ref::TypeRef;
use crate::shared::models::Span;

/// Identity of a type declaration within one compilation unit.
/// Assigned in pre-order while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    /// `@interface`; its elements are not methods
    Annotation,
}

/// `import a.b.C;`, `import a.b.*;`, `import static a.b.C.m;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Dotted name without the trailing `.*`
    pub name: String,
    pub is_static: bool,
    pub on_demand: bool,
    pub span: Span,
}

impl ImportDecl {
    /// Simple name brought into scope by a single-type import
    pub fn simple_name(&self) -> Option<&str> {
        if self.on_demand {
            return None;
        }
        self.name.rsplit('.').next()
    }
}

/// `<T extends Bound>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    /// First bound only; it defines the erasure
    pub bound: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub file_path: String,
    pub source: String,
    pub package: Option<String>,
    pub imports: Vec<ImportDecl>,
    /// Top-level type declarations
    pub types: Vec<TypeDeclaration>,
    /// Whether tree-sitter reported syntax errors
    pub has_errors: bool,
    /// Simple name -> qualified names of every type declared in the unit
    declared_names: HashMap<String, Vec<String>>,
}

impl CompilationUnit {
    pub fn new(
        file_path: impl Into<String>,
        source: impl Into<String>,
        package: Option<String>,
        imports: Vec<ImportDecl>,
        types: Vec<TypeDeclaration>,
        has_errors: bool,
    ) -> Self {
        let mut unit = Self {
            file_path: file_path.into(),
            source: source.into(),
            package,
            imports,
            types,
            has_errors,
            declared_names: HashMap::new(),
        };

        let mut declared_names: HashMap<String, Vec<String>> = HashMap::new();
        for ty in unit.all_types() {
            declared_names
                .entry(ty.name.clone())
                .or_default()
                .push(ty.qualified_name.clone());
        }
        unit.declared_names = declared_names;
        unit
    }

    /// Every type declaration in pre-order, local types included
    pub fn all_types(&self) -> Vec<&TypeDeclaration> {
        let mut result = Vec::new();
        for ty in &self.types {
            ty.collect_pre_order(&mut result);
        }
        result
    }

    /// Qualified names of the types declared in this unit with `simple_name`
    pub fn declared_types_named<'s>(&'s self, simple_name: &str) -> impl Iterator<Item = &'s str> {
        self.declared_names
            .get(simple_name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Simple names imported by single-type, non-static imports
    pub fn single_type_import(&self, simple_name: &str) -> Option<&ImportDecl> {
        self.imports
            .iter()
            .filter(|import| !import.is_static)
            .find(|import| import.simple_name() == Some(simple_name))
    }

    /// Packages (or types) imported on demand with `.*`
    pub fn on_demand_imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.imports
            .iter()
            .filter(|import| import.on_demand && !import.is_static)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub id: TypeId,
    pub name: String,
    /// Package + nesting path; local types carry their simple name
    pub qualified_name: String,
    pub kind: TypeKind,
    pub is_local: bool,
    pub annotations: Vec<Annotation>,
    pub type_parameters: Vec<TypeParameter>,
    /// Methods and member types in source order
    pub body: Vec<BodyDeclaration>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyDeclaration {
    Method(MethodDeclaration),
    Type(TypeDeclaration),
    /// Anonymous class created in a field initializer, an initializer block
    /// or an enum constant
    Anonymous(AnonymousClass),
}

/// `new T() { ... }` or an enum constant body.
///
/// It has no name, so its methods belong to the nearest named enclosing type
/// when a method name is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousClass {
    /// Methods, member types and nested anonymous classes in source order
    pub body: Vec<BodyDeclaration>,
    pub span: Span,
}

impl TypeDeclaration {
    /// Methods (constructors included) directly declared on this type
    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Member types directly declared on this type
    pub fn member_types(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Type(ty) => Some(ty),
            _ => None,
        })
    }

    pub fn find_member_type(&self, name: &str) -> Option<&TypeDeclaration> {
        self.member_types().find(|ty| ty.name == name)
    }

    fn collect_pre_order<'a>(&'a self, out: &mut Vec<&'a TypeDeclaration>) {
        out.push(self);
        collect_body_pre_order(&self.body, out);
    }
}

fn collect_body_pre_order<'a>(body: &'a [BodyDeclaration], out: &mut Vec<&'a TypeDeclaration>) {
    for decl in body {
        match decl {
            BodyDeclaration::Type(ty) => ty.collect_pre_order(out),
            BodyDeclaration::Method(method) => {
                for local in &method.local_types {
                    local.collect_pre_order(out);
                }
                for anonymous in &method.anonymous_classes {
                    collect_body_pre_order(&anonymous.body, out);
                }
            }
            BodyDeclaration::Anonymous(anonymous) => collect_body_pre_order(&anonymous.body, out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub is_constructor: bool,
    /// `None` for constructors
    pub return_type: Option<TypeRef>,
    pub type_parameters: Vec<TypeParameter>,
    pub annotations: Vec<Annotation>,
    /// Local classes declared in the method body
    pub local_types: Vec<TypeDeclaration>,
    /// Anonymous classes created in the method body, outermost only
    pub anonymous_classes: Vec<AnonymousClass>,
    pub span: Span,
}
