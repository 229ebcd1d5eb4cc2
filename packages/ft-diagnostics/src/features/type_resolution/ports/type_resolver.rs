use crate::errors::Result;
use crate::features::parsing::{CompilationUnit, TypeDeclaration, TypeParameter, TypeRef};

/// Lexical context a type reference is resolved in
#[derive(Debug, Clone)]
pub struct TypeScope<'a> {
    pub unit: &'a CompilationUnit,
    /// Enclosing type declarations, outermost first
    pub enclosing: Vec<&'a TypeDeclaration>,
    /// Type parameters of the method owning the reference
    pub method_type_parameters: &'a [TypeParameter],
}

impl<'a> TypeScope<'a> {
    pub fn new(unit: &'a CompilationUnit) -> Self {
        Self {
            unit,
            enclosing: Vec::new(),
            method_type_parameters: &[],
        }
    }

    pub fn with_enclosing(mut self, enclosing: Vec<&'a TypeDeclaration>) -> Self {
        self.enclosing = enclosing;
        self
    }

    pub fn with_method_type_parameters(mut self, params: &'a [TypeParameter]) -> Self {
        self.method_type_parameters = params;
        self
    }

    /// Innermost declaration of a type variable named `name`
    pub fn type_variable(&self, name: &str) -> Option<&'a TypeParameter> {
        let method_params = self.method_type_parameters.iter();
        let type_params = self
            .enclosing
            .iter()
            .rev()
            .flat_map(|ty| ty.type_parameters.iter());
        method_params.chain(type_params).find(|param| param.name == name)
    }
}

/// Resolves type references to erased, fully-qualified names
/// (`CompletionStage<String>` -> `java.util.concurrent.CompletionStage`).
pub trait TypeResolver: Send + Sync {
    fn erasure(&self, ty: &TypeRef, scope: &TypeScope) -> Result<String>;
}
