//! Import-based type resolution
//!
//! Resolves names the way the Java compiler scopes them, without building a
//! full symbol table:
//! 1. type variables (erasure is the first bound, else `java.lang.Object`)
//! 2. enclosing types and their member types, then top-level types of the unit
//! 3. single-type imports
//! 4. types of the same package known to the project
//! 5. on-demand imports known to the project
//! 6. `java.lang`

use crate::errors::{FtError, Result};
use crate::features::parsing::{TypeRef, TypeRefKind};
use crate::features::project_model::ProjectModel;
use crate::features::type_resolution::ports::{TypeResolver, TypeScope};
use crate::shared::constants::java::{JAVA_LANG_OBJECT, JAVA_LANG_PACKAGE, JAVA_LANG_TYPES};

/// Bounds chains deeper than this are treated as unresolvable
const MAX_BOUND_DEPTH: usize = 16;

pub struct ImportTypeResolver<'p> {
    project: &'p dyn ProjectModel,
}

impl<'p> ImportTypeResolver<'p> {
    pub fn new(project: &'p dyn ProjectModel) -> Self {
        Self { project }
    }

    fn erase(&self, ty: &TypeRef, scope: &TypeScope, depth: usize) -> Result<String> {
        if depth > MAX_BOUND_DEPTH {
            return Err(FtError::resolution(&ty.text, "type variable bounds too deep"));
        }

        match &ty.kind {
            TypeRefKind::Void => Ok("void".to_string()),
            TypeRefKind::Primitive(name) => Ok(name.clone()),
            TypeRefKind::Array(element) => {
                Ok(format!("{}[]", self.erase(element, scope, depth)?))
            }
            TypeRefKind::Named(segments) => match segments.as_slice() {
                [] => Err(FtError::resolution(&ty.text, "empty type name")),
                [name] => {
                    if let Some(param) = scope.type_variable(name) {
                        return match &param.bound {
                            Some(bound) => self.erase(bound, scope, depth + 1),
                            None => Ok(JAVA_LANG_OBJECT.to_string()),
                        };
                    }
                    self.resolve_simple_name(name, scope)?.ok_or_else(|| {
                        FtError::resolution(name.as_str(), "not declared, imported or known to the project")
                    })
                }
                [first, rest @ ..] => {
                    // `Map.Entry` when `Map` is in scope, otherwise a qualified name
                    match self.resolve_simple_name(first, scope)? {
                        Some(outer) => Ok(format!("{}.{}", outer, rest.join("."))),
                        None => Ok(segments.join(".")),
                    }
                }
            },
        }
    }

    /// `Ok(None)` when the name is simply not in scope; `Err` only when the
    /// project model fails to answer.
    fn resolve_simple_name(&self, name: &str, scope: &TypeScope) -> Result<Option<String>> {
        for ty in scope.enclosing.iter().rev() {
            if ty.name == name {
                return Ok(Some(ty.qualified_name.clone()));
            }
            if let Some(member) = ty.find_member_type(name) {
                return Ok(Some(member.qualified_name.clone()));
            }
        }

        if let Some(ty) = scope.unit.types.iter().find(|ty| ty.name == name) {
            return Ok(Some(ty.qualified_name.clone()));
        }

        if let Some(import) = scope.unit.single_type_import(name) {
            return Ok(Some(import.name.clone()));
        }

        let same_package = match &scope.unit.package {
            Some(package) => format!("{}.{}", package, name),
            None => name.to_string(),
        };
        if self.project.contains_type(&same_package)? {
            return Ok(Some(same_package));
        }

        for import in scope.unit.on_demand_imports() {
            let candidate = format!("{}.{}", import.name, name);
            if self.project.contains_type(&candidate)? {
                return Ok(Some(candidate));
            }
        }

        let java_lang = format!("{}.{}", JAVA_LANG_PACKAGE, name);
        if JAVA_LANG_TYPES.contains(&name) || self.project.contains_type(&java_lang)? {
            return Ok(Some(java_lang));
        }

        Ok(None)
    }
}

impl TypeResolver for ImportTypeResolver<'_> {
    fn erasure(&self, ty: &TypeRef, scope: &TypeScope) -> Result<String> {
        self.erase(ty, scope, 0)
    }
}
