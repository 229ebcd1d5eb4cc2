//! Per-pass method name index
//!
//! Maps a type declaration to the simple names of the methods it declares
//! directly. Overloads collapse into one name; inherited methods are not
//! included. Each type is computed at most once per pass.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::features::parsing::{TypeDeclaration, TypeId};

#[derive(Debug, Default)]
pub struct MethodNameIndex {
    cache: HashMap<TypeId, HashSet<String>>,
    computations: usize,
}

impl MethodNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names_of(&mut self, ty: &TypeDeclaration) -> &HashSet<String> {
        match self.cache.entry(ty.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.computations += 1;
                entry.insert(ty.methods().map(|method| method.name.clone()).collect())
            }
        }
    }

    pub fn contains(&mut self, ty: &TypeDeclaration, method_name: &str) -> bool {
        self.names_of(ty).contains(method_name)
    }

    /// Number of types whose names were computed in this pass
    pub fn computed_types(&self) -> usize {
        self.computations
    }
}
