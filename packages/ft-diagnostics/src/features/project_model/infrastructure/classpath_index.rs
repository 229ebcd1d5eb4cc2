//! Classpath index
//!
//! A flat set of fully-qualified type names. Seeded with well-known JDK
//! types, extended from configuration and from the type declarations found
//! under source roots.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::Result;
use crate::features::parsing::{CompilationUnit, JavaParser, Parser};
use crate::features::project_model::ports::ProjectModel;
use crate::shared::constants::java::{JAVA_LANG_PACKAGE, JAVA_LANG_TYPES, JDK_TYPES};

#[derive(Debug, Clone, Default)]
pub struct ClasspathIndex {
    types: HashSet<String>,
}

impl ClasspathIndex {
    /// Empty index: resolves nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Index pre-populated with `java.lang` and common JDK types
    pub fn with_jdk_types() -> Self {
        let mut index = Self::new();
        index.extend(
            JAVA_LANG_TYPES
                .iter()
                .map(|name| format!("{}.{}", JAVA_LANG_PACKAGE, name)),
        );
        index.extend(JDK_TYPES.iter().map(|name| name.to_string()));
        index
    }

    pub fn register(&mut self, qualified_name: impl Into<String>) {
        self.types.insert(qualified_name.into());
    }

    pub fn extend<I, S>(&mut self, qualified_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types
            .extend(qualified_names.into_iter().map(Into::into));
    }

    /// Register every non-local type declared in a compilation unit
    pub fn register_unit(&mut self, unit: &CompilationUnit) {
        for ty in unit.all_types() {
            if !ty.is_local {
                self.types.insert(ty.qualified_name.clone());
            }
        }
    }

    /// Parse every `.java` file under `roots` and register its types.
    ///
    /// Returns the number of files indexed. Unreadable roots are an error;
    /// individual files that fail to read or parse are skipped.
    pub fn scan_source_roots<P: AsRef<Path>>(&mut self, roots: &[P]) -> Result<usize> {
        let parser = JavaParser::new();
        let mut files: Vec<PathBuf> = Vec::new();
        for root in roots {
            for entry in WalkDir::new(root.as_ref()) {
                let entry = entry.map_err(std::io::Error::from)?;
                let is_source = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| parser.supports_extension(ext));
                if entry.file_type().is_file() && is_source {
                    files.push(entry.into_path());
                }
            }
        }

        let units: Vec<CompilationUnit> = files
            .par_iter()
            .filter_map(|path| {
                let source = match std::fs::read_to_string(path) {
                    Ok(source) => source,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                        return None;
                    }
                };
                match parser.parse(&source, &path.to_string_lossy()) {
                    Ok(unit) => Some(unit),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping unparsable source file");
                        None
                    }
                }
            })
            .collect();

        for unit in &units {
            self.register_unit(unit);
        }
        debug!(files = units.len(), types = self.types.len(), "indexed source roots");
        Ok(units.len())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ProjectModel for ClasspathIndex {
    fn contains_type(&self, qualified_name: &str) -> Result<bool> {
        Ok(self.types.contains(qualified_name))
    }
}
