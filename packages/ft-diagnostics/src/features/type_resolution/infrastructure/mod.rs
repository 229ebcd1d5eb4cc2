//! Type resolution infrastructure

mod import_resolver;

pub use import_resolver::ImportTypeResolver;
