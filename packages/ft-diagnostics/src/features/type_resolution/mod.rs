//! Type Resolution Feature
//!
//! Resolves a written return type to its erased, fully-qualified name.
//!
//! ## Structure
//! - `ports/` - TypeResolver trait, TypeScope
//! - `infrastructure/` - ImportTypeResolver

pub mod infrastructure;
pub mod ports;

pub use infrastructure::ImportTypeResolver;
pub use ports::{TypeResolver, TypeScope};
