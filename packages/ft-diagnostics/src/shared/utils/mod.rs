//! Utility modules shared across features
//!
//! - `tree_sitter`: Tree-sitter AST traversal and extraction
//! - `line_index`: Byte offset to LSP position conversion

pub mod line_index;
pub mod tree_sitter;
