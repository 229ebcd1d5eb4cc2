//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter AST nodes.
//! Nodes are `Copy`, so helpers take them by value and keep the tree lifetime.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Find all direct children by kind
#[inline]
pub fn find_children_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect()
}

/// All direct named children, skipping comments
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Find all descendants of one of `kinds`, without descending into matches
/// or into any node whose kind is listed in `stop_at`.
pub fn find_outermost_descendants<'tree>(
    node: Node<'tree>,
    kinds: &[&str],
    stop_at: &[&str],
) -> Vec<Node<'tree>> {
    let mut result = Vec::new();
    let mut stack: Vec<Node<'tree>> = Vec::new();
    for i in (0..node.child_count()).rev() {
        if let Some(child) = node.child(i) {
            stack.push(child);
        }
    }
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            result.push(current);
            continue;
        }
        if stop_at.contains(&current.kind()) {
            continue;
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'a>(node: Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of the `name` field of a declaration node
pub fn field_text(node: Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(child, source))
        .filter(|text| !text.is_empty())
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to a byte Span
#[inline]
pub fn node_to_span(node: Node) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}
