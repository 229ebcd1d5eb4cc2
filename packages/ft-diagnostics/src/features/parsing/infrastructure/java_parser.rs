//! Tree-sitter Java parser implementation
//!
//! This is where the tree-sitter dependency lives. The tree-sitter tree is
//! converted eagerly into the owned `CompilationUnit` model, so nothing
//! downstream holds on to parser state.

use tree_sitter::{Node as TSNode, Parser as TSParser};

use crate::errors::{FtError, Result};
use crate::features::parsing::domain::{
    Annotation, AnnotationKind, AnonymousClass, BodyDeclaration, CompilationUnit, Expression, ExpressionKind,
    ImportDecl, MemberValuePair, MethodDeclaration, TypeDeclaration, TypeId, TypeKind,
    TypeParameter, TypeRef, TypeRefKind, VALUE_MEMBER,
};
use crate::features::parsing::ports::Parser;
use crate::shared::utils::tree_sitter::{
    extract_node_text, extract_node_text_owned, field_text, find_child_by_kind,
    find_outermost_descendants, named_children, node_to_span,
};

const TYPE_DECLARATION_KINDS: [&str; 5] = [
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

const METHOD_DECLARATION_KINDS: [&str; 3] = [
    "method_declaration",
    "constructor_declaration",
    "compact_constructor_declaration",
];

/// Body members that can create anonymous classes outside of a method
const INITIALIZER_KINDS: [&str; 5] = [
    "field_declaration",
    "constant_declaration",
    "static_initializer",
    "block",
    "enum_constant",
];

/// Tree-sitter based Java parser
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for JavaParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| FtError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FtError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        let mut builder = UnitBuilder::new(source);
        Ok(builder.build(root, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "java"
    }
}

/// Converts one tree-sitter tree into a `CompilationUnit`
struct UnitBuilder<'a> {
    source: &'a str,
    package: Option<String>,
    next_type_id: u32,
}

impl<'a> UnitBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            package: None,
            next_type_id: 0,
        }
    }

    fn build(&mut self, root: TSNode, file_path: &str) -> CompilationUnit {
        let mut imports = Vec::new();
        let mut types = Vec::new();

        for child in named_children(root) {
            match child.kind() {
                "package_declaration" => self.package = self.dotted_name(child),
                "import_declaration" => {
                    if let Some(import) = self.extract_import(child) {
                        imports.push(import);
                    }
                }
                kind if TYPE_DECLARATION_KINDS.contains(&kind) => {
                    if let Some(ty) = self.extract_type(child, None, false) {
                        types.push(ty);
                    }
                }
                _ => {}
            }
        }

        CompilationUnit::new(
            file_path,
            self.source,
            self.package.clone(),
            imports,
            types,
            root.has_error(),
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Package & imports
    // ═══════════════════════════════════════════════════════════════════════

    /// Name of the first `identifier` / `scoped_identifier` child, whitespace removed
    fn dotted_name(&self, node: TSNode) -> Option<String> {
        named_children(node)
            .into_iter()
            .find(|child| matches!(child.kind(), "identifier" | "scoped_identifier"))
            .map(|name| strip_whitespace(extract_node_text(name, self.source)))
    }

    fn extract_import(&self, node: TSNode) -> Option<ImportDecl> {
        let name = self.dotted_name(node)?;
        Some(ImportDecl {
            name,
            is_static: find_child_by_kind(node, "static").is_some(),
            on_demand: find_child_by_kind(node, "asterisk").is_some(),
            span: node_to_span(node),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Type declarations
    // ═══════════════════════════════════════════════════════════════════════

    fn extract_type(
        &mut self,
        node: TSNode,
        enclosing: Option<&str>,
        is_local: bool,
    ) -> Option<TypeDeclaration> {
        let name = field_text(node, "name", self.source)?;

        let id = TypeId(self.next_type_id);
        self.next_type_id += 1;

        let qualified_name = match (is_local, enclosing, &self.package) {
            (true, _, _) => name.clone(),
            (false, Some(outer), _) => format!("{}.{}", outer, name),
            (false, None, Some(package)) => format!("{}.{}", package, name),
            (false, None, None) => name.clone(),
        };

        let kind = match node.kind() {
            "interface_declaration" => TypeKind::Interface,
            "enum_declaration" => TypeKind::Enum,
            "record_declaration" => TypeKind::Record,
            "annotation_type_declaration" => TypeKind::Annotation,
            _ => TypeKind::Class,
        };

        let annotations = self.extract_annotations(node);
        let type_parameters = self.extract_type_parameters(node);
        let body = node
            .child_by_field_name("body")
            .map(|body| self.extract_body(body, Some(&qualified_name)))
            .unwrap_or_default();

        Some(TypeDeclaration {
            id,
            name,
            qualified_name,
            kind,
            is_local,
            annotations,
            type_parameters,
            body,
            span: node_to_span(node),
        })
    }

    /// Methods, member types and initializer-created anonymous classes of a
    /// class/interface/enum/record body.
    ///
    /// `qualified_name` is `None` for an anonymous class body; its member
    /// types are then treated as local types.
    fn extract_body(&mut self, body: TSNode, qualified_name: Option<&str>) -> Vec<BodyDeclaration> {
        let mut declarations = Vec::new();
        for child in named_children(body) {
            match child.kind() {
                kind if METHOD_DECLARATION_KINDS.contains(&kind) => {
                    if let Some(method) = self.extract_method(child) {
                        declarations.push(BodyDeclaration::Method(method));
                    }
                }
                kind if TYPE_DECLARATION_KINDS.contains(&kind) => {
                    if let Some(ty) = self.extract_type(child, qualified_name, qualified_name.is_none()) {
                        declarations.push(BodyDeclaration::Type(ty));
                    }
                }
                // enum constants come first, the regular members live here
                "enum_body_declarations" => {
                    declarations.extend(self.extract_body(child, qualified_name));
                }
                kind if INITIALIZER_KINDS.contains(&kind) => {
                    declarations.extend(
                        self.extract_anonymous_classes(child)
                            .into_iter()
                            .map(BodyDeclaration::Anonymous),
                    );
                }
                _ => {}
            }
        }
        declarations
    }

    /// Outermost anonymous class bodies under `node`, local type declarations
    /// not entered
    fn extract_anonymous_classes(&mut self, node: TSNode) -> Vec<AnonymousClass> {
        find_outermost_descendants(node, &["class_body"], &TYPE_DECLARATION_KINDS)
            .into_iter()
            .map(|body| AnonymousClass {
                body: self.extract_body(body, None),
                span: node_to_span(body.parent().unwrap_or(body)),
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Method declarations
    // ═══════════════════════════════════════════════════════════════════════

    fn extract_method(&mut self, node: TSNode) -> Option<MethodDeclaration> {
        let name = field_text(node, "name", self.source)?;
        let is_constructor = node.kind() != "method_declaration";

        let return_type = if is_constructor {
            None
        } else {
            node.child_by_field_name("type")
                .and_then(|ty| self.extract_type_ref(ty))
        };

        let annotations = self.extract_annotations(node);
        let type_parameters = self.extract_type_parameters(node);

        let (local_types, anonymous_classes) = match node.child_by_field_name("body") {
            Some(body) => {
                let local_types: Vec<TypeDeclaration> =
                    find_outermost_descendants(body, &TYPE_DECLARATION_KINDS, &["class_body"])
                        .into_iter()
                        .filter_map(|local| self.extract_type(local, None, true))
                        .collect();
                (local_types, self.extract_anonymous_classes(body))
            }
            None => (Vec::new(), Vec::new()),
        };

        Some(MethodDeclaration {
            name,
            is_constructor,
            return_type,
            type_parameters,
            annotations,
            local_types,
            anonymous_classes,
            span: node_to_span(node),
        })
    }

    fn extract_type_parameters(&self, node: TSNode) -> Vec<TypeParameter> {
        let Some(params) = find_child_by_kind(node, "type_parameters") else {
            return Vec::new();
        };

        named_children(params)
            .into_iter()
            .filter(|param| param.kind() == "type_parameter")
            .filter_map(|param| {
                let children = named_children(param);
                let name = children
                    .iter()
                    .find(|child| matches!(child.kind(), "type_identifier" | "identifier"))
                    .map(|child| extract_node_text_owned(*child, self.source))?;
                let bound = children
                    .iter()
                    .find(|child| child.kind() == "type_bound")
                    .and_then(|bound| named_children(*bound).into_iter().next())
                    .and_then(|first| self.extract_type_ref(first));
                Some(TypeParameter { name, bound })
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Type references
    // ═══════════════════════════════════════════════════════════════════════

    fn extract_type_ref(&self, node: TSNode) -> Option<TypeRef> {
        let text = extract_node_text_owned(node, self.source);
        let span = node_to_span(node);

        let kind = match node.kind() {
            "void_type" => TypeRefKind::Void,
            "integral_type" | "floating_point_type" | "boolean_type" => {
                TypeRefKind::Primitive(text.trim().to_string())
            }
            "type_identifier" | "identifier" => TypeRefKind::Named(vec![text.clone()]),
            "scoped_type_identifier" | "generic_type" | "scoped_identifier" => {
                let mut segments = Vec::new();
                self.collect_name_segments(node, &mut segments);
                TypeRefKind::Named(segments)
            }
            "array_type" => {
                let element = self.extract_type_ref(node.child_by_field_name("element")?)?;
                let dimensions = node
                    .child_by_field_name("dimensions")
                    .map(|dims| extract_node_text(dims, self.source).matches('[').count())
                    .unwrap_or(1)
                    .max(1);
                let mut kind = TypeRefKind::Array(Box::new(element));
                for _ in 1..dimensions {
                    kind = TypeRefKind::Array(Box::new(TypeRef::new(kind, text.clone(), span)));
                }
                kind
            }
            "annotated_type" => {
                let inner = named_children(node).into_iter().last()?;
                return self.extract_type_ref(inner);
            }
            _ => return None,
        };

        Some(TypeRef::new(kind, text, span))
    }

    /// Name segments of a (possibly generic, possibly scoped) type, type
    /// arguments and type annotations dropped
    fn collect_name_segments(&self, node: TSNode, segments: &mut Vec<String>) {
        for child in named_children(node) {
            match child.kind() {
                "type_identifier" | "identifier" => {
                    segments.push(extract_node_text_owned(child, self.source))
                }
                "scoped_type_identifier" | "generic_type" | "scoped_identifier" => {
                    self.collect_name_segments(child, segments)
                }
                _ => {}
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Annotations
    // ═══════════════════════════════════════════════════════════════════════

    /// Annotations among the declaration's modifiers
    fn extract_annotations(&self, node: TSNode) -> Vec<Annotation> {
        let Some(modifiers) = find_child_by_kind(node, "modifiers") else {
            return Vec::new();
        };

        named_children(modifiers)
            .into_iter()
            .filter(|child| matches!(child.kind(), "annotation" | "marker_annotation"))
            .filter_map(|child| self.extract_annotation(child))
            .collect()
    }

    fn extract_annotation(&self, node: TSNode) -> Option<Annotation> {
        let name = node
            .child_by_field_name("name")
            .map(|name| strip_whitespace(extract_node_text(name, self.source)))?;
        let span = node_to_span(node);

        if node.kind() == "marker_annotation" {
            return Some(Annotation::marker(name, span));
        }

        let arguments = node
            .child_by_field_name("arguments")
            .map(named_children)
            .unwrap_or_default();

        let pairs: Vec<MemberValuePair> = arguments
            .iter()
            .filter(|arg| arg.kind() == "element_value_pair")
            .filter_map(|pair| {
                let key = field_text(*pair, "key", self.source)?;
                let value = pair.child_by_field_name("value")?;
                Some(MemberValuePair {
                    name: key,
                    value: self.extract_expression(value),
                })
            })
            .collect();

        let (kind, members) = match arguments.as_slice() {
            [single] if single.kind() != "element_value_pair" => (
                AnnotationKind::SingleMember,
                vec![MemberValuePair {
                    name: VALUE_MEMBER.to_string(),
                    value: self.extract_expression(*single),
                }],
            ),
            _ => (AnnotationKind::Normal, pairs),
        };

        Some(Annotation {
            name,
            kind,
            members,
            span,
        })
    }

    fn extract_expression(&self, node: TSNode) -> Expression {
        let kind = if node.kind() == "string_literal" {
            ExpressionKind::StringLiteral
        } else {
            ExpressionKind::Other
        };
        Expression::new(
            kind,
            extract_node_text_owned(node, self.source),
            node_to_span(node),
        )
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
