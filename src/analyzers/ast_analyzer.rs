use anyhow::Result;
use tree_sitter::{Node, Parser, Tree};
use crate::types::{ComponentRecord, FileAnalysis, StandaloneRecord};

/// The Angular decorators this tool recognizes. Dispatching through an enum
/// keeps the match exhaustive when a new category is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NgDecorator {
    Component,
    Directive,
    Pipe,
    NgModule,
    Injectable,
}

impl NgDecorator {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Component" => Some(NgDecorator::Component),
            "Directive" => Some(NgDecorator::Directive),
            "Pipe" => Some(NgDecorator::Pipe),
            "NgModule" => Some(NgDecorator::NgModule),
            "Injectable" => Some(NgDecorator::Injectable),
            _ => None,
        }
    }
}

pub struct AngularAstAnalyzer {
    parser: Parser,
}

impl AngularAstAnalyzer {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT;
        parser.set_language(&language.into())?;

        Ok(AngularAstAnalyzer { parser })
    }

    pub fn parse_file(&mut self, content: &str) -> Result<Tree> {
        self.parser.parse(content, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse TypeScript content"))
    }

    /// Analyze one file's text. Malformed sources still produce a best-effort
    /// tree; decorators the tree fails to expose are simply not counted.
    pub fn analyze_file(&mut self, content: &str, file_path: &str, legacy: bool) -> Result<FileAnalysis> {
        let tree = self.parse_file(content)?;
        let mut analysis = FileAnalysis {
            components: Vec::new(),
            directives: Vec::new(),
            pipes: Vec::new(),
            ng_module_count: 0,
            injectable_classes: 0,
        };
        self.collect_classes(tree.root_node(), content.as_bytes(), file_path, legacy, &mut analysis);
        Ok(analysis)
    }

    fn collect_classes(&self, node: Node, source: &[u8], file_path: &str, legacy: bool, analysis: &mut FileAnalysis) {
        if node.kind() == "class_declaration" || node.kind() == "abstract_class_declaration" {
            for decorator in self.class_decorators(node) {
                let kind = match self.decorator_name(decorator, source) {
                    Some(name) => NgDecorator::from_name(&name),
                    None => None,
                };
                match kind {
                    Some(NgDecorator::Component) => {
                        let metadata = self.decorator_metadata(decorator);
                        analysis.components.push(ComponentRecord {
                            file_path: file_path.to_string(),
                            standalone: self.compute_standalone(metadata, source, legacy),
                            on_push: self.compute_on_push(metadata, source),
                        });
                    }
                    Some(NgDecorator::Directive) => {
                        let metadata = self.decorator_metadata(decorator);
                        analysis.directives.push(StandaloneRecord {
                            file_path: file_path.to_string(),
                            standalone: self.compute_standalone(metadata, source, legacy),
                        });
                    }
                    Some(NgDecorator::Pipe) => {
                        let metadata = self.decorator_metadata(decorator);
                        analysis.pipes.push(StandaloneRecord {
                            file_path: file_path.to_string(),
                            standalone: self.compute_standalone(metadata, source, legacy),
                        });
                    }
                    Some(NgDecorator::NgModule) => {
                        analysis.ng_module_count += 1;
                    }
                    Some(NgDecorator::Injectable) => {
                        analysis.injectable_classes += 1;
                    }
                    None => {}
                }
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_classes(child, source, file_path, legacy, analysis);
        }
    }

    /// Return the decorators attached to a class declaration, or empty when
    /// it has none. The grammar hangs decorators written before `export` on
    /// the surrounding export statement, so both attachment points are
    /// checked, preferring the class node's own.
    fn class_decorators<'a>(&self, class_node: Node<'a>) -> Vec<Node<'a>> {
        let mut cursor = class_node.walk();
        let own: Vec<Node<'a>> = class_node
            .children_by_field_name("decorator", &mut cursor)
            .collect();
        if !own.is_empty() {
            return own;
        }

        if let Some(parent) = class_node.parent() {
            if parent.kind() == "export_statement" {
                let mut cursor = parent.walk();
                return parent.children_by_field_name("decorator", &mut cursor).collect();
            }
        }

        Vec::new()
    }

    /// Name of the decorator's callee: `@Component(...)` and `@core.Component(...)`
    /// both yield "Component", a call-less `@Injectable` yields "Injectable".
    /// Anything else is unnameable and the decorator is skipped.
    fn decorator_name(&self, decorator: Node, source: &[u8]) -> Option<String> {
        let expr = decorator.named_child(0)?;
        match expr.kind() {
            "call_expression" => {
                let callee = expr.child_by_field_name("function")?;
                match callee.kind() {
                    "identifier" => Some(self.node_text(callee, source)),
                    "member_expression" => {
                        let property = callee.child_by_field_name("property")?;
                        Some(self.node_text(property, source))
                    }
                    _ => None,
                }
            }
            "identifier" => Some(self.node_text(expr, source)),
            _ => None,
        }
    }

    /// The decorator call's first argument, if and only if it is an object
    /// literal. Spreads, identifier references, and nested calls yield None
    /// and leave classification to the mode defaults.
    fn decorator_metadata<'a>(&self, decorator: Node<'a>) -> Option<Node<'a>> {
        let expr = decorator.named_child(0)?;
        if expr.kind() != "call_expression" {
            return None;
        }
        let arguments = expr.child_by_field_name("arguments")?;
        let mut cursor = arguments.walk();
        let first = arguments
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment")?;
        if first.kind() == "object" {
            Some(first)
        } else {
            None
        }
    }

    /// Whether the declaration opts into standalone composition. Without a
    /// literal `true`/`false` the answer is the mode default: legacy projects
    /// default to not-standalone, modern ones to standalone.
    fn compute_standalone(&self, metadata: Option<Node>, source: &[u8], legacy: bool) -> bool {
        let default = !legacy;
        let object = match metadata {
            Some(object) => object,
            None => return default,
        };
        let value = match self.find_property(object, source, "standalone") {
            Some(value) => value,
            None => return default,
        };
        match value.kind() {
            "true" => true,
            "false" => false,
            // Not statically evaluable (identifier, call, template, ...).
            _ => default,
        }
    }

    /// Whether a component declares the OnPush change-detection strategy.
    fn compute_on_push(&self, metadata: Option<Node>, source: &[u8]) -> bool {
        let object = match metadata {
            Some(object) => object,
            None => return false,
        };
        let value = match self.find_property(object, source, "changeDetection") {
            Some(value) => value,
            None => return false,
        };
        match value.kind() {
            // ChangeDetectionStrategy.OnPush
            "member_expression" => value
                .child_by_field_name("property")
                .map_or(false, |property| self.node_text(property, source) == "OnPush"),
            // ChangeDetectionStrategy["OnPush"]
            "subscript_expression" => value
                .child_by_field_name("index")
                .map_or(false, |index| {
                    index.kind() == "string" && self.string_text(index, source) == "OnPush"
                }),
            // Aliased identifier: best-effort suffix check, no resolution.
            "identifier" => self
                .node_text(value, source)
                .to_ascii_lowercase()
                .ends_with("onpush"),
            _ => false,
        }
    }

    /// Look up a property value by exact key name among the literal's plain
    /// pairs (identifier- or string-named keys). Shorthand and spread entries
    /// carry no readable value and are skipped. The last duplicate wins, as
    /// it would at runtime.
    fn find_property<'a>(&self, object: Node<'a>, source: &[u8], name: &str) -> Option<Node<'a>> {
        let mut found = None;
        let mut cursor = object.walk();
        for entry in object.named_children(&mut cursor) {
            if entry.kind() != "pair" {
                continue;
            }
            let key = match entry.child_by_field_name("key") {
                Some(key) => key,
                None => continue,
            };
            let key_text = match key.kind() {
                "property_identifier" => self.node_text(key, source),
                "string" => self.string_text(key, source),
                _ => continue,
            };
            if key_text == name {
                found = entry.child_by_field_name("value");
            }
        }
        found
    }

    /// Content of a string literal node, without the quotes.
    fn string_text(&self, string_node: Node, source: &[u8]) -> String {
        let mut text = String::new();
        let mut cursor = string_node.walk();
        for piece in string_node.named_children(&mut cursor) {
            if piece.kind() == "string_fragment" || piece.kind() == "escape_sequence" {
                text.push_str(&self.node_text(piece, source));
            }
        }
        text
    }

    fn node_text(&self, node: Node, source: &[u8]) -> String {
        node.utf8_text(source).unwrap_or_default().to_string()
    }
}
