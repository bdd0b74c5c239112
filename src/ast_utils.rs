//! Decorator-metadata location and symbol insertion.
//!
//! Edits are synthesized as minimal `Change`s against the existing text,
//! mimicking the surrounding indentation instead of reprinting nodes.

use rustc_hash::FxHashMap;

use crate::change::Change;
use crate::imports::{ImportedName, collect_imports, insert_import};
use crate::parser::NodeIndex;
use crate::scanner::SyntaxKind;
use crate::source_file::SourceFile;
use crate::syntax::{NodeMatcher, find_nodes};

/// Insert `text` after the last of `nodes` (last by end offset). With
/// `inner`, the anchor is instead the end of the last `inner`-kind node
/// inside that node. Empty `nodes` anchors at `fallback_pos`.
pub fn insert_after_last_occurrence(
    source: &SourceFile,
    nodes: &[NodeIndex],
    text: &str,
    fallback_pos: u32,
    inner: Option<SyntaxKind>,
) -> Change {
    let arena = source.arena();
    let last = nodes.iter().copied().max_by_key(|&n| source.node_end(n));
    let position = match (last, inner) {
        (Some(node), Some(kind)) => {
            let matcher = NodeMatcher::ByKind(kind);
            find_nodes(arena, node, &matcher, None, true)
                .into_iter()
                .map(|n| source.node_end(n))
                .max()
                .unwrap_or(fallback_pos)
        }
        (Some(node), None) => source.node_end(node),
        (None, _) => fallback_pos,
    };
    Change::insert(position, text)
}

/// Object literals passed to `@Decorator({...})` calls, where the
/// decorator is bound (directly or through a namespace) to `module`.
pub fn decorator_metadata(
    source: &SourceFile,
    decorator_name: &str,
    module: &str,
) -> Vec<NodeIndex> {
    let arena = source.arena();
    // {local → module} for named bindings, {ns → module} for namespaces.
    let mut named: FxHashMap<String, String> = FxHashMap::default();
    let mut namespaces: FxHashMap<String, String> = FxHashMap::default();
    for binding in collect_imports(source) {
        match binding.name {
            ImportedName::Namespace => {
                namespaces.insert(binding.local_name, binding.module);
            }
            _ => {
                named.insert(binding.local_name, binding.module);
            }
        }
    }

    let matcher = NodeMatcher::ByKind(SyntaxKind::Decorator);
    let mut results = Vec::new();
    for decorator in find_nodes(arena, source.root(), &matcher, None, true) {
        let Some(call) = arena
            .get_wrapped(decorator)
            .and_then(|d| arena.get_call_expr(d.expression))
        else {
            continue;
        };
        let callee_matches = match arena.kind(call.expression) {
            SyntaxKind::Identifier => arena
                .identifier_text(call.expression)
                .is_some_and(|id| id == decorator_name && named.get(id).map(String::as_str) == Some(module)),
            SyntaxKind::PropertyAccessExpression => {
                arena.get_access_expr(call.expression).is_some_and(|access| {
                    arena.identifier_text(access.argument) == Some(decorator_name)
                        && arena
                            .identifier_text(access.expression)
                            .is_some_and(|ns| namespaces.get(ns).map(String::as_str) == Some(module))
                })
            }
            _ => false,
        };
        if !callee_matches {
            continue;
        }
        if let Some(&first_arg) = call.arguments.nodes.first() {
            if arena.is_kind(first_arg, SyntaxKind::ObjectLiteralExpression) {
                results.push(first_arg);
            }
        }
    }
    results
}

/// First property assignment in `object_literal` whose key (identifier or
/// string literal) equals `field_name`.
pub fn metadata_field(
    source: &SourceFile,
    object_literal: NodeIndex,
    field_name: &str,
) -> Option<NodeIndex> {
    let arena = source.arena();
    let properties = &arena.get_literal_expr(object_literal)?.elements;
    properties.nodes.iter().copied().find(|&property| {
        arena.get_property_assignment(property).is_some_and(|p| {
            arena.identifier_text(p.name) == Some(field_name)
                || arena.string_literal_text(p.name) == Some(field_name)
        })
    })
}

/// Collapse a rendered node to one line for duplicate detection.
pub fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Leading `\r?\n` plus indentation of a node's full text, when its trivia
/// starts on a fresh line.
fn leading_newline_indent(full_text: &str) -> Option<(&str, &str)> {
    let (newline, rest) = if let Some(rest) = full_text.strip_prefix("\r\n") {
        ("\r\n", rest)
    } else if let Some(rest) = full_text.strip_prefix('\n') {
        ("\n", rest)
    } else {
        return None;
    };
    let indent_len = rest.len() - rest.trim_start().len();
    Some((newline, &rest[..indent_len]))
}

fn indent_by(width: usize, text: &str) -> String {
    format!("{}{}", " ".repeat(width), text)
}

/// Append one element to an array literal as a single textual insertion.
/// The array is never reprinted. Duplicate elements (one-line equality)
/// yield the no-op change.
pub fn append_to_array_literal(source: &SourceFile, array: NodeIndex, element: &str) -> Change {
    let arena = source.arena();
    let Some(elements) = arena.get_literal_expr(array).map(|a| &a.elements) else {
        return Change::NoOp;
    };
    match elements.nodes.last() {
        None => Change::insert(source.node_start(array) + 1, element),
        Some(&last) => {
            let wanted = one_line(element);
            if elements.nodes.iter().any(|&e| one_line(source.node_text(e)) == wanted) {
                return Change::NoOp;
            }
            let full = source.node_full_text(last);
            let text = match leading_newline_indent(full) {
                Some((newline, indent)) => format!(",{newline}{indent}{element}"),
                None => format!(", {element}"),
            };
            Change::insert(source.node_end(last), text)
        }
    }
}

/// Make `symbol` a member of the `field_name` array inside the metadata
/// object of `@decorator_name({...})`.
///
/// Absent field: synthesized, mimicking the last property's indentation.
/// Existing array: idempotent append (one-line equality), mimicking the
/// last element's indentation. Field present but not an array: no changes.
/// With `import_path`, an import-insertion change for the symbol (any
/// `.member` suffix stripped) is appended.
pub fn add_symbol_to_decorator_metadata(
    source: &SourceFile,
    decorator_name: &str,
    decorator_module: &str,
    field_name: &str,
    symbol: &str,
    import_path: Option<&str>,
) -> Vec<Change> {
    let arena = source.arena();
    let Some(&metadata) = decorator_metadata(source, decorator_name, decorator_module).first()
    else {
        tracing::debug!(decorator = decorator_name, "no decorator metadata found");
        return Vec::new();
    };

    let with_import = |change: Change| -> Vec<Change> {
        match import_path {
            Some(path) => {
                let root_symbol = symbol.split('.').next().unwrap_or(symbol);
                vec![change, insert_import(source, root_symbol, path, false, None)]
            }
            None => vec![change],
        }
    };

    let Some(field) = metadata_field(source, metadata, field_name) else {
        // Field absent, synthesize it.
        let Some(properties) = arena.get_literal_expr(metadata).map(|o| &o.elements) else {
            return Vec::new();
        };
        let change = match properties.nodes.last() {
            None => {
                let position = source.node_end(metadata).saturating_sub(1);
                let text = format!(
                    "\n  {field_name}: [\n{}\n  ]\n",
                    indent_by(4, symbol)
                );
                Change::insert(position, text)
            }
            Some(&last_property) => {
                let position = source.node_end(last_property);
                let full = source.node_full_text(last_property);
                let text = match leading_newline_indent(full) {
                    Some((newline, indent)) => format!(
                        ",{newline}{indent}{field_name}: [{newline}{}{newline}{indent}]",
                        indent_by(indent.len() + 2, symbol)
                    ),
                    None => format!(", {field_name}: [{symbol}]"),
                };
                Change::insert(position, text)
            }
        };
        return with_import(change);
    };

    let Some(initializer) = arena.get_property_assignment(field).map(|p| p.initializer) else {
        return Vec::new();
    };
    if !arena.is_kind(initializer, SyntaxKind::ArrayLiteralExpression) {
        // Only array-shaped fields are extendable.
        return Vec::new();
    }
    let Some(elements) = arena.get_literal_expr(initializer).map(|a| &a.elements) else {
        return Vec::new();
    };

    let change = match elements.nodes.last() {
        None => {
            // Empty array, insert just before the `]`.
            let position = source.node_end(initializer).saturating_sub(1);
            Change::insert(position, format!("\n{}\n  ", indent_by(4, symbol)))
        }
        Some(&last_element) => {
            let wanted = one_line(symbol);
            let duplicate = elements
                .nodes
                .iter()
                .any(|&e| one_line(source.node_text(e)) == wanted);
            if duplicate {
                return Vec::new();
            }
            let position = source.node_end(last_element);
            let full = source.node_full_text(last_element);
            let text = match leading_newline_indent(full) {
                Some((newline, indent)) => {
                    format!(",{newline}{}", indent_by(indent.len(), symbol))
                }
                None => format!(", {symbol}"),
            };
            Change::insert(position, text)
        }
    };
    with_import(change)
}
