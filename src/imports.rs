//! Import scanning and import-insertion synthesis.

use indexmap::IndexMap;

use crate::ast_utils::insert_after_last_occurrence;
use crate::change::Change;
use crate::parser::{NodeFlags, NodeIndex};
use crate::scanner::SyntaxKind;
use crate::source_file::SourceFile;
use crate::syntax::{NodeMatcher, find_nodes};

/// How a local name came to be bound by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
    Default,
    Namespace,
    Named { exported: String },
}

/// One binding introduced by a top-level import. Recomputed per lookup;
/// never cached across edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub local_name: String,
    pub module: String,
    pub name: ImportedName,
}

impl ImportBinding {
    pub fn is_namespace(&self) -> bool {
        self.name == ImportedName::Namespace
    }

    /// The name the module exports under, regardless of local aliasing.
    pub fn exported_name(&self) -> &str {
        match &self.name {
            ImportedName::Named { exported } => exported,
            _ => &self.local_name,
        }
    }
}

/// Scan every top-level import declaration into bindings.
pub fn collect_imports(source: &SourceFile) -> Vec<ImportBinding> {
    let arena = source.arena();
    let mut bindings = Vec::new();
    for &statement in arena.statements(source.root()) {
        let Some(decl) = arena.get_import_decl(statement) else {
            continue;
        };
        let Some(module) = arena.string_literal_text(decl.module_specifier) else {
            continue;
        };
        let module = module.to_string();
        let Some(clause) = arena.get_import_clause(decl.import_clause) else {
            continue;
        };
        if let Some(name) = arena.identifier_text(clause.name) {
            bindings.push(ImportBinding {
                local_name: name.to_string(),
                module: module.clone(),
                name: ImportedName::Default,
            });
        }
        let named = clause.named_bindings;
        if arena.is_kind(named, SyntaxKind::NamespaceImport) {
            if let Some(ns) = arena.get_specifier(named) {
                if let Some(name) = arena.identifier_text(ns.name) {
                    bindings.push(ImportBinding {
                        local_name: name.to_string(),
                        module: module.clone(),
                        name: ImportedName::Namespace,
                    });
                }
            }
        } else if let Some(named_imports) = arena.get_named_bindings(named) {
            for &specifier in &named_imports.elements.nodes {
                let Some(spec) = arena.get_specifier(specifier) else {
                    continue;
                };
                let Some(local) = arena.identifier_text(spec.name) else {
                    continue;
                };
                let exported = arena
                    .identifier_text(spec.property_name)
                    .unwrap_or(local)
                    .to_string();
                bindings.push(ImportBinding {
                    local_name: local.to_string(),
                    module: module.clone(),
                    name: ImportedName::Named { exported },
                });
            }
        }
    }
    bindings
}

/// Map of {local name → originating module} including namespace bindings,
/// for callee resolution. Keyed in declaration order.
pub fn import_map(source: &SourceFile) -> IndexMap<String, String> {
    collect_imports(source)
        .into_iter()
        .map(|b| (b.local_name, b.module))
        .collect()
}

/// Majority-vote line-ending detection, host convention when the file has
/// no line breaks.
pub fn detect_line_ending(text: &str) -> &'static str {
    let bytes = text.as_bytes();
    let mut crlf = 0usize;
    let mut lf = 0usize;
    for at in memchr::memchr_iter(b'\n', bytes) {
        if at > 0 && bytes[at - 1] == b'\r' {
            crlf += 1;
        } else {
            lf += 1;
        }
    }
    if crlf == 0 && lf == 0 {
        host_line_ending()
    } else if crlf > lf {
        "\r\n"
    } else {
        "\n"
    }
}

#[cfg(windows)]
fn host_line_ending() -> &'static str {
    "\r\n"
}

#[cfg(not(windows))]
fn host_line_ending() -> &'static str {
    "\n"
}

/// Synthesize the `Change` that makes `symbol` importable from `module`.
///
/// An existing namespace import from `module`, or an existing named import
/// of the symbol, yields the no-op change. Otherwise the symbol joins the
/// first matching declaration's named list, or a fresh import statement is
/// anchored after the last import, after a leading directive-prologue
/// string, or at the start of the file.
pub fn insert_import(
    source: &SourceFile,
    symbol: &str,
    module: &str,
    is_default: bool,
    alias: Option<&str>,
) -> Change {
    let arena = source.arena();
    let import_text = match alias {
        Some(alias) => format!("{symbol} as {alias}"),
        None => symbol.to_string(),
    };

    let all_imports: Vec<NodeIndex> = arena
        .statements(source.root())
        .iter()
        .copied()
        .filter(|&s| arena.is_kind(s, SyntaxKind::ImportDeclaration))
        .collect();
    let relevant: Vec<NodeIndex> = all_imports
        .iter()
        .copied()
        .filter(|&decl| {
            arena
                .get_import_decl(decl)
                .and_then(|d| arena.string_literal_text(d.module_specifier))
                == Some(module)
        })
        .collect();

    if !relevant.is_empty() {
        let has_namespace = relevant.iter().any(|&decl| {
            arena
                .get_import_decl(decl)
                .and_then(|d| arena.get_import_clause(d.import_clause))
                .is_some_and(|c| arena.is_kind(c.named_bindings, SyntaxKind::NamespaceImport))
        });
        if has_namespace {
            return Change::NoOp;
        }

        let mut specifiers: Vec<NodeIndex> = Vec::new();
        for &decl in &relevant {
            if let Some(named) = arena
                .get_import_decl(decl)
                .and_then(|d| arena.get_import_clause(d.import_clause))
                .and_then(|c| arena.get_named_bindings(c.named_bindings))
            {
                specifiers.extend(named.elements.nodes.iter().copied());
            }
        }
        let already_imported = specifiers.iter().any(|&s| {
            arena.get_specifier(s).is_some_and(|spec| {
                let exported = if spec.property_name.is_some() { spec.property_name } else { spec.name };
                arena.identifier_text(exported) == Some(symbol)
            })
        });
        if already_imported {
            return Change::NoOp;
        }

        // `import Foo from 'm'` has no brace to extend; anchor before
        // `from` instead.
        let fallback = if specifiers.is_empty() {
            from_keyword_start(source, relevant[0])
        } else {
            0
        };
        return insert_after_last_occurrence(
            source,
            &specifiers,
            &format!(", {import_text}"),
            fallback,
            None,
        );
    }

    let eol = detect_line_ending(source.text());
    let prologue_end = directive_prologue_end(source);
    let insert_at_beginning = all_imports.is_empty() && prologue_end.is_none();
    let (open, close) = if is_default { ("", "") } else { ("{ ", " }") };
    let separator = if insert_at_beginning { String::new() } else { format!(";{eol}") };
    let terminator = if insert_at_beginning { format!(";{eol}") } else { String::new() };
    let to_insert =
        format!("{separator}import {open}{import_text}{close} from '{module}'{terminator}");
    insert_after_last_occurrence(
        source,
        &all_imports,
        &to_insert,
        prologue_end.unwrap_or(0),
        Some(SyntaxKind::StringLiteral),
    )
}

/// End offset of a leading `'use strict'`-style string literal statement.
fn directive_prologue_end(source: &SourceFile) -> Option<u32> {
    let arena = source.arena();
    let matcher = NodeMatcher::ByKind(SyntaxKind::StringLiteral);
    find_nodes(arena, source.root(), &matcher, None, true)
        .into_iter()
        .find(|&literal| arena.get_literal(literal).is_some_and(|l| l.text == "use strict"))
        .map(|literal| source.node_end(literal))
}

/// Offset of the `from` keyword in an import declaration. The keyword is
/// not materialized as a tree node, so it is located textually between the
/// clause and the module specifier.
fn from_keyword_start(source: &SourceFile, decl: NodeIndex) -> u32 {
    let arena = source.arena();
    let decl_start = source.node_start(decl) as usize;
    let limit = arena
        .get_import_decl(decl)
        .map(|d| source.node_start(d.module_specifier) as usize)
        .unwrap_or(decl_start);
    let slice = &source.text()[decl_start..limit];
    match slice.rfind("from") {
        Some(at) => (decl_start + at) as u32,
        None => limit as u32,
    }
}

/// Does `name` already exist as a top-level declaration, variable, or
/// import binding? Bindings originating from `exclude_module` are ignored
/// so re-importing the same symbol is not a collision with itself.
pub fn has_top_level_identifier(source: &SourceFile, name: &str, exclude_module: &str) -> bool {
    let arena = source.arena();
    for &statement in arena.statements(source.root()) {
        match arena.kind(statement) {
            SyntaxKind::ClassDeclaration => {
                if arena
                    .get_class(statement)
                    .and_then(|c| arena.identifier_text(c.name))
                    == Some(name)
                {
                    return true;
                }
            }
            SyntaxKind::FunctionDeclaration => {
                if arena
                    .get_class_member(statement)
                    .and_then(|f| arena.identifier_text(f.name))
                    == Some(name)
                {
                    return true;
                }
            }
            SyntaxKind::VariableStatement => {
                let Some(data) = arena.get_variable_statement(statement) else {
                    continue;
                };
                for &declaration in &data.declarations.nodes {
                    if arena
                        .get_variable_declaration(declaration)
                        .and_then(|d| arena.identifier_text(d.name))
                        == Some(name)
                    {
                        return true;
                    }
                }
            }
            _ => {}
        }
    }
    collect_imports(source)
        .iter()
        .any(|b| b.local_name == name && b.module != exclude_module)
}

/// Local name to use for `symbol` imported from `module`, aliased with a
/// `_alias` suffix on collision. A pre-existing `<symbol>_alias` binding
/// would still collide; that case is accepted as-is.
pub fn non_colliding_name(source: &SourceFile, symbol: &str, module: &str) -> String {
    if has_top_level_identifier(source, symbol, module) {
        format!("{symbol}_alias")
    } else {
        symbol.to_string()
    }
}

/// True when the import declaration carries only type bindings.
pub fn is_type_only_import(source: &SourceFile, decl: NodeIndex) -> bool {
    source
        .arena()
        .get(decl)
        .is_some_and(|n| n.node_flags().contains(NodeFlags::TYPE_ONLY))
}
