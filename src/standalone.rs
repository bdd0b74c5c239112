//! Standalone-bootstrap location, application-config resolution, and the
//! provider-insertion entry point used by rules.

use crate::ast_utils::{
    add_symbol_to_decorator_metadata, append_to_array_literal, metadata_field, one_line,
};
use crate::change::Change;
use crate::code_block::{CodeBlockContext, PendingCodeBlock};
use crate::diagnostics::{EditError, Resolved};
use crate::imports::collect_imports;
use crate::parser::{NodeArena, NodeIndex};
use crate::scanner::SyntaxKind;
use crate::source_file::SourceFile;
use crate::syntax::{NodeMatcher, find_nodes};
use crate::tree::FileTree;

pub const BOOTSTRAP_APPLICATION: &str = "bootstrapApplication";
pub const PLATFORM_BROWSER: &str = "@angular/platform-browser";

const NG_MODULE_DECORATOR: &str = "NgModule";
const NG_CORE: &str = "@angular/core";

/// Which bootstrap API a main file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// `bootstrapApplication(Component, config?)` call.
    Standalone(NodeIndex),
    /// `platform.bootstrapModule(AppModule)`-style call.
    NgModule(NodeIndex),
}

/// Local name under which `symbol` from `module` is bound in this file,
/// honoring `as` aliases.
pub fn imported_local_name(source: &SourceFile, module: &str, symbol: &str) -> Option<String> {
    collect_imports(source)
        .into_iter()
        .find(|b| b.module == module && !b.is_namespace() && b.exported_name() == symbol)
        .map(|b| b.local_name)
}

/// The `bootstrapApplication(...)` call, located through the function's
/// local binding name.
pub fn find_bootstrap_application_call(source: &SourceFile) -> Resolved<NodeIndex> {
    let Some(local) = imported_local_name(source, PLATFORM_BROWSER, BOOTSTRAP_APPLICATION) else {
        return Resolved::NotFound(format!("{BOOTSTRAP_APPLICATION} is not imported"));
    };
    let arena = source.arena();
    let predicate = |arena: &NodeArena, node: NodeIndex| {
        arena
            .get_call_expr(node)
            .is_some_and(|call| arena.identifier_text(call.expression) == Some(local.as_str()))
    };
    let matcher = NodeMatcher::ByPredicate(&predicate);
    match find_nodes(arena, source.root(), &matcher, Some(1), true).first() {
        Some(&call) => Resolved::Found(call),
        None => Resolved::NotFound(format!("no call to {local}")),
    }
}

/// `*.bootstrapModule(...)` call, the module-style fallback.
pub fn find_bootstrap_module_call(source: &SourceFile) -> Resolved<NodeIndex> {
    let arena = source.arena();
    let predicate = |arena: &NodeArena, node: NodeIndex| {
        arena.get_call_expr(node).is_some_and(|call| {
            arena
                .get_access_expr(call.expression)
                .is_some_and(|access| arena.identifier_text(access.argument) == Some("bootstrapModule"))
        })
    };
    let matcher = NodeMatcher::ByPredicate(&predicate);
    match find_nodes(arena, source.root(), &matcher, Some(1), true).first() {
        Some(&call) => Resolved::Found(call),
        None => Resolved::NotFound("no bootstrapModule call".to_string()),
    }
}

/// Standalone detection first, module detection as the fallback. Only
/// when both fail is the file considered bootstrap-less.
pub fn find_bootstrap(source: &SourceFile) -> Resolved<Bootstrap> {
    match find_bootstrap_application_call(source) {
        Resolved::Found(call) => Resolved::Found(Bootstrap::Standalone(call)),
        Resolved::NotFound(standalone_reason) => match find_bootstrap_module_call(source) {
            Resolved::Found(call) => Resolved::Found(Bootstrap::NgModule(call)),
            Resolved::NotFound(module_reason) => {
                Resolved::NotFound(format!("{standalone_reason}; {module_reason}"))
            }
        },
    }
}

/// Where the application-config object literal lives.
#[derive(Debug)]
pub struct AppConfig {
    pub file_path: String,
    /// Parsed config file when the config was followed across a relative
    /// import; `None` means `node` belongs to the bootstrap file itself.
    pub external: Option<SourceFile>,
    pub node: NodeIndex,
}

fn top_level_object_literal(source: &SourceFile, name: &str) -> Option<NodeIndex> {
    let arena = source.arena();
    for &statement in arena.statements(source.root()) {
        let Some(data) = arena.get_variable_statement(statement) else {
            continue;
        };
        for &declaration in &data.declarations.nodes {
            let Some(decl) = arena.get_variable_declaration(declaration) else {
                continue;
            };
            if arena.identifier_text(decl.name) == Some(name)
                && arena.is_kind(decl.initializer, SyntaxKind::ObjectLiteralExpression)
            {
                return Some(decl.initializer);
            }
        }
    }
    None
}

/// `./app.config` relative to `src/main.ts` is `src/app.config.ts`.
fn resolve_relative_specifier(base_file: &str, specifier: &str) -> String {
    let mut segments: Vec<&str> = base_file.split('/').collect();
    segments.pop();
    for segment in specifier.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let mut path = segments.join("/");
    if !path.ends_with(".ts") {
        path.push_str(".ts");
    }
    path
}

fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier == "."
}

/// Classify the bootstrap call's config argument: inline object literal,
/// same-file variable, or a variable one relative-import hop away.
/// Anything else is unresolvable without a type checker; that is a
/// NotFound value, not an error.
pub fn resolve_bootstrap_config(
    source: &SourceFile,
    tree: &dyn FileTree,
    bootstrap_call: NodeIndex,
) -> Resolved<AppConfig> {
    let arena = source.arena();
    let Some(&config_arg) = arena
        .get_call_expr(bootstrap_call)
        .and_then(|c| c.arguments.nodes.get(1))
    else {
        return Resolved::NotFound("bootstrap call has no config argument".to_string());
    };

    if arena.is_kind(config_arg, SyntaxKind::ObjectLiteralExpression) {
        return Resolved::Found(AppConfig {
            file_path: source.file_name().to_string(),
            external: None,
            node: config_arg,
        });
    }

    let Some(name) = arena.identifier_text(config_arg) else {
        return Resolved::NotFound("config argument is neither an object literal nor an identifier".to_string());
    };

    if let Some(node) = top_level_object_literal(source, name) {
        return Resolved::Found(AppConfig {
            file_path: source.file_name().to_string(),
            external: None,
            node,
        });
    }

    let Some(binding) = collect_imports(source)
        .into_iter()
        .find(|b| b.local_name == name && !b.is_namespace())
    else {
        return Resolved::NotFound(format!("{name} is neither declared nor imported here"));
    };
    if !is_relative_specifier(&binding.module) {
        return Resolved::NotFound(format!(
            "{name} comes from non-relative specifier '{}'",
            binding.module
        ));
    }

    let target_path = resolve_relative_specifier(source.file_name(), &binding.module);
    let text = match tree.read_text(&target_path) {
        Ok(text) => text,
        Err(_) => return Resolved::NotFound(format!("cannot read {target_path}")),
    };
    let external = SourceFile::parse(target_path.clone(), text);
    // One hop only; no transitive resolution in the target file.
    match top_level_object_literal(&external, binding.exported_name()) {
        Some(node) => Resolved::Found(AppConfig { file_path: target_path, external: Some(external), node }),
        None => Resolved::NotFound(format!(
            "{} has no object-literal variable named {}",
            target_path,
            binding.exported_name()
        )),
    }
}

/// The `providers` array of a config object literal.
pub fn providers_array(source: &SourceFile, config: NodeIndex) -> Option<NodeIndex> {
    let arena = source.arena();
    let property = metadata_field(source, config, "providers")?;
    let initializer = arena.get_property_assignment(property)?.initializer;
    arena
        .is_kind(initializer, SyntaxKind::ArrayLiteralExpression)
        .then_some(initializer)
}

fn commit_changes(
    tree: &mut dyn FileTree,
    path: &str,
    changes: &[Change],
) -> Result<(), EditError> {
    if changes.iter().all(Change::is_noop) {
        return Ok(());
    }
    let mut recorder = tree.begin_update(path)?;
    recorder.record_all(changes);
    tree.commit_update(recorder)
}

/// Synthesize the `providers` property on a config object that lacks one.
fn add_providers_field(source: &SourceFile, config: NodeIndex, expression: &str) -> Change {
    let arena = source.arena();
    let Some(properties) = arena.get_literal_expr(config).map(|o| &o.elements) else {
        return Change::NoOp;
    };
    match properties.nodes.last() {
        None => {
            let position = source.node_end(config).saturating_sub(1);
            Change::insert(position, format!(" providers: [{expression}] "))
        }
        Some(&last) => Change::insert(source.node_end(last), format!(", providers: [{expression}]")),
    }
}

/// Register `function_name(args)` from `module` as a root provider.
///
/// Standalone bootstrap: the call lands in the config's providers array,
/// following the config across one relative import if needed; a missing
/// second argument or providers field is synthesized in place. Module
/// bootstrap: the call joins the `@NgModule` providers metadata.
pub fn add_functional_provider(
    tree: &mut dyn FileTree,
    path: &str,
    function_name: &str,
    module: &str,
    args: &str,
) -> Result<(), EditError> {
    let source = SourceFile::parse(path, tree.read_text(path)?);
    let mut context = CodeBlockContext::new();
    let token = context.external(function_name, module);
    let block = PendingCodeBlock::new(format!("{token}({args})"), context);

    let bootstrap = match find_bootstrap(&source) {
        Resolved::Found(bootstrap) => bootstrap,
        Resolved::NotFound(reason) => {
            return Err(EditError::NotFound {
                what: format!("bootstrap call ({reason})"),
                path: path.to_string(),
            });
        }
    };

    match bootstrap {
        Bootstrap::NgModule(_) => {
            tracing::debug!(path, function_name, "adding provider to module bootstrap");
            let rendered = block.render(&source);
            let mut changes = add_symbol_to_decorator_metadata(
                &source,
                NG_MODULE_DECORATOR,
                NG_CORE,
                "providers",
                &rendered.expression,
                None,
            );
            if !changes.is_empty() {
                changes.extend(rendered.imports);
            }
            commit_changes(tree, path, &changes)
        }
        Bootstrap::Standalone(call) => {
            match resolve_bootstrap_config(&source, tree, call) {
                Resolved::Found(config) => {
                    tracing::debug!(
                        path,
                        config_path = %config.file_path,
                        function_name,
                        "adding provider to standalone config"
                    );
                    let target = config.external.as_ref().unwrap_or(&source);
                    let rendered = block.render(target);
                    let change = match providers_array(target, config.node) {
                        Some(array) => {
                            append_to_array_literal(target, array, &rendered.expression)
                        }
                        None => add_providers_field(target, config.node, &rendered.expression),
                    };
                    let mut changes = vec![change];
                    changes.extend(rendered.imports);
                    commit_changes(tree, &config.file_path, &changes)
                }
                Resolved::NotFound(reason) => {
                    let arena = source.arena();
                    let has_config_arg = arena
                        .get_call_expr(call)
                        .is_some_and(|c| c.arguments.nodes.len() > 1);
                    if has_config_arg {
                        // Second argument exists but cannot be followed
                        // syntactically; a type checker would be needed.
                        return Err(EditError::CannotStaticallyAnalyze {
                            path: path.to_string(),
                            reason,
                        });
                    }
                    let rendered = block.render(&source);
                    let position = source.node_end(call).saturating_sub(1);
                    let mut changes = vec![Change::insert(
                        position,
                        format!(", {{ providers: [{}] }}", rendered.expression),
                    )];
                    changes.extend(rendered.imports);
                    commit_changes(tree, path, &changes)
                }
            }
        }
    }
}

/// True when the providers array already contains `expression`, compared
/// with one-line normalization.
pub fn has_provider(source: &SourceFile, providers: NodeIndex, expression: &str) -> bool {
    let arena = source.arena();
    let Some(elements) = arena.get_literal_expr(providers).map(|a| &a.elements) else {
        return false;
    };
    let wanted = one_line(expression);
    elements.nodes.iter().any(|&e| one_line(source.node_text(e)) == wanted)
}
