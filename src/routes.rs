//! Route-array location and wildcard-aware route insertion.

use crate::ast_utils::{decorator_metadata, metadata_field};
use crate::change::Change;
use crate::diagnostics::{EditError, Resolved};
use crate::parser::NodeIndex;
use crate::scanner::SyntaxKind;
use crate::source_file::SourceFile;

const WILDCARD_PATH: &str = "**";

/// The `RouterModule.forRoot(...)` / `forChild(...)` call registered in
/// the `imports` field of the module decorator's metadata.
pub fn router_module_call(
    source: &SourceFile,
    decorator_name: &str,
    decorator_module: &str,
    router_module_name: &str,
) -> Resolved<NodeIndex> {
    let arena = source.arena();
    let Some(&metadata) = decorator_metadata(source, decorator_name, decorator_module).first()
    else {
        return Resolved::NotFound(format!("no {decorator_name} decorator metadata"));
    };
    let Some(imports) = metadata_field(source, metadata, "imports") else {
        return Resolved::NotFound("metadata has no imports field".to_string());
    };
    let Some(initializer) = arena.get_property_assignment(imports).map(|p| p.initializer) else {
        return Resolved::NotFound("imports field has no initializer".to_string());
    };
    let Some(elements) = arena.get_literal_expr(initializer).map(|a| &a.elements) else {
        return Resolved::NotFound("imports field is not an array".to_string());
    };
    for &element in &elements.nodes {
        let Some(call) = arena.get_call_expr(element) else {
            continue;
        };
        let base_matches = arena
            .get_access_expr(call.expression)
            .is_some_and(|access| arena.identifier_text(access.expression) == Some(router_module_name));
        if base_matches {
            return Resolved::Found(element);
        }
    }
    Resolved::NotFound(format!("no {router_module_name} registration call in imports"))
}

/// Resolve a registration call's first argument to its routes array:
/// either an inline array literal or an identifier bound to a same-file
/// top-level variable with an array-literal initializer.
pub fn routes_array(
    source: &SourceFile,
    registration_call: NodeIndex,
) -> Result<NodeIndex, EditError> {
    let arena = source.arena();
    let path = source.file_name();
    let line = source.line_of(source.node_start(registration_call));
    let Some(&first_arg) = arena
        .get_call_expr(registration_call)
        .and_then(|c| c.arguments.nodes.first())
    else {
        return Err(EditError::NotFoundAt {
            what: "route declaration array".to_string(),
            path: path.to_string(),
            line,
        });
    };

    if arena.is_kind(first_arg, SyntaxKind::ArrayLiteralExpression) {
        return Ok(first_arg);
    }
    if let Some(name) = arena.identifier_text(first_arg) {
        for &statement in arena.statements(source.root()) {
            let Some(data) = arena.get_variable_statement(statement) else {
                continue;
            };
            for &declaration in &data.declarations.nodes {
                let Some(decl) = arena.get_variable_declaration(declaration) else {
                    continue;
                };
                if arena.identifier_text(decl.name) == Some(name)
                    && arena.is_kind(decl.initializer, SyntaxKind::ArrayLiteralExpression)
                {
                    return Ok(decl.initializer);
                }
            }
        }
    }
    Err(EditError::NotFoundAt {
        what: "route declaration array".to_string(),
        path: path.to_string(),
        line,
    })
}

/// Does a route object literal declare `path: '**'`?
fn is_wildcard_route(source: &SourceFile, route: NodeIndex) -> bool {
    let arena = source.arena();
    if !arena.is_kind(route, SyntaxKind::ObjectLiteralExpression) {
        return false;
    }
    metadata_field(source, route, "path").is_some_and(|property| {
        arena
            .get_property_assignment(property)
            .and_then(|p| arena.string_literal_text(p.initializer))
            == Some(WILDCARD_PATH)
    })
}

/// Leading newline-plus-indentation pattern of the array's interior, used
/// to place the new route on its own matching line.
fn array_indentation(source: &SourceFile, routes_array: NodeIndex) -> String {
    let text = source.node_text(routes_array);
    let Some(at) = text.find('\n') else {
        return " ".to_string();
    };
    let newline_start = if at > 0 && text.as_bytes()[at - 1] == b'\r' { at - 1 } else { at };
    let mut end = at + 1;
    let bytes = text.as_bytes();
    while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
        end += 1;
    }
    text[newline_start..end].to_string()
}

/// Insert `route_literal` into the routes array of `registration_call`,
/// keeping a trailing `'**'` catch-all route last.
pub fn insert_route(
    source: &SourceFile,
    registration_call: NodeIndex,
    route_literal: &str,
) -> Result<Change, EditError> {
    let arena = source.arena();
    let array = routes_array(source, registration_call)?;
    let Some(elements) = arena.get_literal_expr(array).map(|a| &a.elements) else {
        return Err(EditError::NotFoundAt {
            what: "route declaration array".to_string(),
            path: source.file_name().to_string(),
            line: source.line_of(source.node_start(registration_call)),
        });
    };

    let Some(&last) = elements.nodes.last() else {
        // Sole element, just inside the brackets.
        let position = source.node_start(array) + 1;
        return Ok(Change::insert(position, route_literal));
    };

    let route_text = format!("{}{route_literal}", array_indentation(source, array));
    if is_wildcard_route(source, last) {
        // Anchor at the wildcard's full start so the new route lands after
        // the preceding comma, on its own line.
        let position = arena.get(last).map(|n| n.pos).unwrap_or_else(|| source.node_start(last));
        Ok(Change::insert(position, format!("{route_text},")))
    } else {
        Ok(Change::insert(source.node_end(last), format!(",{route_text}")))
    }
}
