//! Tests for the node query layer.

use crate::scanner::SyntaxKind;
use crate::syntax::{NodeMatcher, find_node, find_nodes, source_nodes};
use crate::test_fixtures::parse;

const NESTED: &str = "const o = { a: { b: { c: { d: 1 } } } };\n";

#[test]
fn test_find_nodes_non_recursive_stops_at_match() {
    let source = parse(NESTED);
    let matcher = NodeMatcher::ByKind(SyntaxKind::ObjectLiteralExpression);
    let found = find_nodes(source.arena(), source.root(), &matcher, None, false);
    assert_eq!(found.len(), 1);
}

#[test]
fn test_find_nodes_recursive_collects_nested_in_document_order() {
    let source = parse(NESTED);
    let matcher = NodeMatcher::ByKind(SyntaxKind::ObjectLiteralExpression);
    let found = find_nodes(source.arena(), source.root(), &matcher, None, true);
    assert_eq!(found.len(), 4);
    // Document order: outermost literal first, each start strictly
    // increasing.
    for pair in found.windows(2) {
        assert!(source.node_start(pair[0]) < source.node_start(pair[1]));
    }
}

#[test]
fn test_find_nodes_max() {
    let source = parse(NESTED);
    let matcher = NodeMatcher::ByKind(SyntaxKind::ObjectLiteralExpression);
    assert!(find_nodes(source.arena(), source.root(), &matcher, Some(0), true).is_empty());
    assert_eq!(
        find_nodes(source.arena(), source.root(), &matcher, Some(2), true).len(),
        2
    );
}

#[test]
fn test_find_nodes_by_predicate() {
    let source = parse("foo(); bar(); foo();\n");
    let arena = source.arena();
    let predicate = |arena: &crate::parser::NodeArena, node: crate::parser::NodeIndex| {
        arena
            .get_call_expr(node)
            .is_some_and(|call| arena.identifier_text(call.expression) == Some("foo"))
    };
    let matcher = NodeMatcher::ByPredicate(&predicate);
    let found = find_nodes(arena, source.root(), &matcher, None, true);
    assert_eq!(found.len(), 2);
}

#[test]
fn test_find_node_exact_text() {
    let source = parse("use(alpha, beta, alpha);\n");
    let found = find_node(
        source.arena(),
        source.text(),
        source.root(),
        SyntaxKind::Identifier,
        "beta",
    );
    let found = found.unwrap();
    assert_eq!(source.node_text(found), "beta");

    // First document-order match wins for duplicates.
    let first_alpha = find_node(
        source.arena(),
        source.text(),
        source.root(),
        SyntaxKind::Identifier,
        "alpha",
    )
    .unwrap();
    assert_eq!(source.node_start(first_alpha), 4);
}

#[test]
fn test_find_node_no_match() {
    let source = parse("const a = 1;\n");
    assert!(
        find_node(
            source.arena(),
            source.text(),
            source.root(),
            SyntaxKind::Identifier,
            "missing"
        )
        .is_none()
    );
}

#[test]
fn test_source_nodes_breadth_first() {
    let source = parse(NESTED);
    let nodes = source_nodes(source.arena(), source.root());
    assert_eq!(nodes[0], source.root());
    // Every node (other than the root) appears after its parent.
    let arena = source.arena();
    for (i, &node) in nodes.iter().enumerate().skip(1) {
        let parent = arena.parent(node);
        let parent_at = nodes.iter().position(|&n| n == parent).unwrap();
        assert!(parent_at < i);
    }
}
