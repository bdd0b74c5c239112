//! Node query layer: kind/predicate matching and tree walks over a
//! `NodeArena`.

use std::collections::VecDeque;

use crate::parser::{NodeArena, NodeIndex};
use crate::scanner::{SyntaxKind, skip_trivia};

/// What `find_nodes` selects. Matching is always explicit; there is no
/// structural duck-typing of nodes.
pub enum NodeMatcher<'a> {
    ByKind(SyntaxKind),
    ByPredicate(&'a dyn Fn(&NodeArena, NodeIndex) -> bool),
}

impl NodeMatcher<'_> {
    pub fn matches(&self, arena: &NodeArena, node: NodeIndex) -> bool {
        match self {
            NodeMatcher::ByKind(kind) => arena.is_kind(node, *kind),
            NodeMatcher::ByPredicate(predicate) => predicate(arena, node),
        }
    }
}

/// Collect matching nodes in document order (depth-first, source order).
///
/// `max = Some(0)` yields nothing; `None` is unbounded. With
/// `recursive = false` the walk does not descend into a matched node, so
/// nested matches are shadowed by their outermost ancestor.
pub fn find_nodes(
    arena: &NodeArena,
    root: NodeIndex,
    matcher: &NodeMatcher<'_>,
    max: Option<usize>,
    recursive: bool,
) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    if root.is_none() || max == Some(0) {
        return found;
    }
    collect(arena, root, matcher, max, recursive, &mut found);
    found
}

fn collect(
    arena: &NodeArena,
    node: NodeIndex,
    matcher: &NodeMatcher<'_>,
    max: Option<usize>,
    recursive: bool,
    found: &mut Vec<NodeIndex>,
) {
    let full = |found: &Vec<NodeIndex>| max.is_some_and(|m| found.len() >= m);
    if full(found) {
        return;
    }
    let matched = matcher.matches(arena, node);
    if matched {
        found.push(node);
    }
    if (recursive || !matched) && !full(found) {
        for child in arena.children(node) {
            collect(arena, child, matcher, max, recursive, found);
            if full(found) {
                return;
            }
        }
    }
}

/// First document-order node of `kind` whose trivia-skipped source text
/// equals `exact_text`.
pub fn find_node(
    arena: &NodeArena,
    text: &str,
    root: NodeIndex,
    kind: SyntaxKind,
    exact_text: &str,
) -> Option<NodeIndex> {
    if root.is_none() {
        return None;
    }
    if arena.is_kind(root, kind) {
        let node = arena.get(root)?;
        let start = skip_trivia(text, node.pos as usize, node.end as usize);
        if &text[start..node.end as usize] == exact_text {
            return Some(root);
        }
    }
    for child in arena.children(root) {
        if let Some(found) = find_node(arena, text, child, kind, exact_text) {
            return Some(found);
        }
    }
    None
}

/// All nodes reachable from `root`, breadth-first.
pub fn source_nodes(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    let mut nodes = Vec::new();
    if root.is_none() {
        return nodes;
    }
    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        nodes.push(node);
        for child in arena.children(node) {
            queue.push_back(child);
        }
    }
    nodes
}
