//! AST-based TypeScript source transformation.
//!
//! Parses TypeScript files into an offset-accurate tree and applies
//! positional text edits against them: locate a semantic construct
//! (decorator metadata, a bootstrap call, a routes array), synthesize a
//! minimal `Change`, record it, and commit the merged result back to a
//! file tree. Files are never re-emitted from the tree; original
//! formatting survives untouched outside the edited spans.

// Shared test fixtures
#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
pub mod test_fixtures;

// Scanner module - token definitions, scanning implementation, and character codes
pub mod scanner;
pub use scanner::char_codes;
pub use scanner::scanner_impl;
pub use scanner::{ScannerSnapshot, ScannerState, SyntaxKind, skip_trivia};
#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;

// Parser - arena-backed thin nodes and recursive descent over the
// supported TypeScript subset
pub mod parser;
pub use parser::{NodeArena, NodeFlags, NodeIndex, ParserState};
#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod parser_tests;

// Syntax utilities - node matching and tree walks
pub mod syntax;
pub use syntax::{NodeMatcher, find_node, find_nodes, source_nodes};
#[cfg(test)]
#[path = "tests/syntax_tests.rs"]
mod syntax_tests;

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - the public error enum and parser diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, EditError, Resolved};

// Source file - text plus tree, with trivia-aware slicing
pub mod source_file;
pub use source_file::SourceFile;

// Change - positional edit values
pub mod change;
pub use change::Change;

// Tree - the file-tree abstraction and the edit recorder/committer
pub mod tree;
pub use tree::{FileTree, MemoryTree, UpdateRecorder};
#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tree_tests;

// Imports - binding scans and import-insertion synthesis
pub mod imports;
pub use imports::{ImportBinding, ImportedName, detect_line_ending, insert_import};
#[cfg(test)]
#[path = "tests/imports_tests.rs"]
mod imports_tests;

// AST utilities - decorator metadata location and symbol insertion
pub mod ast_utils;
pub use ast_utils::{add_symbol_to_decorator_metadata, decorator_metadata, metadata_field};
#[cfg(test)]
#[path = "tests/ast_utils_tests.rs"]
mod ast_utils_tests;

// Routes - route-array location and wildcard-aware insertion
pub mod routes;
pub use routes::{insert_route, router_module_call, routes_array};
#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod routes_tests;

// Standalone - bootstrap location, config resolution, provider insertion
pub mod standalone;
pub use standalone::{Bootstrap, add_functional_provider, find_bootstrap, resolve_bootstrap_config};
#[cfg(test)]
#[path = "tests/standalone_tests.rs"]
mod standalone_tests;

// Code blocks - deferred fragments with placeholder imports
pub mod code_block;
pub use code_block::{CodeBlockContext, PendingCodeBlock};
#[cfg(test)]
#[path = "tests/code_block_tests.rs"]
mod code_block_tests;

// Rules - composition of tree transformations
pub mod rules;
pub use rules::{Rule, chain, noop, rule};
#[cfg(test)]
#[path = "tests/rules_tests.rs"]
mod rules_tests;

// Tracing configuration (TSEDIT_LOG / TSEDIT_LOG_FORMAT)
pub mod tracing_config;
pub use tracing_config::init_tracing;
