//! Tests for import scanning and import insertion.

use crate::change::Change;
use crate::imports::{
    ImportedName, collect_imports, detect_line_ending, has_top_level_identifier, import_map,
    insert_import, is_type_only_import, non_colliding_name,
};
use crate::scanner::SyntaxKind;
use crate::test_fixtures::{apply_changes, parse};

#[test]
fn test_collect_imports_shapes() {
    let source = parse(
        "import def from './a';\n\
         import * as ns from './b';\n\
         import { x, y as z } from './c';\n",
    );
    let bindings = collect_imports(&source);
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings[0].local_name, "def");
    assert_eq!(bindings[0].name, ImportedName::Default);
    assert_eq!(bindings[1].local_name, "ns");
    assert!(bindings[1].is_namespace());
    assert_eq!(bindings[2].local_name, "x");
    assert_eq!(bindings[2].exported_name(), "x");
    assert_eq!(bindings[3].local_name, "z");
    assert_eq!(bindings[3].exported_name(), "y");
    assert_eq!(bindings[3].module, "./c");
}

#[test]
fn test_import_map_keys_on_local_names() {
    let source = parse(
        "import * as ns from './b';\n\
         import { x as y } from './c';\n",
    );
    let map = import_map(&source);
    assert_eq!(map.get("ns").map(String::as_str), Some("./b"));
    assert_eq!(map.get("y").map(String::as_str), Some("./c"));
    assert!(!map.contains_key("x"));
    // Declaration order is preserved.
    assert_eq!(map.keys().collect::<Vec<_>>(), ["ns", "y"]);
}

#[test]
fn test_type_only_import_flag() {
    let source = parse(
        "import type { Props } from './props';\n\
         import { Component } from '@angular/core';\n",
    );
    let arena = source.arena();
    let declarations: Vec<_> = arena
        .statements(source.root())
        .iter()
        .copied()
        .filter(|&s| arena.is_kind(s, SyntaxKind::ImportDeclaration))
        .collect();
    assert_eq!(declarations.len(), 2);
    assert!(is_type_only_import(&source, declarations[0]));
    assert!(!is_type_only_import(&source, declarations[1]));
}

#[test]
fn test_insert_into_existing_named_import() {
    let text = "import { a } from 'm';\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "m", false, None);
    assert_eq!(apply_changes(text, &[change]), "import { a, b } from 'm';\n");
}

#[test]
fn test_existing_symbol_is_noop() {
    let source = parse("import { a, b } from 'm';\n");
    assert!(insert_import(&source, "b", "m", false, None).is_noop());
}

#[test]
fn test_aliased_existing_symbol_is_noop() {
    let source = parse("import { b as c } from 'm';\n");
    assert!(insert_import(&source, "b", "m", false, None).is_noop());
}

#[test]
fn test_namespace_import_suppresses_insertion() {
    let source = parse("import * as foo from '@angular/core';\nfoo.x();\n");
    let change = insert_import(&source, "Component", "@angular/core", false, None);
    assert!(change.is_noop());
}

#[test]
fn test_new_import_after_last_import() {
    let text = "import { a } from './a';\nconst x = 1;\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "./b", false, None);
    assert_eq!(
        apply_changes(text, &[change]),
        "import { a } from './a';\nimport { b } from './b';\nconst x = 1;\n"
    );
}

#[test]
fn test_new_import_after_use_strict() {
    let text = "'use strict';\nconst x = 1;\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "./b", false, None);
    assert_eq!(
        apply_changes(text, &[change]),
        "'use strict';\nimport { b } from './b';\nconst x = 1;\n"
    );
}

#[test]
fn test_new_import_into_empty_file() {
    let text = "bootstrapApplication(App);\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "./b", false, None);
    assert_eq!(
        apply_changes(text, &[change]),
        "import { b } from './b';\nbootstrapApplication(App);\n"
    );
}

#[test]
fn test_default_import_mode() {
    let text = "";
    let source = parse(text);
    let change = insert_import(&source, "React", "react", true, None);
    assert_eq!(apply_changes(text, &[change]), "import React from 'react';\n");
}

#[test]
fn test_default_only_import_falls_back_to_from_anchor() {
    let text = "import def from 'm';\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "m", false, None);
    // No named brace to extend; the anchor is the `from` keyword.
    assert_eq!(change.order(), Some(text.find("from").unwrap() as u32));
}

#[test]
fn test_alias_in_generated_import() {
    let text = "import { a } from 'm';\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "m", false, Some("b_alias"));
    assert_eq!(
        apply_changes(text, &[change]),
        "import { a, b as b_alias } from 'm';\n"
    );
}

#[test]
fn test_crlf_detection_carries_into_new_import() {
    let text = "import { a } from './a';\r\nconst x = 1;\r\n";
    let source = parse(text);
    let change = insert_import(&source, "b", "./b", false, None);
    let updated = apply_changes(text, &[change]);
    assert!(updated.contains("';\r\nimport { b } from './b';\r\n"));
}

#[test]
fn test_detect_line_ending_majority() {
    assert_eq!(detect_line_ending("a\r\nb\r\nc\n"), "\r\n");
    assert_eq!(detect_line_ending("a\nb\nc\r\n"), "\n");
    #[cfg(not(windows))]
    assert_eq!(detect_line_ending("no breaks"), "\n");
}

#[test]
fn test_top_level_identifier_collision() {
    let source = parse(
        "import { BrowserModule } from 'other';\n\
         const count = 1;\n\
         class Widget {}\n",
    );
    assert!(has_top_level_identifier(&source, "BrowserModule", "@angular/platform-browser"));
    assert!(has_top_level_identifier(&source, "count", "m"));
    assert!(has_top_level_identifier(&source, "Widget", "m"));
    assert!(!has_top_level_identifier(&source, "Missing", "m"));
    // Bindings from the module being imported from are not collisions.
    assert!(!has_top_level_identifier(&source, "BrowserModule", "other"));
}

#[test]
fn test_non_colliding_name_appends_alias_suffix() {
    let source = parse("import { BrowserModule } from 'other';\n");
    assert_eq!(
        non_colliding_name(&source, "BrowserModule", "@angular/platform-browser"),
        "BrowserModule_alias"
    );
    assert_eq!(non_colliding_name(&source, "CommonModule", "@angular/common"), "CommonModule");
}

#[test]
fn test_insert_import_returns_insert_change() {
    let source = parse("");
    match insert_import(&source, "a", "m", false, None) {
        Change::Insert { pos, .. } => assert_eq!(pos, 0),
        other => panic!("expected insert, got {other:?}"),
    }
}
