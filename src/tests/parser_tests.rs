//! Tests for the parser: tree shape, offsets, flags, and recovery.

use crate::parser::NodeFlags;
use crate::scanner::SyntaxKind;
use crate::test_fixtures::parse;

#[test]
fn test_named_import_declaration() {
    let source = parse("import { Component, OnInit as Init } from '@angular/core';\n");
    let arena = source.arena();
    let statements = arena.statements(source.root());
    assert_eq!(statements.len(), 1);
    let decl = arena.get_import_decl(statements[0]).unwrap();
    assert_eq!(arena.string_literal_text(decl.module_specifier), Some("@angular/core"));
    let clause = arena.get_import_clause(decl.import_clause).unwrap();
    let named = arena.get_named_bindings(clause.named_bindings).unwrap();
    assert_eq!(named.elements.nodes.len(), 2);
    let first = arena.get_specifier(named.elements.nodes[0]).unwrap();
    assert!(first.property_name.is_none());
    assert_eq!(arena.identifier_text(first.name), Some("Component"));
    let second = arena.get_specifier(named.elements.nodes[1]).unwrap();
    assert_eq!(arena.identifier_text(second.property_name), Some("OnInit"));
    assert_eq!(arena.identifier_text(second.name), Some("Init"));
}

#[test]
fn test_default_and_namespace_imports() {
    let source = parse("import def from './a';\nimport * as ns from './b';\n");
    let arena = source.arena();
    let statements = arena.statements(source.root());
    assert_eq!(statements.len(), 2);

    let default_clause = arena
        .get_import_decl(statements[0])
        .and_then(|d| arena.get_import_clause(d.import_clause))
        .unwrap();
    assert_eq!(arena.identifier_text(default_clause.name), Some("def"));
    assert!(default_clause.named_bindings.is_none());

    let ns_clause = arena
        .get_import_decl(statements[1])
        .and_then(|d| arena.get_import_clause(d.import_clause))
        .unwrap();
    assert!(arena.is_kind(ns_clause.named_bindings, SyntaxKind::NamespaceImport));
    let ns = arena.get_specifier(ns_clause.named_bindings).unwrap();
    assert_eq!(arena.identifier_text(ns.name), Some("ns"));
}

#[test]
fn test_side_effect_and_type_only_imports() {
    let source = parse("import './polyfills';\nimport type { Foo } from './foo';\n");
    let arena = source.arena();
    let statements = arena.statements(source.root());

    let bare = arena.get_import_decl(statements[0]).unwrap();
    assert!(bare.import_clause.is_none());
    assert_eq!(arena.string_literal_text(bare.module_specifier), Some("./polyfills"));

    let node = arena.get(statements[1]).unwrap();
    assert!(node.node_flags().contains(NodeFlags::TYPE_ONLY));
}

#[test]
fn test_variable_statement_flags_and_initializer() {
    let source = parse("export const routes = [];\nlet x = 1, y;\n");
    let arena = source.arena();
    let statements = arena.statements(source.root());

    let first = arena.get(statements[0]).unwrap();
    assert!(first.node_flags().contains(NodeFlags::EXPORT));
    assert!(first.node_flags().contains(NodeFlags::CONST));
    let decls = &arena.get_variable_statement(statements[0]).unwrap().declarations;
    assert_eq!(decls.nodes.len(), 1);
    let decl = arena.get_variable_declaration(decls.nodes[0]).unwrap();
    assert_eq!(arena.identifier_text(decl.name), Some("routes"));
    assert!(arena.is_kind(decl.initializer, SyntaxKind::ArrayLiteralExpression));

    let second = arena.get(statements[1]).unwrap();
    assert!(second.node_flags().contains(NodeFlags::LET));
    let decls = &arena.get_variable_statement(statements[1]).unwrap().declarations;
    assert_eq!(decls.nodes.len(), 2);
}

#[test]
fn test_decorated_class() {
    let text = "import { NgModule } from '@angular/core';\n\
                @NgModule({ declarations: [] })\n\
                export class AppModule {}\n";
    let source = parse(text);
    let arena = source.arena();
    let statements = arena.statements(source.root());
    assert_eq!(statements.len(), 2);

    let class = arena.get_class(statements[1]).unwrap();
    assert_eq!(arena.identifier_text(class.name), Some("AppModule"));
    assert_eq!(class.decorators.nodes.len(), 1);
    let node = arena.get(statements[1]).unwrap();
    assert!(node.node_flags().contains(NodeFlags::EXPORT));

    let decorator = arena.get_wrapped(class.decorators.nodes[0]).unwrap();
    let call = arena.get_call_expr(decorator.expression).unwrap();
    assert_eq!(arena.identifier_text(call.expression), Some("NgModule"));
    assert_eq!(call.arguments.nodes.len(), 1);
    assert!(arena.is_kind(call.arguments.nodes[0], SyntaxKind::ObjectLiteralExpression));
}

#[test]
fn test_class_members() {
    let text = "class C {\n\
                  title = 'app';\n\
                  private count: number = 0;\n\
                  ngOnInit(): void { this.count++; }\n\
                }\n";
    let source = parse(text);
    let arena = source.arena();
    let class = arena.get_class(arena.statements(source.root())[0]).unwrap();
    assert_eq!(class.members.nodes.len(), 3);
    assert!(arena.is_kind(class.members.nodes[0], SyntaxKind::PropertyDeclaration));
    assert!(arena.is_kind(class.members.nodes[1], SyntaxKind::PropertyDeclaration));
    assert!(arena.is_kind(class.members.nodes[2], SyntaxKind::MethodDeclaration));
    let title = arena.get_class_member(class.members.nodes[0]).unwrap();
    assert_eq!(arena.identifier_text(title.name), Some("title"));
    assert!(arena.is_kind(title.initializer, SyntaxKind::StringLiteral));
}

#[test]
fn test_node_text_skips_leading_trivia() {
    let source = parse("// leading comment\nconst a = 1;\n");
    let statement = source.arena().statements(source.root())[0];
    assert!(source.node_full_text(statement).starts_with("// leading comment"));
    assert!(source.node_text(statement).starts_with("const a"));
}

#[test]
fn test_call_and_property_access() {
    let source = parse("platformBrowserDynamic().bootstrapModule(AppModule);\n");
    let arena = source.arena();
    let statement = arena.statements(source.root())[0];
    let expression = arena.get_wrapped(statement).unwrap().expression;
    let outer = arena.get_call_expr(expression).unwrap();
    let access = arena.get_access_expr(outer.expression).unwrap();
    assert_eq!(arena.identifier_text(access.argument), Some("bootstrapModule"));
    assert!(arena.is_kind(access.expression, SyntaxKind::CallExpression));
    assert_eq!(outer.arguments.nodes.len(), 1);
}

#[test]
fn test_object_literal_shapes() {
    let source = parse("const o = { a: 1, 'b': two, ...rest, shorthand };\n");
    let arena = source.arena();
    let decl = arena
        .get_variable_statement(arena.statements(source.root())[0])
        .map(|v| v.declarations.nodes[0])
        .unwrap();
    let object = arena.get_variable_declaration(decl).unwrap().initializer;
    let elements = &arena.get_literal_expr(object).unwrap().elements;
    assert_eq!(elements.nodes.len(), 4);
    assert!(arena.is_kind(elements.nodes[0], SyntaxKind::PropertyAssignment));
    assert!(arena.is_kind(elements.nodes[1], SyntaxKind::PropertyAssignment));
    assert!(arena.is_kind(elements.nodes[2], SyntaxKind::SpreadAssignment));
    assert!(arena.is_kind(elements.nodes[3], SyntaxKind::ShorthandPropertyAssignment));
}

#[test]
fn test_parent_links() {
    let source = parse("const o = { a: [1] };\n");
    let arena = source.arena();
    let statement = arena.statements(source.root())[0];
    for &child in &arena.children(statement) {
        assert_eq!(arena.parent(child), statement);
    }
}

#[test]
fn test_export_declaration() {
    let source = parse("export { a, b as c } from './other';\n");
    let arena = source.arena();
    let statement = arena.statements(source.root())[0];
    assert!(arena.is_kind(statement, SyntaxKind::ExportDeclaration));
    let data = arena.get_named_bindings(statement).unwrap();
    assert_eq!(data.elements.nodes.len(), 2);
    assert_eq!(arena.string_literal_text(data.module_specifier), Some("./other"));
}

#[test]
fn test_malformed_input_recovers() {
    let source = parse("const = ;\nclass {\nimport from\n]]]\n");
    assert!(!source.diagnostics().is_empty());
    // Still yields a tree rooted at a source file.
    assert!(source.arena().get_source_file(source.root()).is_some());
}

#[test]
fn test_deterministic_reparse() {
    let text = "@NgModule({ imports: [A, B] })\nclass M {}\n";
    let first = parse(text);
    let second = parse(text);
    let a = crate::syntax::source_nodes(first.arena(), first.root());
    let b = crate::syntax::source_nodes(second.arena(), second.root());
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(first.arena().kind(*x), second.arena().kind(*y));
        assert_eq!(first.node_span(*x), second.node_span(*y));
    }
}

#[test]
fn test_arrow_functions() {
    let source = parse("const f = (a, b) => a + b;\nconst g = x => x;\n");
    let arena = source.arena();
    for &statement in arena.statements(source.root()) {
        let decl = arena.get_variable_statement(statement).unwrap().declarations.nodes[0];
        let initializer = arena.get_variable_declaration(decl).unwrap().initializer;
        assert!(arena.is_kind(initializer, SyntaxKind::ArrowFunction));
    }
}

#[test]
fn test_line_of() {
    let source = parse("a;\nb;\nc;\n");
    assert_eq!(source.line_of(0), 1);
    assert_eq!(source.line_of(3), 2);
    assert_eq!(source.line_of(6), 3);
}

#[test]
fn test_bom_is_stripped() {
    let source = crate::source_file::SourceFile::parse("file.ts", "\u{feff}const a = 1;".to_string());
    assert!(source.text().starts_with("const"));
    let statement = source.arena().statements(source.root())[0];
    assert_eq!(source.node_start(statement), 0);
}
