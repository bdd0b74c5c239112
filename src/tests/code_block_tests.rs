//! Tests for deferred code blocks and placeholder rendering.

use crate::code_block::{CodeBlockContext, PendingCodeBlock};
use crate::test_fixtures::{apply_changes, parse};

#[test]
fn test_render_substitutes_plain_name() {
    let text = "import { a } from 'm';\n";
    let source = parse(text);
    let mut context = CodeBlockContext::new();
    let token = context.external("provideRouter", "@angular/router");
    let block = PendingCodeBlock::new(format!("{token}(routes)"), context);
    let rendered = block.render(&source);
    assert_eq!(rendered.expression, "provideRouter(routes)");
    let updated = apply_changes(text, &rendered.imports);
    assert!(updated.contains("import { provideRouter } from '@angular/router';"));
}

#[test]
fn test_render_aliases_colliding_symbol() {
    let text = "import { BrowserModule } from 'other';\n";
    let source = parse(text);
    let mut context = CodeBlockContext::new();
    let token = context.external("BrowserModule", "@angular/platform-browser");
    let block = PendingCodeBlock::new(token, context);
    let rendered = block.render(&source);
    // The alias shows up in the expression and the import alike.
    assert_eq!(rendered.expression, "BrowserModule_alias");
    let updated = apply_changes(text, &rendered.imports);
    assert!(
        updated.contains("import { BrowserModule as BrowserModule_alias } from '@angular/platform-browser';")
    );
}

#[test]
fn test_context_issues_distinct_tokens() {
    let mut context = CodeBlockContext::new();
    let first = context.external("a", "m");
    let second = context.external("b", "m");
    assert_ne!(first, second);
}

#[test]
fn test_render_handles_multiple_placeholders() {
    let text = "const x = 1;\n";
    let source = parse(text);
    let mut context = CodeBlockContext::new();
    let router = context.external("provideRouter", "@angular/router");
    let http = context.external("provideHttpClient", "@angular/common/http");
    let block = PendingCodeBlock::new(format!("[{router}(routes), {http}()]"), context);
    let rendered = block.render(&source);
    assert_eq!(rendered.expression, "[provideRouter(routes), provideHttpClient()]");
    assert_eq!(rendered.imports.len(), 2);
    let updated = apply_changes(text, &rendered.imports);
    assert!(updated.contains("import { provideRouter } from '@angular/router';"));
    assert!(updated.contains("import { provideHttpClient } from '@angular/common/http';"));
}
