//! Tests for route-array location and insertion.

use crate::diagnostics::{EditError, Resolved};
use crate::routes::{insert_route, router_module_call, routes_array};
use crate::scanner::SyntaxKind;
use crate::test_fixtures::{apply_changes, parse};

const ROUTING_MODULE: &str = "import { NgModule } from '@angular/core';\n\
                              import { RouterModule } from '@angular/router';\n\
                              \n\
                              const routes = [\n\
                              \x20 { path: 'home', component: HomeComponent },\n\
                              \x20 { path: '**', component: NotFoundComponent },\n\
                              ];\n\
                              \n\
                              @NgModule({\n\
                              \x20 imports: [RouterModule.forRoot(routes)]\n\
                              })\n\
                              export class AppRoutingModule {}\n";

fn registration_call(source: &crate::source_file::SourceFile) -> crate::parser::NodeIndex {
    router_module_call(source, "NgModule", "@angular/core", "RouterModule")
        .into_found()
        .unwrap()
}

#[test]
fn test_router_module_call_found() {
    let source = parse(ROUTING_MODULE);
    let call = registration_call(&source);
    assert!(source.arena().is_kind(call, SyntaxKind::CallExpression));
    assert!(source.node_text(call).starts_with("RouterModule.forRoot"));
}

#[test]
fn test_router_module_call_not_found_without_registration() {
    let source = parse(
        "import { NgModule } from '@angular/core';\n\
         @NgModule({ imports: [] })\n\
         class M {}\n",
    );
    assert!(matches!(
        router_module_call(&source, "NgModule", "@angular/core", "RouterModule"),
        Resolved::NotFound(_)
    ));
}

#[test]
fn test_routes_array_resolves_identifier_to_variable() {
    let source = parse(ROUTING_MODULE);
    let call = registration_call(&source);
    let array = routes_array(&source, call).unwrap();
    assert!(source.arena().is_kind(array, SyntaxKind::ArrayLiteralExpression));
    assert!(source.node_text(array).contains("'home'"));
}

#[test]
fn test_routes_array_inline_literal() {
    let source = parse(
        "import { NgModule } from '@angular/core';\n\
         import { RouterModule } from '@angular/router';\n\
         @NgModule({ imports: [RouterModule.forChild([{ path: 'a', component: A }])] })\n\
         class M {}\n",
    );
    let call = registration_call(&source);
    let array = routes_array(&source, call).unwrap();
    assert!(source.arena().is_kind(array, SyntaxKind::ArrayLiteralExpression));
}

#[test]
fn test_routes_array_unresolvable_is_error_with_line() {
    let source = parse(
        "import { NgModule } from '@angular/core';\n\
         import { RouterModule } from '@angular/router';\n\
         @NgModule({ imports: [RouterModule.forRoot(getRoutes())] })\n\
         class M {}\n",
    );
    let call = registration_call(&source);
    match routes_array(&source, call) {
        Err(EditError::NotFoundAt { path, line, .. }) => {
            assert_eq!(path, "file.ts");
            assert_eq!(line, 3);
        }
        other => panic!("expected NotFoundAt, got {other:?}"),
    }
}

#[test]
fn test_insert_route_before_wildcard() {
    let source = parse(ROUTING_MODULE);
    let call = registration_call(&source);
    let change = insert_route(&source, call, "{ path: 'bar', component: BarComponent }").unwrap();
    let updated = apply_changes(ROUTING_MODULE, &[change]);
    let bar_at = updated.find("path: 'bar'").unwrap();
    let wildcard_at = updated.find("path: '**'").unwrap();
    assert!(bar_at < wildcard_at);
    // The home route stays first.
    assert!(updated.find("path: 'home'").unwrap() < bar_at);
}

#[test]
fn test_insert_route_before_sole_wildcard() {
    let text = "import { NgModule } from '@angular/core';\n\
                import { RouterModule } from '@angular/router';\n\
                @NgModule({ imports: [RouterModule.forRoot([{ path: '**', component: F }])] })\n\
                class M {}\n";
    let source = parse(text);
    let call = registration_call(&source);
    let change = insert_route(&source, call, "{ path: 'bar', component: B }").unwrap();
    let updated = apply_changes(text, &[change]);
    assert!(updated.find("path: 'bar'").unwrap() < updated.find("path: '**'").unwrap());
}

#[test]
fn test_insert_route_appends_without_wildcard() {
    let text = "import { NgModule } from '@angular/core';\n\
                import { RouterModule } from '@angular/router';\n\
                @NgModule({ imports: [RouterModule.forRoot([{ path: 'a', component: A }])] })\n\
                class M {}\n";
    let source = parse(text);
    let call = registration_call(&source);
    let change = insert_route(&source, call, "{ path: 'b', component: B }").unwrap();
    let updated = apply_changes(text, &[change]);
    assert!(updated.find("path: 'a'").unwrap() < updated.find("path: 'b'").unwrap());
}

#[test]
fn test_insert_route_into_empty_array() {
    let text = "import { NgModule } from '@angular/core';\n\
                import { RouterModule } from '@angular/router';\n\
                @NgModule({ imports: [RouterModule.forRoot([])] })\n\
                class M {}\n";
    let source = parse(text);
    let call = registration_call(&source);
    let change = insert_route(&source, call, "{ path: 'a', component: A }").unwrap();
    let updated = apply_changes(text, &[change]);
    assert!(updated.contains("forRoot([{ path: 'a', component: A }])"));
}
