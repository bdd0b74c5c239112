//! Tests for rule composition.

use crate::diagnostics::EditError;
use crate::rules::{Rule, chain, noop, rule};
use crate::standalone::add_functional_provider;
use crate::test_fixtures::squash;
use crate::tree::{FileTree, MemoryTree};

fn append_rule(path: &'static str, text: &'static str) -> Rule {
    rule(move |tree| {
        let mut recorder = tree.begin_update(path)?;
        let end = recorder.base_text().len() as u32;
        recorder.insert_right(end, text);
        tree.commit_update(recorder)
    })
}

#[test]
fn test_noop_rule_leaves_tree_untouched() {
    let mut tree = MemoryTree::with_files([("a.ts", "const a = 1;\n")]);
    noop()(&mut tree).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "const a = 1;\n");
}

#[test]
fn test_chain_runs_rules_in_order() {
    let mut tree = MemoryTree::with_files([("log.txt", "")]);
    let composed = chain(vec![
        append_rule("log.txt", "one;"),
        append_rule("log.txt", "two;"),
        append_rule("log.txt", "three;"),
    ]);
    composed(&mut tree).unwrap();
    assert_eq!(tree.read_text("log.txt").unwrap(), "one;two;three;");
}

#[test]
fn test_later_rules_see_committed_text() {
    // The second rule's offsets are computed against the first rule's
    // output, not the original file.
    let mut tree = MemoryTree::with_files([("log.txt", "start:")]);
    let composed = chain(vec![
        append_rule("log.txt", "aaaa"),
        rule(|tree| {
            let text = tree.read_text("log.txt")?;
            assert_eq!(text, "start:aaaa");
            let mut recorder = tree.begin_update("log.txt")?;
            recorder.insert_left(text.len() as u32, "!");
            tree.commit_update(recorder)
        }),
    ]);
    composed(&mut tree).unwrap();
    assert_eq!(tree.read_text("log.txt").unwrap(), "start:aaaa!");
}

#[test]
fn test_failing_rule_aborts_remainder() {
    let mut tree = MemoryTree::with_files([("log.txt", "")]);
    let composed = chain(vec![
        append_rule("log.txt", "kept;"),
        rule(|tree| {
            let _ = tree.read_text("missing.ts")?;
            Ok(())
        }),
        append_rule("log.txt", "never;"),
    ]);
    let result = composed(&mut tree);
    assert!(matches!(result, Err(EditError::FileNotFound { .. })));
    // Earlier commits stay; there is no rollback.
    assert_eq!(tree.read_text("log.txt").unwrap(), "kept;");
}

#[test]
fn test_chained_provider_rules_compose() {
    let main = "import { bootstrapApplication } from '@angular/platform-browser';\n\
                bootstrapApplication(AppComponent, { providers: [] });\n";
    let mut tree = MemoryTree::with_files([("main.ts", main)]);
    let composed = chain(vec![
        rule(|tree| add_functional_provider(tree, "main.ts", "provideRouter", "@angular/router", "routes")),
        rule(|tree| {
            add_functional_provider(tree, "main.ts", "provideHttpClient", "@angular/common/http", "")
        }),
    ]);
    composed(&mut tree).unwrap();
    let updated = tree.read_text("main.ts").unwrap();
    assert!(
        squash(&updated)
            .contains("{ providers: [provideRouter(routes), provideHttpClient()] }")
    );
    assert!(updated.contains("import { provideRouter } from '@angular/router';"));
    assert!(updated.contains("import { provideHttpClient } from '@angular/common/http';"));
}

#[test]
fn test_empty_chain_succeeds() {
    let mut tree = MemoryTree::new();
    chain(Vec::new())(&mut tree).unwrap();
}
