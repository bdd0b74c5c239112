//! Tests for the file tree and the edit recorder/committer.

use crate::change::Change;
use crate::diagnostics::EditError;
use crate::tree::{FileTree, MemoryTree};

#[test]
fn test_read_and_exists() {
    let tree = MemoryTree::with_files([("a.ts", "text")]);
    assert!(tree.exists("a.ts"));
    assert!(!tree.exists("b.ts"));
    assert_eq!(tree.read_text("a.ts").unwrap(), "text");
    assert!(matches!(
        tree.read_text("b.ts"),
        Err(EditError::FileNotFound { .. })
    ));
}

#[test]
fn test_single_insert() {
    let mut tree = MemoryTree::with_files([("a.ts", "hello world")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.insert_left(5, ",");
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "hello, world");
}

#[test]
fn test_offsets_are_snapshot_relative() {
    // Both inserts use offsets into the original text; the merge pass
    // must not shift the second one.
    let mut tree = MemoryTree::with_files([("a.ts", "abcdef")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.insert_left(2, "XX");
    recorder.insert_left(4, "YY");
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "abXXcdYYef");
}

#[test]
fn test_equal_offset_ordering() {
    // left inserts, then removals, then right inserts.
    let mut tree = MemoryTree::with_files([("a.ts", "abXcd")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.insert_right(2, "R");
    recorder.remove(2, 1);
    recorder.insert_left(2, "L");
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "abLRcd");
}

#[test]
fn test_same_class_ties_keep_recording_order() {
    let mut tree = MemoryTree::with_files([("a.ts", "ab")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.insert_left(1, "1");
    recorder.insert_left(1, "2");
    recorder.insert_left(1, "3");
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "a123b");
}

#[test]
fn test_remove_and_replace() {
    let mut tree = MemoryTree::with_files([("a.ts", "const a = 1;")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.record(&Change::replace(10, 1, "42"));
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "const a = 42;");
}

#[test]
fn test_noop_change_is_inert() {
    let mut tree = MemoryTree::with_files([("a.ts", "unchanged")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.record(&Change::NoOp);
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "unchanged");
}

#[test]
fn test_overlapping_removals_rejected() {
    let mut tree = MemoryTree::with_files([("a.ts", "abcdef")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.remove(1, 3);
    recorder.remove(2, 3);
    assert!(matches!(
        tree.commit_update(recorder),
        Err(EditError::OverlappingEdits { .. })
    ));
}

#[test]
fn test_out_of_bounds_edit_rejected() {
    let mut tree = MemoryTree::with_files([("a.ts", "ab")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.remove(1, 5);
    assert!(tree.commit_update(recorder).is_err());
}

#[test]
fn test_disjoint_removals_apply() {
    let mut tree = MemoryTree::with_files([("a.ts", "abcdef")]);
    let mut recorder = tree.begin_update("a.ts").unwrap();
    recorder.remove(4, 1);
    recorder.remove(0, 1);
    tree.commit_update(recorder).unwrap();
    assert_eq!(tree.read_text("a.ts").unwrap(), "bcdf");
}

#[test]
fn test_change_serializes() {
    let change = Change::insert(3, "x");
    let json = serde_json::to_string(&change).unwrap();
    let back: Change = serde_json::from_str(&json).unwrap();
    assert_eq!(change, back);
    assert!(json.contains("\"insert\""));
}
