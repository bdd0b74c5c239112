//! Shared helpers for the test modules.

use crate::change::Change;
use crate::source_file::SourceFile;
use crate::tree::{FileTree, MemoryTree};

/// Apply `changes` to `text` through a recorder session and return the
/// committed result.
pub fn apply_changes(text: &str, changes: &[Change]) -> String {
    let mut tree = MemoryTree::with_files([("file.ts", text)]);
    let mut recorder = tree.begin_update("file.ts").unwrap();
    recorder.record_all(changes);
    tree.commit_update(recorder).unwrap();
    tree.read_text("file.ts").unwrap()
}

pub fn parse(text: &str) -> SourceFile {
    SourceFile::parse("file.ts", text.to_string())
}

/// Collapse all whitespace runs to single spaces, for assertions that do
/// not care about exact formatting.
pub fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
