//! File tree abstraction and the update recorder.
//!
//! An update is scoped to one path: `begin_update` snapshots the current
//! text, edits accumulate against that snapshot, and `commit_update`
//! replaces the file content in a single sorted merge pass. Offsets
//! recorded against one snapshot are meaningless after the commit.

use rustc_hash::FxHashMap;

use crate::change::Change;
use crate::diagnostics::EditError;

pub trait FileTree {
    fn read_text(&self, path: &str) -> Result<String, EditError>;
    fn exists(&self, path: &str) -> bool;
    fn begin_update(&self, path: &str) -> Result<UpdateRecorder, EditError>;
    fn commit_update(&mut self, recorder: UpdateRecorder) -> Result<(), EditError>;
}

/// In-memory tree keyed by tree-relative path.
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: FxHashMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> MemoryTree {
        MemoryTree::default()
    }

    pub fn with_files<P, T>(files: impl IntoIterator<Item = (P, T)>) -> MemoryTree
    where
        P: Into<String>,
        T: Into<String>,
    {
        let mut tree = MemoryTree::new();
        for (path, text) in files {
            tree.files.insert(path.into(), text.into());
        }
        tree
    }

    pub fn create(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl FileTree for MemoryTree {
    fn read_text(&self, path: &str) -> Result<String, EditError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| EditError::FileNotFound { path: path.to_string() })
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn begin_update(&self, path: &str) -> Result<UpdateRecorder, EditError> {
        Ok(UpdateRecorder::new(path.to_string(), self.read_text(path)?))
    }

    fn commit_update(&mut self, recorder: UpdateRecorder) -> Result<(), EditError> {
        let (path, text) = recorder.into_updated_text()?;
        self.files.insert(path, text);
        Ok(())
    }
}

// Edits at the same offset apply left inserts first, removals second,
// right inserts third; recording order breaks ties within a class.
const RANK_LEFT: u8 = 0;
const RANK_REMOVE: u8 = 1;
const RANK_RIGHT: u8 = 2;

#[derive(Debug)]
struct Edit {
    pos: u32,
    rank: u8,
    remove_len: u32,
    text: String,
}

/// Accumulates edits for one file against a fixed snapshot of its text.
#[derive(Debug)]
pub struct UpdateRecorder {
    path: String,
    base: String,
    edits: Vec<Edit>,
}

impl UpdateRecorder {
    fn new(path: String, base: String) -> UpdateRecorder {
        UpdateRecorder { path, base, edits: Vec::new() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Text the edit offsets are relative to.
    pub fn base_text(&self) -> &str {
        &self.base
    }

    /// Insert `text` at `pos`, before anything else recorded at `pos`.
    pub fn insert_left(&mut self, pos: u32, text: impl Into<String>) {
        self.edits.push(Edit { pos, rank: RANK_LEFT, remove_len: 0, text: text.into() });
    }

    /// Insert `text` at `pos`, after removals recorded at `pos`.
    pub fn insert_right(&mut self, pos: u32, text: impl Into<String>) {
        self.edits.push(Edit { pos, rank: RANK_RIGHT, remove_len: 0, text: text.into() });
    }

    pub fn remove(&mut self, pos: u32, len: u32) {
        self.edits.push(Edit { pos, rank: RANK_REMOVE, remove_len: len, text: String::new() });
    }

    /// Record a computed `Change`. Replacements become a removal plus a
    /// right insert at the same offset.
    pub fn record(&mut self, change: &Change) {
        match change {
            Change::NoOp => {}
            Change::Insert { pos, text } => self.insert_left(*pos, text.clone()),
            Change::Replace { pos, remove_len, text } => {
                self.remove(*pos, *remove_len);
                self.insert_right(*pos, text.clone());
            }
        }
    }

    pub fn record_all<'a>(&mut self, changes: impl IntoIterator<Item = &'a Change>) {
        for change in changes {
            self.record(change);
        }
    }

    /// Merge all edits over the snapshot in one sorted pass.
    fn into_updated_text(self) -> Result<(String, String), EditError> {
        let UpdateRecorder { path, base, mut edits } = self;
        tracing::debug!(path = %path, edits = edits.len(), "committing update");
        // Stable sort keeps recording order within (pos, rank).
        edits.sort_by_key(|e| (e.pos, e.rank));

        let mut out = String::with_capacity(base.len());
        let mut cursor: usize = 0;
        for edit in &edits {
            let pos = edit.pos as usize;
            if pos > base.len() || pos + edit.remove_len as usize > base.len() {
                return Err(EditError::OverlappingEdits { path, offset: edit.pos });
            }
            if edit.rank == RANK_REMOVE {
                if pos < cursor {
                    return Err(EditError::OverlappingEdits { path, offset: edit.pos });
                }
                out.push_str(&base[cursor..pos]);
                cursor = pos + edit.remove_len as usize;
            } else {
                // Inserts inside a removed span attach where the cursor
                // currently is; only removals can overlap.
                if pos > cursor {
                    out.push_str(&base[cursor..pos]);
                    cursor = pos;
                }
                out.push_str(&edit.text);
            }
        }
        out.push_str(&base[cursor..]);
        Ok((path, out))
    }
}
