//! Positional edits against a fixed text snapshot.

use serde::{Deserialize, Serialize};

/// A single edit. Offsets are byte offsets into the text the change was
/// computed against; once that text is rewritten the change is stale.
/// Changes do not compose; apply one batch per snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// Explicitly does nothing. Distinguishable from an empty insert so
    /// callers can report "nothing to do".
    NoOp,
    Insert { pos: u32, text: String },
    Replace { pos: u32, remove_len: u32, text: String },
}

impl Change {
    pub fn insert(pos: u32, text: impl Into<String>) -> Change {
        Change::Insert { pos, text: text.into() }
    }

    pub fn replace(pos: u32, remove_len: u32, text: impl Into<String>) -> Change {
        Change::Replace { pos, remove_len, text: text.into() }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Change::NoOp)
    }

    /// Offset the change applies at; no-ops have no position.
    pub fn order(&self) -> Option<u32> {
        match self {
            Change::NoOp => None,
            Change::Insert { pos, .. } | Change::Replace { pos, .. } => Some(*pos),
        }
    }
}
