//! Error taxonomy and parser diagnostics.
//!
//! Two distinct failure channels exist:
//!
//! - `EditError` - errors surfaced to rule authors: a locator could not find
//!   what it was told to find, or a shape cannot be analyzed without type
//!   information. Propagated with `?`; never retried.
//! - `Diagnostic` - syntax trouble noticed while parsing. Collected on the
//!   source file, never thrown: schematics must be able to attempt edits on
//!   slightly malformed intermediate states, so the parser recovers and keeps
//!   going.
//!
//! "Malformed existing structure" (a metadata field that is not an array,
//! say) is neither: those synthesizers return an empty change list and let
//! the caller decide whether that is fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::Span;

/// Errors surfaced by locators, synthesizers, and the file tree.
#[derive(Debug, Error)]
pub enum EditError {
    /// The tree has no file at this path.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A required construct was not found. Recoverable: callers may pick a
    /// fallback strategy.
    #[error("{what} not found in {path}")]
    NotFound { what: String, path: String },

    /// As `NotFound`, with a 1-based source line when one is meaningful.
    #[error("{what} not found in {path}:{line}")]
    NotFoundAt { what: String, path: String, line: u32 },

    /// The construct exists but resolving it would require whole-program
    /// type information, which this engine deliberately does not attempt.
    #[error("cannot statically analyze {path}: {reason}")]
    CannotStaticallyAnalyze { path: String, reason: String },

    /// Two recorded edits in one session overlap.
    #[error("overlapping edits in {path} at offset {offset}")]
    OverlappingEdits { path: String, offset: u32 },
}

impl EditError {
    pub fn not_found(what: impl Into<String>, path: impl Into<String>) -> EditError {
        EditError::NotFound {
            what: what.into(),
            path: path.into(),
        }
    }

    pub fn not_found_at(what: impl Into<String>, path: impl Into<String>, line: u32) -> EditError {
        EditError::NotFoundAt {
            what: what.into(),
            path: path.into(),
            line,
        }
    }
}

/// Outcome of a semantic locator: either the located node or the reason
/// nothing matched. Locators return this instead of throwing so that
/// fall-back call sites stay type-checkable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<T> {
    Found(T),
    NotFound(String),
}

impl<T> Resolved<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::NotFound(_) => None,
        }
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// Convert to a hard error, attributing the miss to `path`.
    pub fn or_not_found(self, path: &str) -> Result<T, EditError> {
        match self {
            Resolved::Found(value) => Ok(value),
            Resolved::NotFound(reason) => Err(EditError::not_found(reason, path)),
        }
    }
}

/// A single parser diagnostic with location.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file_name: String,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file_name: impl Into<String>, span: Span, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            file_name: file_name.into(),
            span,
            message: message.into(),
        }
    }
}

/// Diagnostics collected during one parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> DiagnosticBag {
        DiagnosticBag::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
