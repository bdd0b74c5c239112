//! A parsed file: source text plus the arena-backed tree over it.

use crate::diagnostics::Diagnostic;
use crate::parser::{NodeArena, NodeIndex, ParserState};
use crate::scanner::skip_trivia;
use crate::span::Span;

const BOM: char = '\u{feff}';

/// Owns the text and the tree for a single file. The tree holds byte
/// offsets into `text`; offsets are valid only for this exact text.
#[derive(Debug)]
pub struct SourceFile {
    file_name: String,
    text: String,
    arena: NodeArena,
    root: NodeIndex,
    diagnostics: Vec<Diagnostic>,
}

impl SourceFile {
    /// Parse `text` into a tree. A leading byte-order mark is stripped
    /// before parsing so offsets line up with what editors display.
    pub fn parse(file_name: impl Into<String>, mut text: String) -> SourceFile {
        if text.starts_with(BOM) {
            text.drain(..BOM.len_utf8());
        }
        let file_name = file_name.into();
        let mut parser = ParserState::new(file_name.clone(), text.clone());
        let root = parser.parse_source_file();
        let (arena, diagnostics) = parser.into_parts();
        SourceFile {
            file_name,
            text,
            arena,
            root,
            diagnostics: diagnostics.into_vec(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Start offset of `node` with leading trivia skipped, like
    /// TypeScript's `getStart()`.
    pub fn node_start(&self, node: NodeIndex) -> u32 {
        match self.arena.get(node) {
            Some(n) => skip_trivia(&self.text, n.pos as usize, n.end as usize) as u32,
            None => 0,
        }
    }

    pub fn node_end(&self, node: NodeIndex) -> u32 {
        self.arena.get(node).map_or(0, |n| n.end)
    }

    /// Source text of `node` with leading trivia skipped.
    pub fn node_text(&self, node: NodeIndex) -> &str {
        match self.arena.get(node) {
            Some(n) => {
                let start = skip_trivia(&self.text, n.pos as usize, n.end as usize);
                &self.text[start..n.end as usize]
            }
            None => "",
        }
    }

    /// Source text of `node` including leading trivia.
    pub fn node_full_text(&self, node: NodeIndex) -> &str {
        match self.arena.get(node) {
            Some(n) => &self.text[n.pos as usize..n.end as usize],
            None => "",
        }
    }

    pub fn node_span(&self, node: NodeIndex) -> Span {
        match self.arena.get(node) {
            Some(n) => Span::new(self.node_start(node), n.end),
            None => Span::new(0, 0),
        }
    }

    /// 1-based line of a byte offset, counting `\n`.
    pub fn line_of(&self, offset: u32) -> u32 {
        let end = (offset as usize).min(self.text.len());
        1 + memchr::memchr_iter(b'\n', &self.text.as_bytes()[..end]).count() as u32
    }
}
