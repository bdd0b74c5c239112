//! Recursive-descent parser over the TypeScript subset the edit engine
//! understands: imports/exports, variable statements, decorated classes,
//! and the expression grammar around object/array literals and calls.
//!
//! The parser is resilient by design: unexpected input produces a
//! `Diagnostic` and an `Unknown` node, never a hard failure, because
//! schematics must be able to attempt edits on slightly malformed
//! intermediate states. Method and function bodies are skipped token-wise
//! (balanced braces) - positional analysis never needs to look inside them.

pub mod node;

mod arena;
mod state_expressions;
mod state_statements;

pub use node::{
    AccessExprData, ArrowFunctionData, BinaryExprData, CallExprData, Children, ClassData,
    ClassMemberData, ExtendedNodeInfo, IdentifierData, ImportClauseData, ImportDeclData,
    LiteralData, LiteralExprData, NamedBindingsData, Node, NodeArena, NodeFlags, NodeIndex,
    NodeList, PropertyAssignmentData, SourceFileData, SpecifierData, VariableData,
    VariableDeclarationData, WrappedData,
};

use crate::diagnostics::{Diagnostic, DiagnosticBag};
use crate::scanner::{ScannerSnapshot, ScannerState, SyntaxKind};
use crate::span::Span;

/// Saved parser position for speculative parsing.
#[derive(Clone, Copy)]
pub(crate) struct ParserSnapshot {
    scanner: ScannerSnapshot,
    last_token_end: usize,
}

/// Parser state for one file. Create with `new`, call `parse_source_file`
/// once, then take the arena and diagnostics with `into_parts`.
pub struct ParserState {
    file_name: String,
    scanner: ScannerState,
    arena: NodeArena,
    diagnostics: DiagnosticBag,
    last_token_end: usize,
}

impl ParserState {
    /// Create a parser over `source_text`. The text must not carry a BOM;
    /// callers strip it before parsing.
    pub fn new(file_name: impl Into<String>, source_text: String) -> ParserState {
        let mut scanner = ScannerState::new(source_text);
        scanner.scan();
        ParserState {
            file_name: file_name.into(),
            scanner,
            arena: NodeArena::new(),
            diagnostics: DiagnosticBag::new(),
            last_token_end: 0,
        }
    }

    /// Diagnostics recorded during parsing.
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Take the arena and diagnostics, consuming the parser.
    pub fn into_parts(self) -> (NodeArena, DiagnosticBag) {
        (self.arena, self.diagnostics)
    }

    // --- Token plumbing ---

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.token_full_start() as u32
    }

    #[inline]
    pub(crate) fn token_start(&self) -> u32 {
        self.scanner.token_start() as u32
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end() as u32
    }

    pub(crate) fn token_text(&self) -> &str {
        self.scanner.token_text()
    }

    pub(crate) fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    /// End offset of the previously consumed token; node ends use this.
    #[inline]
    pub(crate) fn node_end(&self) -> u32 {
        self.last_token_end as u32
    }

    pub(crate) fn next_token(&mut self) {
        self.last_token_end = self.scanner.token_end();
        self.scanner.scan();
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.token() == kind
    }

    /// Consume the current token if it matches.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches; otherwise record a
    /// diagnostic and leave the token in place for recovery.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error_at_current(format!("expected {:?}, found {:?}", kind, self.token()));
            false
        }
    }

    pub(crate) fn error_at_current(&mut self, message: String) {
        let span = Span::new(self.token_start(), self.token_end());
        self.diagnostics.push(Diagnostic::new(self.file_name.clone(), span, message));
    }

    // --- Speculative parsing ---

    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.snapshot(),
            last_token_end: self.last_token_end,
        }
    }

    pub(crate) fn rewind(&mut self, snapshot: ParserSnapshot) {
        self.scanner.rewind(snapshot.scanner);
        self.last_token_end = snapshot.last_token_end;
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek(&mut self) -> SyntaxKind {
        let snapshot = self.snapshot();
        self.next_token();
        let kind = self.token();
        self.rewind(snapshot);
        kind
    }

    // --- Shared node helpers ---

    /// Create an identifier node from the current token, which must be an
    /// identifier or a keyword used as a name. Consumes the token.
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if self.token().is_identifier_or_keyword() {
            let (pos, end) = (self.token_pos(), self.token_end());
            let data = IdentifierData {
                text: self.token_text().to_string(),
            };
            self.next_token();
            self.arena.add_identifier(SyntaxKind::Identifier, pos, end, data)
        } else {
            self.error_at_current(format!("identifier expected, found {:?}", self.token()));
            self.unknown_here()
        }
    }

    /// A zero-width `Unknown` node at the current position, for recovery.
    /// Does not consume anything.
    pub(crate) fn unknown_here(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let node = self.arena.add_token(SyntaxKind::Unknown, pos, self.token_start());
        self.arena.set_flags(node, NodeFlags::RECOVERED);
        node
    }

    /// Skip a balanced token run starting at the current `open` token.
    /// String and template literals are single tokens, so brackets inside
    /// them cannot unbalance the count.
    pub(crate) fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        let mut depth = 0usize;
        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken {
                return;
            }
            if token == open {
                depth += 1;
            } else if token == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.next_token();
                    return;
                }
            }
            self.next_token();
        }
    }

    /// Skip a type annotation. The current token must be the `:`.
    ///
    /// Heuristic token skip with bracket-depth tracking; stops at the first
    /// depth-zero token that can only belong to the enclosing construct.
    /// `stop_at_arrow` ends the annotation at a depth-zero `=>` (return-type
    /// position); `stop_at_brace` ends it at a depth-zero `{` (body follows).
    pub(crate) fn skip_type_annotation(&mut self, stop_at_arrow: bool, stop_at_brace: bool) {
        debug_assert!(self.at(SyntaxKind::ColonToken));
        self.next_token();
        let mut depth: i32 = 0;
        loop {
            let token = self.token();
            match token {
                SyntaxKind::EndOfFileToken | SyntaxKind::SemicolonToken => return,
                SyntaxKind::EqualsToken | SyntaxKind::CommaToken if depth == 0 => return,
                SyntaxKind::EqualsGreaterThanToken if depth == 0 && stop_at_arrow => return,
                SyntaxKind::OpenBraceToken if depth == 0 && stop_at_brace => return,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::GreaterThanToken => {
                    depth -= 1;
                    if depth < 0 {
                        return;
                    }
                    self.next_token();
                }
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::LessThanToken => {
                    depth += 1;
                    self.next_token();
                }
                _ => self.next_token(),
            }
        }
    }
}
