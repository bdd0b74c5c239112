//! Lexical analysis: token kinds, character classification, and the scanner.

pub mod char_codes;
pub mod scanner_impl;
pub mod syntax_kind;

pub use scanner_impl::{ScannerSnapshot, ScannerState, skip_trivia};
pub use syntax_kind::{SyntaxKind, string_to_token, text_to_keyword};
