//! Tokenizer state machine.
//!
//! Every scanned token carries three offsets:
//!
//! - `full_start` - offset before the token's leading trivia (whitespace,
//!   comments). Node positions use this, so a node's full text includes its
//!   leading trivia.
//! - `start` - offset of the first meaningful character.
//! - `end` - offset one past the last character.
//!
//! The scanner never fails: unexpected bytes become `Unknown` tokens and the
//! parser's recovery deals with them. Template literals are scanned as single
//! tokens (substitutions included), which is all positional analysis needs.

use super::char_codes::*;
use super::syntax_kind::{SyntaxKind, text_to_keyword};

/// Saved scanner position for speculative look-ahead.
#[derive(Clone, Copy, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token: SyntaxKind,
    token_full_start: usize,
    token_start: usize,
}

/// Tokenizer over a single file's text.
pub struct ScannerState {
    text: String,
    pos: usize,
    token: SyntaxKind,
    token_full_start: usize,
    token_start: usize,
    token_value: String,
}

impl ScannerState {
    /// Create a scanner positioned before the first token.
    /// Call `scan()` to produce the first token.
    pub fn new(text: String) -> ScannerState {
        ScannerState {
            text,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_full_start: 0,
            token_start: 0,
            token_value: String::new(),
        }
    }

    /// The source text this scanner reads from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Offset before the current token's leading trivia.
    #[inline]
    pub fn token_full_start(&self) -> usize {
        self.token_full_start
    }

    /// Offset of the current token's first meaningful character.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Offset one past the current token.
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Raw source text of the current token.
    pub fn token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    /// Cooked value for identifier and literal tokens (string contents
    /// without quotes, escapes resolved); empty for punctuation.
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Save the scanner position for speculative parsing.
    pub fn snapshot(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_full_start: self.token_full_start,
            token_start: self.token_start,
        }
    }

    /// Rewind to a previously saved position.
    ///
    /// The cooked token value is re-derived lazily on the next `scan()`; the
    /// restored token's value is only valid for punctuation look-ahead, which
    /// is the only thing speculative parsing inspects.
    pub fn rewind(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_full_start = snapshot.token_full_start;
        self.token_start = snapshot.token_start;
        self.token_value.clear();
        let text = &self.text[self.token_start..self.pos];
        self.token_value.push_str(text);
    }

    #[inline]
    fn byte(&self, at: usize) -> u8 {
        if at < self.text.len() {
            self.text.as_bytes()[at]
        } else {
            0
        }
    }

    /// Scan the next token, returning its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_full_start = self.pos;
        self.skip_trivia_forward();
        self.token_start = self.pos;
        self.token_value.clear();

        if self.pos >= self.text.len() {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.byte(self.pos);
        self.token = match ch {
            b'\'' | b'"' => self.scan_string(ch),
            b'`' => self.scan_template(),
            b'0'..=b'9' => self.scan_number(),
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b'@' => self.single(SyntaxKind::AtToken),
            b'~' => self.single(SyntaxKind::TildeToken),
            b'^' => self.single(SyntaxKind::CaretToken),
            b'%' => self.single(SyntaxKind::PercentToken),
            b'*' => self.single(SyntaxKind::AsteriskToken),
            b'/' => self.single(SyntaxKind::SlashToken),
            b'.' => {
                if self.byte(self.pos + 1) == b'.' && self.byte(self.pos + 2) == b'.' {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else {
                    self.single(SyntaxKind::DotToken)
                }
            }
            b'=' => {
                if self.byte(self.pos + 1) == b'>' {
                    self.pos += 2;
                    SyntaxKind::EqualsGreaterThanToken
                } else if self.byte(self.pos + 1) == b'=' {
                    if self.byte(self.pos + 2) == b'=' {
                        self.pos += 3;
                        SyntaxKind::EqualsEqualsEqualsToken
                    } else {
                        self.pos += 2;
                        SyntaxKind::EqualsEqualsToken
                    }
                } else {
                    self.single(SyntaxKind::EqualsToken)
                }
            }
            b'!' => {
                if self.byte(self.pos + 1) == b'=' {
                    if self.byte(self.pos + 2) == b'=' {
                        self.pos += 3;
                        SyntaxKind::ExclamationEqualsEqualsToken
                    } else {
                        self.pos += 2;
                        SyntaxKind::ExclamationEqualsToken
                    }
                } else {
                    self.single(SyntaxKind::ExclamationToken)
                }
            }
            b'<' => {
                if self.byte(self.pos + 1) == b'=' {
                    self.pos += 2;
                    SyntaxKind::LessThanEqualsToken
                } else {
                    self.single(SyntaxKind::LessThanToken)
                }
            }
            b'>' => {
                if self.byte(self.pos + 1) == b'=' {
                    self.pos += 2;
                    SyntaxKind::GreaterThanEqualsToken
                } else {
                    self.single(SyntaxKind::GreaterThanToken)
                }
            }
            b'+' => match self.byte(self.pos + 1) {
                b'+' => {
                    self.pos += 2;
                    SyntaxKind::PlusPlusToken
                }
                b'=' => {
                    self.pos += 2;
                    SyntaxKind::PlusEqualsToken
                }
                _ => self.single(SyntaxKind::PlusToken),
            },
            b'-' => match self.byte(self.pos + 1) {
                b'-' => {
                    self.pos += 2;
                    SyntaxKind::MinusMinusToken
                }
                b'=' => {
                    self.pos += 2;
                    SyntaxKind::MinusEqualsToken
                }
                _ => self.single(SyntaxKind::MinusToken),
            },
            b'&' => {
                if self.byte(self.pos + 1) == b'&' {
                    self.pos += 2;
                    SyntaxKind::AmpersandAmpersandToken
                } else {
                    self.single(SyntaxKind::AmpersandToken)
                }
            }
            b'|' => {
                if self.byte(self.pos + 1) == b'|' {
                    self.pos += 2;
                    SyntaxKind::BarBarToken
                } else {
                    self.single(SyntaxKind::BarToken)
                }
            }
            b'?' => match self.byte(self.pos + 1) {
                b'?' => {
                    self.pos += 2;
                    SyntaxKind::QuestionQuestionToken
                }
                b'.' => {
                    self.pos += 2;
                    SyntaxKind::QuestionDotToken
                }
                _ => self.single(SyntaxKind::QuestionToken),
            },
            b'#' => {
                // Private identifier
                self.pos += 1;
                while is_identifier_part(self.byte(self.pos)) && self.pos < self.text.len() {
                    self.pos += 1;
                }
                self.token_value.push_str(&self.text[self.token_start..self.pos]);
                SyntaxKind::PrivateIdentifier
            }
            ch if is_identifier_start(ch) => self.scan_identifier(),
            _ => {
                // Advance over the full UTF-8 sequence so we never split a
                // multi-byte character.
                let mut next = self.pos + 1;
                while next < self.text.len() && !self.text.is_char_boundary(next) {
                    next += 1;
                }
                self.pos = next;
                SyntaxKind::Unknown
            }
        };
        self.token
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn skip_trivia_forward(&mut self) {
        // Shebang is only trivia at offset zero.
        if self.pos == 0 && self.text.starts_with("#!") {
            while self.pos < self.text.len() && !is_line_break(self.byte(self.pos)) {
                self.pos += 1;
            }
        }
        loop {
            if self.pos >= self.text.len() {
                return;
            }
            let ch = self.byte(self.pos);
            if is_white_space(ch) {
                self.pos += 1;
            } else if ch == b'/' && self.byte(self.pos + 1) == b'/' {
                while self.pos < self.text.len() && !is_line_break(self.byte(self.pos)) {
                    self.pos += 1;
                }
            } else if ch == b'/' && self.byte(self.pos + 1) == b'*' {
                self.pos += 2;
                while self.pos < self.text.len() {
                    if self.byte(self.pos) == b'*' && self.byte(self.pos + 1) == b'/' {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        while self.pos < self.text.len() && is_identifier_part(self.byte(self.pos)) {
            self.pos += 1;
        }
        let text = &self.text[self.token_start..self.pos];
        self.token_value.push_str(text);
        text_to_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        let mut value = String::new();
        while self.pos < self.text.len() {
            let ch = self.byte(self.pos);
            if ch == quote {
                self.pos += 1;
                break;
            }
            if is_line_break(ch) {
                // Unterminated string; stop at the line break so recovery
                // resumes on the next line.
                break;
            }
            if ch == b'\\' && self.pos + 1 < self.text.len() {
                let escaped = self.byte(self.pos + 1);
                match escaped {
                    b'n' => value.push('\n'),
                    b'r' => value.push('\r'),
                    b't' => value.push('\t'),
                    _ => value.push(escaped as char),
                }
                self.pos += 2;
                continue;
            }
            let rest = &self.text[self.pos..];
            let c = rest.chars().next().unwrap_or('\u{FFFD}');
            value.push(c);
            self.pos += c.len_utf8();
        }
        self.token_value = value;
        SyntaxKind::StringLiteral
    }

    fn scan_template(&mut self) -> SyntaxKind {
        self.pos += 1;
        let start = self.pos;
        while self.pos < self.text.len() {
            let ch = self.byte(self.pos);
            if ch == b'`' {
                self.token_value.push_str(&self.text[start..self.pos]);
                self.pos += 1;
                return SyntaxKind::NoSubstitutionTemplateLiteral;
            }
            if ch == b'\\' {
                self.pos += 2;
                continue;
            }
            self.pos += 1;
        }
        // Unterminated template; take everything to EOF.
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::NoSubstitutionTemplateLiteral
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let bytes = self.text.as_bytes();
        if self.byte(self.pos) == b'0'
            && matches!(self.byte(self.pos + 1), b'x' | b'X' | b'o' | b'O' | b'b' | b'B')
        {
            self.pos += 2;
            while self.pos < bytes.len() && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_') {
                self.pos += 1;
            }
        } else {
            while self.pos < bytes.len() && (is_digit(bytes[self.pos]) || bytes[self.pos] == b'_') {
                self.pos += 1;
            }
            if self.byte(self.pos) == b'.' && is_digit(self.byte(self.pos + 1)) {
                self.pos += 1;
                while self.pos < bytes.len() && (is_digit(bytes[self.pos]) || bytes[self.pos] == b'_') {
                    self.pos += 1;
                }
            }
            if matches!(self.byte(self.pos), b'e' | b'E') {
                let mut next = self.pos + 1;
                if matches!(self.byte(next), b'+' | b'-') {
                    next += 1;
                }
                if is_digit(self.byte(next)) {
                    self.pos = next;
                    while self.pos < bytes.len() && is_digit(bytes[self.pos]) {
                        self.pos += 1;
                    }
                }
            }
        }
        self.token_value.push_str(&self.text[self.token_start..self.pos]);
        SyntaxKind::NumericLiteral
    }
}

/// Skip leading trivia (whitespace and comments) starting at `pos`, never
/// moving past `limit`. This is how a node's trivia-skipped start is derived
/// from its full-start position.
pub fn skip_trivia(text: &str, pos: usize, limit: usize) -> usize {
    let bytes = text.as_bytes();
    let limit = limit.min(text.len());
    let mut pos = pos.min(limit);
    loop {
        if pos >= limit {
            return pos;
        }
        let ch = bytes[pos];
        if is_white_space(ch) {
            pos += 1;
        } else if ch == b'/' && pos + 1 < limit && bytes[pos + 1] == b'/' {
            while pos < limit && !is_line_break(bytes[pos]) {
                pos += 1;
            }
        } else if ch == b'/' && pos + 1 < limit && bytes[pos + 1] == b'*' {
            pos += 2;
            while pos < limit {
                if bytes[pos] == b'*' && pos + 1 < limit && bytes[pos + 1] == b'/' {
                    pos += 2;
                    break;
                }
                pos += 1;
            }
            if pos >= limit {
                return limit;
            }
        } else {
            return pos;
        }
    }
}
