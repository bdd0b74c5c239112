//! Character classification utilities for the scanner.
//!
//! The scanner works on raw bytes; anything above the ASCII range is treated
//! as a valid identifier character. That is good enough for positional
//! analysis and keeps the hot path branch-light.

/// Check whether a byte terminates a line.
#[inline]
pub fn is_line_break(ch: u8) -> bool {
    ch == b'\n' || ch == b'\r'
}

/// Check whether a byte is single-line whitespace (excluding line breaks).
#[inline]
pub fn is_white_space_single_line(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == 0x0B || ch == 0x0C
}

/// Check whether a byte is any whitespace, including line breaks.
#[inline]
pub fn is_white_space(ch: u8) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

/// Check whether a byte can start an identifier.
#[inline]
pub fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b'$' || ch >= 0x80
}

/// Check whether a byte can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'$' || ch >= 0x80
}

/// Check whether a byte is an ASCII decimal digit.
#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
