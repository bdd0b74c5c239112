//! Tests for the scanner.

use crate::scanner::*;

fn scan_kinds(text: &str) -> Vec<SyntaxKind> {
    let mut scanner = ScannerState::new(text.to_string());
    let mut kinds = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        kinds.push(kind);
    }
    kinds
}

#[test]
fn test_scan_import_statement() {
    assert_eq!(
        scan_kinds("import { a } from 'm';"),
        vec![
            SyntaxKind::ImportKeyword,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::Identifier,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::FromKeyword,
            SyntaxKind::StringLiteral,
            SyntaxKind::SemicolonToken,
        ]
    );
}

#[test]
fn test_token_offsets_include_leading_trivia() {
    let mut scanner = ScannerState::new("  // comment\n  foo".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    // Full start covers the comment and whitespace; start does not.
    assert_eq!(scanner.token_full_start(), 0);
    assert_eq!(scanner.token_start(), 15);
    assert_eq!(scanner.token_end(), 18);
    assert_eq!(scanner.token_text(), "foo");
}

#[test]
fn test_string_literal_value_is_cooked() {
    let mut scanner = ScannerState::new("'use strict'".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "use strict");
    assert_eq!(scanner.token_text(), "'use strict'");
}

#[test]
fn test_double_quoted_string() {
    let mut scanner = ScannerState::new("\"hello\"".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "hello");
}

#[test]
fn test_template_literal_is_one_token() {
    let kinds = scan_kinds("`a ${b} c`;");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::NoSubstitutionTemplateLiteral,
            SyntaxKind::SemicolonToken
        ]
    );
}

#[test]
fn test_multi_char_punctuation() {
    assert_eq!(
        scan_kinds("a => a === b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("a?.b ?? c"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionDotToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionQuestionToken,
            SyntaxKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("...rest"),
        vec![SyntaxKind::DotDotDotToken, SyntaxKind::Identifier]
    );
}

#[test]
fn test_keywords_vs_identifiers() {
    assert_eq!(
        scan_kinds("const let letter"),
        vec![
            SyntaxKind::ConstKeyword,
            SyntaxKind::LetKeyword,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_numeric_literals() {
    assert_eq!(scan_kinds("42"), vec![SyntaxKind::NumericLiteral]);
    assert_eq!(scan_kinds("0xff"), vec![SyntaxKind::NumericLiteral]);
    assert_eq!(scan_kinds("1.5e3"), vec![SyntaxKind::NumericLiteral]);
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        scan_kinds("a /* block */ b // line"),
        vec![SyntaxKind::Identifier, SyntaxKind::Identifier]
    );
}

#[test]
fn test_unterminated_string_stops_at_line_break() {
    let mut scanner = ScannerState::new("'oops\nnext".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "oops");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_text(), "next");
}

#[test]
fn test_snapshot_rewind() {
    let mut scanner = ScannerState::new("a b c".to_string());
    scanner.scan();
    let snapshot = scanner.snapshot();
    scanner.scan();
    assert_eq!(scanner.token_text(), "b");
    scanner.rewind(snapshot);
    assert_eq!(scanner.token_text(), "a");
    scanner.scan();
    assert_eq!(scanner.token_text(), "b");
}

#[test]
fn test_skip_trivia() {
    let text = "  // c\n  foo";
    assert_eq!(skip_trivia(text, 0, text.len()), 9);
    // Already at a token.
    assert_eq!(skip_trivia("foo", 0, 3), 0);
    // Limit caps the walk.
    assert_eq!(skip_trivia("    ", 0, 2), 2);
}

#[test]
fn test_private_identifier() {
    assert_eq!(
        scan_kinds("#field"),
        vec![SyntaxKind::PrivateIdentifier]
    );
}

#[test]
fn test_decorator_at_token() {
    assert_eq!(
        scan_kinds("@Component"),
        vec![SyntaxKind::AtToken, SyntaxKind::Identifier]
    );
}
