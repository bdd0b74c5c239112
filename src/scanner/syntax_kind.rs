//! Syntax kind tags for tokens and tree nodes.
//!
//! Kinds are `u16` values so they fit in the 2-byte `kind` field of the thin
//! node header. Token kinds come first, node kinds after `FirstNode`.

use serde::{Deserialize, Serialize};

/// Token and node kinds for the parsed TypeScript subset.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    RegularExpressionLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    AmpersandToken,
    AmpersandAmpersandToken,
    BarToken,
    BarBarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    QuestionToken,
    QuestionQuestionToken,
    QuestionDotToken,
    ColonToken,
    AtToken,
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,

    // Identifiers
    Identifier,
    PrivateIdentifier,

    // Keywords
    AsKeyword,
    AsyncKeyword,
    AwaitKeyword,
    ClassKeyword,
    ConstKeyword,
    DefaultKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FromKeyword,
    FunctionKeyword,
    ImplementsKeyword,
    ImportKeyword,
    LetKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    StaticKeyword,
    ThisKeyword,
    TrueKeyword,
    TypeKeyword,
    TypeOfKeyword,
    VarKeyword,

    // Node kinds
    ComputedPropertyName,
    Decorator,
    Parameter,
    PrefixUnaryExpression,
    BinaryExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ParenthesizedExpression,
    ArrowFunction,
    SpreadElement,
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    VariableStatement,
    VariableDeclaration,
    ExpressionStatement,
    ReturnStatement,
    FunctionDeclaration,
    ClassDeclaration,
    PropertyDeclaration,
    MethodDeclaration,
    ImportDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ExportDeclaration,
    ExportSpecifier,
    SourceFile,
}

impl SyntaxKind {
    /// First kind that names a tree node rather than a token.
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::ComputedPropertyName;

    /// Check whether this kind is a token (rather than a tree node).
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (SyntaxKind::FIRST_NODE as u16)
    }

    /// Check whether this kind is a keyword token.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= SyntaxKind::AsKeyword && self <= SyntaxKind::VarKeyword
    }

    /// Check whether this kind can serve as an identifier-like name
    /// (identifiers and keywords used as property names).
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == SyntaxKind::Identifier || self == SyntaxKind::PrivateIdentifier || self.is_keyword()
    }
}

/// Map reserved and contextual keyword text to its token kind.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "as" => SyntaxKind::AsKeyword,
        "async" => SyntaxKind::AsyncKeyword,
        "await" => SyntaxKind::AwaitKeyword,
        "class" => SyntaxKind::ClassKeyword,
        "const" => SyntaxKind::ConstKeyword,
        "default" => SyntaxKind::DefaultKeyword,
        "export" => SyntaxKind::ExportKeyword,
        "extends" => SyntaxKind::ExtendsKeyword,
        "false" => SyntaxKind::FalseKeyword,
        "from" => SyntaxKind::FromKeyword,
        "function" => SyntaxKind::FunctionKeyword,
        "implements" => SyntaxKind::ImplementsKeyword,
        "import" => SyntaxKind::ImportKeyword,
        "let" => SyntaxKind::LetKeyword,
        "new" => SyntaxKind::NewKeyword,
        "null" => SyntaxKind::NullKeyword,
        "return" => SyntaxKind::ReturnKeyword,
        "static" => SyntaxKind::StaticKeyword,
        "this" => SyntaxKind::ThisKeyword,
        "true" => SyntaxKind::TrueKeyword,
        "type" => SyntaxKind::TypeKeyword,
        "typeof" => SyntaxKind::TypeOfKeyword,
        "var" => SyntaxKind::VarKeyword,
        _ => return None,
    };
    Some(kind)
}

/// Map identifier-like text to its token kind (keyword or plain identifier).
pub fn string_to_token(text: &str) -> SyntaxKind {
    text_to_keyword(text).unwrap_or(SyntaxKind::Identifier)
}
