//! Thin node architecture for a cache-efficient parse tree.
//!
//! Each node is a 16-byte header (kind, flags, pos, end, data index) stored
//! in one flat vector; kind-specific payloads live in typed side pools and
//! are reached through `data_index`. Pools are grouped by data shape rather
//! than one-per-kind: object and array literals share a pool, property and
//! element access share a pool, and single-child wrapper kinds (decorator,
//! parenthesized, spread, expression statement, ...) share a pool.
//!
//! Positions follow the TypeScript convention: `pos` is the full start,
//! including leading trivia; `end` is one past the last token. A node's
//! trivia-skipped start is recomputed with `skip_trivia` when needed.
//! The tree is immutable once parsed - edits recompute text, never nodes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::scanner::SyntaxKind;

/// Handle to a node in the arena. `NodeIndex::NONE` means "absent".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// An ordered list of child node handles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn empty() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

bitflags! {
    /// Packed per-node flags. Fits the 2-byte `flags` field of the header.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct NodeFlags: u16 {
        /// `export` modifier present.
        const EXPORT = 1 << 0;
        /// `default` modifier present (`export default`).
        const DEFAULT = 1 << 1;
        /// `const` declaration list.
        const CONST = 1 << 2;
        /// `let` declaration list.
        const LET = 1 << 3;
        /// `import type` / `export type`.
        const TYPE_ONLY = 1 << 4;
        /// `static` member modifier.
        const STATIC = 1 << 5;
        /// `async` modifier.
        const ASYNC = 1 << 6;
        /// Node synthesized during error recovery.
        const RECOVERED = 1 << 7;
    }
}

/// A thin 16-byte node header.
///
/// Layout:
/// - `kind`: 2 bytes (`SyntaxKind` value)
/// - `flags`: 2 bytes (packed `NodeFlags`)
/// - `pos`: 4 bytes (full start, includes leading trivia)
/// - `end`: 4 bytes (one past the last token)
/// - `data_index`: 4 bytes (index into a typed pool, `u32::MAX` = no data)
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: u16,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    /// Create a node header with no associated data.
    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    /// Create a node header with a data index.
    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    /// Check the node's kind against a `SyntaxKind`.
    #[inline]
    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind as u16
    }

    #[inline]
    pub fn node_flags(&self) -> NodeFlags {
        NodeFlags::from_bits_truncate(self.flags)
    }
}

/// Side data kept outside the 16-byte header.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    /// Parent node, set during construction (children are created before
    /// parents, so indices are always valid by the time they are linked).
    pub parent: NodeIndex,
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for identifier nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// Data for string/numeric/template literals. `text` is the cooked value
/// (string contents without quotes, escapes resolved).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for call and `new` expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Data for property and element access expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    /// Member name for property access; index expression for element access.
    pub argument: NodeIndex,
}

/// Data for binary (and assignment) expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: u16,
    pub right: NodeIndex,
}

/// Data for object and array literal expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

/// Data for property assignments inside object literals.
/// `initializer` is NONE for shorthand properties.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for single-child wrapper nodes: decorators, parenthesized
/// expressions, spread elements/assignments, expression statements, computed
/// property names, prefix unary operands, and return statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedData {
    pub expression: NodeIndex,
    /// Operator kind for prefix unary expressions; 0 otherwise.
    pub operator: u16,
}

/// Data for arrow functions. The body is either an expression or NONE when
/// the block body was skipped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrowFunctionData {
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for variable statements (the declaration list is flattened in).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub declarations: NodeList,
}

/// Data for a single variable declarator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for class declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub decorators: NodeList,
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for class members and function declarations (best-effort: method
/// bodies are skipped, only names and property initializers are kept).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for import declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclData {
    /// `ImportClause` node; NONE for bare side-effect imports.
    pub import_clause: NodeIndex,
    /// Module specifier string literal.
    pub module_specifier: NodeIndex,
}

/// Data for import clauses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportClauseData {
    /// Default import binding identifier; NONE when absent.
    pub name: NodeIndex,
    /// `NamespaceImport` or `NamedImports` node; NONE when absent.
    pub named_bindings: NodeIndex,
}

/// Data for import/export specifiers and namespace imports.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecifierData {
    /// Original name when aliased (`orig as local`); NONE when not aliased.
    pub property_name: NodeIndex,
    /// Local binding identifier.
    pub name: NodeIndex,
}

/// Data for `NamedImports` / export declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedBindingsData {
    pub elements: NodeList,
    /// Module specifier for `export ... from 'm'`; NONE otherwise.
    pub module_specifier: NodeIndex,
}

/// Data for the source file root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
}

// =============================================================================
// NodeArena
// =============================================================================

/// Arena holding all nodes of one parse. Node headers live in `nodes`;
/// payloads in the typed pools below, reached through `data_index`.
#[derive(Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) extended_info: Vec<ExtendedNodeInfo>,
    pub(crate) identifiers: Vec<IdentifierData>,
    pub(crate) literals: Vec<LiteralData>,
    pub(crate) call_exprs: Vec<CallExprData>,
    pub(crate) access_exprs: Vec<AccessExprData>,
    pub(crate) binary_exprs: Vec<BinaryExprData>,
    pub(crate) literal_exprs: Vec<LiteralExprData>,
    pub(crate) property_assignments: Vec<PropertyAssignmentData>,
    pub(crate) wrapped: Vec<WrappedData>,
    pub(crate) arrows: Vec<ArrowFunctionData>,
    pub(crate) variables: Vec<VariableData>,
    pub(crate) variable_declarations: Vec<VariableDeclarationData>,
    pub(crate) classes: Vec<ClassData>,
    pub(crate) class_members: Vec<ClassMemberData>,
    pub(crate) import_decls: Vec<ImportDeclData>,
    pub(crate) import_clauses: Vec<ImportClauseData>,
    pub(crate) specifiers: Vec<SpecifierData>,
    pub(crate) named_bindings: Vec<NamedBindingsData>,
    pub(crate) source_files: Vec<SourceFileData>,
}

/// Children of a node, in source order.
pub type Children = SmallVec<[NodeIndex; 8]>;
