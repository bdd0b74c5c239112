//! NodeArena creation (`add_*`) and access (`get_*`) methods, plus
//! source-order child enumeration for tree traversal.

use smallvec::smallvec;

use super::node::*;
use crate::scanner::SyntaxKind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Set the parent for a single child node. Children are created before
    /// parents, so the child index is always valid here.
    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    /// Set the parent for a list of children.
    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for child in list.iter() {
            self.set_parent(child, parent);
        }
    }

    /// Parent of a node; NONE for the root.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.extended_info
            .get(index.0 as usize)
            .map(|info| info.parent)
            .unwrap_or(NodeIndex::NONE)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    /// Add a token-like node with no additional data.
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind as u16, pos, end))
    }

    pub fn add_identifier(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(kind as u16, pos, end, data_index))
    }

    pub fn add_literal(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind as u16, pos, end, data_index))
    }

    pub fn add_call_expr(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: CallExprData) -> NodeIndex {
        let data_index = self.call_exprs.len() as u32;
        let expression = data.expression;
        let arguments = data.arguments.clone();
        self.call_exprs.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(expression, index);
        self.set_parent_list(&arguments, index);
        index
    }

    pub fn add_access_expr(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: AccessExprData) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        let (expression, argument) = (data.expression, data.argument);
        self.access_exprs.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(expression, index);
        self.set_parent(argument, index);
        index
    }

    pub fn add_binary_expr(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let data_index = self.binary_exprs.len() as u32;
        let (left, right) = (data.left, data.right);
        self.binary_exprs.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::BinaryExpression as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent(left, index);
        self.set_parent(right, index);
        index
    }

    /// Add an object or array literal expression.
    pub fn add_literal_expr(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LiteralExprData) -> NodeIndex {
        let data_index = self.literal_exprs.len() as u32;
        let elements = data.elements.clone();
        self.literal_exprs.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent_list(&elements, index);
        index
    }

    pub fn add_property_assignment(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: PropertyAssignmentData,
    ) -> NodeIndex {
        let data_index = self.property_assignments.len() as u32;
        let (name, initializer) = (data.name, data.initializer);
        self.property_assignments.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(name, index);
        self.set_parent(initializer, index);
        index
    }

    /// Add a single-child wrapper node (decorator, parenthesized expression,
    /// spread, expression statement, computed name, prefix unary, return).
    pub fn add_wrapped(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: WrappedData) -> NodeIndex {
        let data_index = self.wrapped.len() as u32;
        let expression = data.expression;
        self.wrapped.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(expression, index);
        index
    }

    pub fn add_arrow_function(&mut self, pos: u32, end: u32, data: ArrowFunctionData) -> NodeIndex {
        let data_index = self.arrows.len() as u32;
        let parameters = data.parameters.clone();
        let body = data.body;
        self.arrows.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::ArrowFunction as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&parameters, index);
        self.set_parent(body, index);
        index
    }

    pub fn add_variable_statement(&mut self, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        let data_index = self.variables.len() as u32;
        let declarations = data.declarations.clone();
        self.variables.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::VariableStatement as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&declarations, index);
        index
    }

    pub fn add_variable_declaration(&mut self, pos: u32, end: u32, data: VariableDeclarationData) -> NodeIndex {
        let data_index = self.variable_declarations.len() as u32;
        let (name, initializer) = (data.name, data.initializer);
        self.variable_declarations.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::VariableDeclaration as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent(name, index);
        self.set_parent(initializer, index);
        index
    }

    pub fn add_class(&mut self, pos: u32, end: u32, data: ClassData) -> NodeIndex {
        let data_index = self.classes.len() as u32;
        let decorators = data.decorators.clone();
        let name = data.name;
        let members = data.members.clone();
        self.classes.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::ClassDeclaration as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&decorators, index);
        self.set_parent(name, index);
        self.set_parent_list(&members, index);
        index
    }

    pub fn add_class_member(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: ClassMemberData) -> NodeIndex {
        let data_index = self.class_members.len() as u32;
        let (name, initializer) = (data.name, data.initializer);
        self.class_members.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(name, index);
        self.set_parent(initializer, index);
        index
    }

    pub fn add_import_decl(&mut self, pos: u32, end: u32, data: ImportDeclData) -> NodeIndex {
        let data_index = self.import_decls.len() as u32;
        let (clause, specifier) = (data.import_clause, data.module_specifier);
        self.import_decls.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::ImportDeclaration as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent(clause, index);
        self.set_parent(specifier, index);
        index
    }

    pub fn add_import_clause(&mut self, pos: u32, end: u32, data: ImportClauseData) -> NodeIndex {
        let data_index = self.import_clauses.len() as u32;
        let (name, named) = (data.name, data.named_bindings);
        self.import_clauses.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::ImportClause as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent(name, index);
        self.set_parent(named, index);
        index
    }

    /// Add an import/export specifier or a namespace import.
    pub fn add_specifier(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: SpecifierData) -> NodeIndex {
        let data_index = self.specifiers.len() as u32;
        let (property_name, name) = (data.property_name, data.name);
        self.specifiers.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent(property_name, index);
        self.set_parent(name, index);
        index
    }

    /// Add a `NamedImports` or export declaration node.
    pub fn add_named_bindings(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: NamedBindingsData) -> NodeIndex {
        let data_index = self.named_bindings.len() as u32;
        let elements = data.elements.clone();
        let specifier = data.module_specifier;
        self.named_bindings.push(data);
        let index = self.push_node(Node::with_data(kind as u16, pos, end, data_index));
        self.set_parent_list(&elements, index);
        self.set_parent(specifier, index);
        index
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        let statements = data.statements.clone();
        self.source_files.push(data);
        let index = self.push_node(Node::with_data(
            SyntaxKind::SourceFile as u16,
            pos,
            end,
            data_index,
        ));
        self.set_parent_list(&statements, index);
        index
    }

    /// Set flags on an already-created node.
    pub fn set_flags(&mut self, index: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.nodes.get_mut(index.0 as usize) {
            node.flags |= flags.bits();
        }
    }

    // ============================================================================
    // Node Access Methods
    // ============================================================================

    /// Get a thin node header by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Kind of a node, or `Unknown` for NONE.
    #[inline]
    pub fn kind(&self, index: NodeIndex) -> SyntaxKind {
        self.get(index)
            .map(|n| kind_of(n.kind))
            .unwrap_or(SyntaxKind::Unknown)
    }

    /// Check a node's kind.
    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.get(index).is_some_and(|n| n.kind == kind as u16)
    }

    /// Get identifier data. Returns None if the node is not an identifier.
    #[inline]
    pub fn get_identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::Identifier) || node.is(SyntaxKind::PrivateIdentifier))
        {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Text of an identifier node, if `index` is one.
    #[inline]
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier(index).map(|d| d.text.as_str())
    }

    /// Get literal data (string/numeric/template cooked value).
    #[inline]
    pub fn get_literal(&self, index: NodeIndex) -> Option<&LiteralData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::StringLiteral)
                || node.is(SyntaxKind::NumericLiteral)
                || node.is(SyntaxKind::NoSubstitutionTemplateLiteral))
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Cooked value of a string literal node, if `index` is one.
    #[inline]
    pub fn string_literal_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if node.is(SyntaxKind::StringLiteral) {
            self.literals.get(node.data_index as usize).map(|d| d.text.as_str())
        } else {
            None
        }
    }

    /// Get call expression data (also covers `new` expressions).
    #[inline]
    pub fn get_call_expr(&self, index: NodeIndex) -> Option<&CallExprData> {
        let node = self.get(index)?;
        if node.has_data() && (node.is(SyntaxKind::CallExpression) || node.is(SyntaxKind::NewExpression)) {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get property/element access data.
    #[inline]
    pub fn get_access_expr(&self, index: NodeIndex) -> Option<&AccessExprData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::PropertyAccessExpression) || node.is(SyntaxKind::ElementAccessExpression))
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binary_expr(&self, index: NodeIndex) -> Option<&BinaryExprData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::BinaryExpression) {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get object/array literal data.
    #[inline]
    pub fn get_literal_expr(&self, index: NodeIndex) -> Option<&LiteralExprData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::ObjectLiteralExpression) || node.is(SyntaxKind::ArrayLiteralExpression))
        {
            self.literal_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_property_assignment(&self, index: NodeIndex) -> Option<&PropertyAssignmentData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::PropertyAssignment) || node.is(SyntaxKind::ShorthandPropertyAssignment))
        {
            self.property_assignments.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get wrapper data (decorator, parenthesized, spread, expression
    /// statement, computed name, prefix unary, return).
    #[inline]
    pub fn get_wrapped(&self, index: NodeIndex) -> Option<&WrappedData> {
        let node = self.get(index)?;
        if node.has_data() && is_wrapped_kind(kind_of(node.kind)) {
            self.wrapped.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_arrow_function(&self, index: NodeIndex) -> Option<&ArrowFunctionData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::ArrowFunction) {
            self.arrows.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_statement(&self, index: NodeIndex) -> Option<&VariableData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::VariableStatement) {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, index: NodeIndex) -> Option<&VariableDeclarationData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::VariableDeclaration) {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_class(&self, index: NodeIndex) -> Option<&ClassData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::ClassDeclaration) {
            self.classes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_class_member(&self, index: NodeIndex) -> Option<&ClassMemberData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::PropertyDeclaration)
                || node.is(SyntaxKind::MethodDeclaration)
                || node.is(SyntaxKind::FunctionDeclaration))
        {
            self.class_members.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_import_decl(&self, index: NodeIndex) -> Option<&ImportDeclData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::ImportDeclaration) {
            self.import_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_import_clause(&self, index: NodeIndex) -> Option<&ImportClauseData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::ImportClause) {
            self.import_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_specifier(&self, index: NodeIndex) -> Option<&SpecifierData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::ImportSpecifier)
                || node.is(SyntaxKind::ExportSpecifier)
                || node.is(SyntaxKind::NamespaceImport))
        {
            self.specifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_named_bindings(&self, index: NodeIndex) -> Option<&NamedBindingsData> {
        let node = self.get(index)?;
        if node.has_data()
            && (node.is(SyntaxKind::NamedImports) || node.is(SyntaxKind::ExportDeclaration))
        {
            self.named_bindings.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, index: NodeIndex) -> Option<&SourceFileData> {
        let node = self.get(index)?;
        if node.has_data() && node.is(SyntaxKind::SourceFile) {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Top-level statements of the source file root.
    pub fn statements(&self, root: NodeIndex) -> &[NodeIndex] {
        self.get_source_file(root)
            .map(|d| d.statements.nodes.as_slice())
            .unwrap_or(&[])
    }

    // ============================================================================
    // Child Enumeration
    // ============================================================================

    /// Children of a node in source order. This drives all tree traversal;
    /// the order here must match the order of the underlying source text.
    pub fn children(&self, index: NodeIndex) -> Children {
        let Some(node) = self.get(index) else {
            return smallvec![];
        };
        let mut out: Children = smallvec![];
        let push = |out: &mut Children, idx: NodeIndex| {
            if idx.is_some() {
                out.push(idx);
            }
        };
        match kind_of(node.kind) {
            SyntaxKind::SourceFile => {
                if let Some(data) = self.source_files.get(node.data_index as usize) {
                    out.extend(data.statements.iter());
                }
            }
            SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
                if let Some(data) = self.call_exprs.get(node.data_index as usize) {
                    push(&mut out, data.expression);
                    out.extend(data.arguments.iter());
                }
            }
            SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression => {
                if let Some(data) = self.access_exprs.get(node.data_index as usize) {
                    push(&mut out, data.expression);
                    push(&mut out, data.argument);
                }
            }
            SyntaxKind::BinaryExpression => {
                if let Some(data) = self.binary_exprs.get(node.data_index as usize) {
                    push(&mut out, data.left);
                    push(&mut out, data.right);
                }
            }
            SyntaxKind::ObjectLiteralExpression | SyntaxKind::ArrayLiteralExpression => {
                if let Some(data) = self.literal_exprs.get(node.data_index as usize) {
                    out.extend(data.elements.iter());
                }
            }
            SyntaxKind::PropertyAssignment | SyntaxKind::ShorthandPropertyAssignment => {
                if let Some(data) = self.property_assignments.get(node.data_index as usize) {
                    push(&mut out, data.name);
                    push(&mut out, data.initializer);
                }
            }
            SyntaxKind::ArrowFunction => {
                if let Some(data) = self.arrows.get(node.data_index as usize) {
                    out.extend(data.parameters.iter());
                    push(&mut out, data.body);
                }
            }
            SyntaxKind::VariableStatement => {
                if let Some(data) = self.variables.get(node.data_index as usize) {
                    out.extend(data.declarations.iter());
                }
            }
            SyntaxKind::VariableDeclaration => {
                if let Some(data) = self.variable_declarations.get(node.data_index as usize) {
                    push(&mut out, data.name);
                    push(&mut out, data.initializer);
                }
            }
            SyntaxKind::ClassDeclaration => {
                if let Some(data) = self.classes.get(node.data_index as usize) {
                    out.extend(data.decorators.iter());
                    push(&mut out, data.name);
                    out.extend(data.members.iter());
                }
            }
            SyntaxKind::PropertyDeclaration | SyntaxKind::MethodDeclaration | SyntaxKind::FunctionDeclaration => {
                if let Some(data) = self.class_members.get(node.data_index as usize) {
                    push(&mut out, data.name);
                    push(&mut out, data.initializer);
                }
            }
            SyntaxKind::ImportDeclaration => {
                if let Some(data) = self.import_decls.get(node.data_index as usize) {
                    push(&mut out, data.import_clause);
                    push(&mut out, data.module_specifier);
                }
            }
            SyntaxKind::ImportClause => {
                if let Some(data) = self.import_clauses.get(node.data_index as usize) {
                    push(&mut out, data.name);
                    push(&mut out, data.named_bindings);
                }
            }
            SyntaxKind::NamedImports | SyntaxKind::ExportDeclaration => {
                if let Some(data) = self.named_bindings.get(node.data_index as usize) {
                    out.extend(data.elements.iter());
                    push(&mut out, data.module_specifier);
                }
            }
            SyntaxKind::ImportSpecifier | SyntaxKind::ExportSpecifier | SyntaxKind::NamespaceImport => {
                if let Some(data) = self.specifiers.get(node.data_index as usize) {
                    push(&mut out, data.property_name);
                    push(&mut out, data.name);
                }
            }
            kind if is_wrapped_kind(kind) => {
                if let Some(data) = self.wrapped.get(node.data_index as usize) {
                    push(&mut out, data.expression);
                }
            }
            _ => {}
        }
        out
    }
}

/// Convert a raw kind value back to `SyntaxKind` for matching. Values only
/// ever originate from `SyntaxKind` casts during node creation.
#[inline]
pub(crate) fn kind_of(raw: u16) -> SyntaxKind {
    KIND_TABLE.get(raw as usize).copied().unwrap_or(SyntaxKind::Unknown)
}

fn is_wrapped_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Decorator
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::SpreadElement
            | SyntaxKind::SpreadAssignment
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::ComputedPropertyName
            | SyntaxKind::PrefixUnaryExpression
            | SyntaxKind::ReturnStatement
            | SyntaxKind::Parameter
    )
}

/// Kind lookup table indexed by the `u16` discriminant.
static KIND_TABLE: &[SyntaxKind] = &[
    SyntaxKind::Unknown,
    SyntaxKind::EndOfFileToken,
    SyntaxKind::NumericLiteral,
    SyntaxKind::StringLiteral,
    SyntaxKind::NoSubstitutionTemplateLiteral,
    SyntaxKind::RegularExpressionLiteral,
    SyntaxKind::OpenBraceToken,
    SyntaxKind::CloseBraceToken,
    SyntaxKind::OpenParenToken,
    SyntaxKind::CloseParenToken,
    SyntaxKind::OpenBracketToken,
    SyntaxKind::CloseBracketToken,
    SyntaxKind::DotToken,
    SyntaxKind::DotDotDotToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CommaToken,
    SyntaxKind::LessThanToken,
    SyntaxKind::GreaterThanToken,
    SyntaxKind::LessThanEqualsToken,
    SyntaxKind::GreaterThanEqualsToken,
    SyntaxKind::EqualsEqualsToken,
    SyntaxKind::ExclamationEqualsToken,
    SyntaxKind::EqualsEqualsEqualsToken,
    SyntaxKind::ExclamationEqualsEqualsToken,
    SyntaxKind::EqualsGreaterThanToken,
    SyntaxKind::PlusToken,
    SyntaxKind::MinusToken,
    SyntaxKind::AsteriskToken,
    SyntaxKind::SlashToken,
    SyntaxKind::PercentToken,
    SyntaxKind::PlusPlusToken,
    SyntaxKind::MinusMinusToken,
    SyntaxKind::AmpersandToken,
    SyntaxKind::AmpersandAmpersandToken,
    SyntaxKind::BarToken,
    SyntaxKind::BarBarToken,
    SyntaxKind::CaretToken,
    SyntaxKind::ExclamationToken,
    SyntaxKind::TildeToken,
    SyntaxKind::QuestionToken,
    SyntaxKind::QuestionQuestionToken,
    SyntaxKind::QuestionDotToken,
    SyntaxKind::ColonToken,
    SyntaxKind::AtToken,
    SyntaxKind::EqualsToken,
    SyntaxKind::PlusEqualsToken,
    SyntaxKind::MinusEqualsToken,
    SyntaxKind::Identifier,
    SyntaxKind::PrivateIdentifier,
    SyntaxKind::AsKeyword,
    SyntaxKind::AsyncKeyword,
    SyntaxKind::AwaitKeyword,
    SyntaxKind::ClassKeyword,
    SyntaxKind::ConstKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::ExportKeyword,
    SyntaxKind::ExtendsKeyword,
    SyntaxKind::FalseKeyword,
    SyntaxKind::FromKeyword,
    SyntaxKind::FunctionKeyword,
    SyntaxKind::ImplementsKeyword,
    SyntaxKind::ImportKeyword,
    SyntaxKind::LetKeyword,
    SyntaxKind::NewKeyword,
    SyntaxKind::NullKeyword,
    SyntaxKind::ReturnKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::ThisKeyword,
    SyntaxKind::TrueKeyword,
    SyntaxKind::TypeKeyword,
    SyntaxKind::TypeOfKeyword,
    SyntaxKind::VarKeyword,
    SyntaxKind::ComputedPropertyName,
    SyntaxKind::Decorator,
    SyntaxKind::Parameter,
    SyntaxKind::PrefixUnaryExpression,
    SyntaxKind::BinaryExpression,
    SyntaxKind::PropertyAccessExpression,
    SyntaxKind::ElementAccessExpression,
    SyntaxKind::CallExpression,
    SyntaxKind::NewExpression,
    SyntaxKind::ParenthesizedExpression,
    SyntaxKind::ArrowFunction,
    SyntaxKind::SpreadElement,
    SyntaxKind::ObjectLiteralExpression,
    SyntaxKind::ArrayLiteralExpression,
    SyntaxKind::PropertyAssignment,
    SyntaxKind::ShorthandPropertyAssignment,
    SyntaxKind::SpreadAssignment,
    SyntaxKind::VariableStatement,
    SyntaxKind::VariableDeclaration,
    SyntaxKind::ExpressionStatement,
    SyntaxKind::ReturnStatement,
    SyntaxKind::FunctionDeclaration,
    SyntaxKind::ClassDeclaration,
    SyntaxKind::PropertyDeclaration,
    SyntaxKind::MethodDeclaration,
    SyntaxKind::ImportDeclaration,
    SyntaxKind::ImportClause,
    SyntaxKind::NamespaceImport,
    SyntaxKind::NamedImports,
    SyntaxKind::ImportSpecifier,
    SyntaxKind::ExportDeclaration,
    SyntaxKind::ExportSpecifier,
    SyntaxKind::SourceFile,
];
