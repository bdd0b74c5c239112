//! Statement parsing: imports, exports, variable statements, decorated
//! classes, functions, and the expression-statement fallback.

use super::ParserState;
use super::node::*;
use crate::scanner::SyntaxKind;

impl ParserState {
    /// Parse the whole file, returning the `SourceFile` root node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let end = self.scanner.text().len() as u32;
        let mut statements = Vec::new();
        while !self.at(SyntaxKind::EndOfFileToken) {
            let before = self.token_start();
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            // Recovery guard: never loop without consuming.
            if self.token_start() == before && !self.at(SyntaxKind::EndOfFileToken) {
                self.error_at_current(format!("unexpected token {:?}", self.token()));
                self.next_token();
            }
        }
        self.arena.add_source_file(
            0,
            end,
            SourceFileData {
                statements: NodeList::new(statements),
            },
        )
    }

    fn parse_statement(&mut self) -> Option<NodeIndex> {
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
                None
            }
            SyntaxKind::ImportKeyword => {
                // `import(...)` and `import.meta` are expressions.
                let next = self.peek();
                if next == SyntaxKind::OpenParenToken || next == SyntaxKind::DotToken {
                    Some(self.parse_expression_statement())
                } else {
                    Some(self.parse_import_declaration())
                }
            }
            SyntaxKind::ExportKeyword => Some(self.parse_export()),
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                Some(self.parse_variable_statement())
            }
            SyntaxKind::AtToken => Some(self.parse_decorated_declaration()),
            SyntaxKind::ClassKeyword => {
                Some(self.parse_class_declaration(NodeList::empty(), NodeFlags::empty()))
            }
            SyntaxKind::FunctionKeyword => Some(self.parse_function_declaration(NodeFlags::empty())),
            SyntaxKind::AsyncKeyword if self.peek() == SyntaxKind::FunctionKeyword => {
                self.next_token();
                Some(self.parse_function_declaration(NodeFlags::ASYNC))
            }
            SyntaxKind::ReturnKeyword => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let expression = self.parse_expression();
        self.eat(SyntaxKind::SemicolonToken);
        self.arena.add_wrapped(
            SyntaxKind::ExpressionStatement,
            pos,
            self.node_end(),
            WrappedData { expression, operator: 0 },
        )
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let expression = if self.at(SyntaxKind::SemicolonToken)
            || self.at(SyntaxKind::CloseBraceToken)
            || self.at(SyntaxKind::EndOfFileToken)
        {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.eat(SyntaxKind::SemicolonToken);
        self.arena.add_wrapped(
            SyntaxKind::ReturnStatement,
            pos,
            self.node_end(),
            WrappedData { expression, operator: 0 },
        )
    }

    // --- Imports / exports ---

    fn parse_import_declaration(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut flags = NodeFlags::empty();

        // Bare side-effect import: `import 'module';`
        if self.at(SyntaxKind::StringLiteral) {
            let specifier = self.parse_module_specifier();
            self.eat(SyntaxKind::SemicolonToken);
            return self.arena.add_import_decl(
                pos,
                self.node_end(),
                ImportDeclData {
                    import_clause: NodeIndex::NONE,
                    module_specifier: specifier,
                },
            );
        }

        // `import type ...` (but `import type from 'm'` imports a default
        // binding named `type`).
        if self.at(SyntaxKind::TypeKeyword) {
            let next = self.peek();
            if next != SyntaxKind::FromKeyword && next != SyntaxKind::CommaToken {
                self.next_token();
                flags |= NodeFlags::TYPE_ONLY;
            }
        }

        let clause_pos = self.token_pos();
        let mut default_name = NodeIndex::NONE;
        if self.token().is_identifier_or_keyword() && !self.at(SyntaxKind::FromKeyword) {
            default_name = self.parse_identifier_name();
            self.eat(SyntaxKind::CommaToken);
        }
        let named_bindings = match self.token() {
            SyntaxKind::AsteriskToken => self.parse_namespace_import(),
            SyntaxKind::OpenBraceToken => self.parse_named_imports(),
            _ => NodeIndex::NONE,
        };
        let clause = if default_name.is_some() || named_bindings.is_some() {
            self.arena.add_import_clause(
                clause_pos,
                self.node_end(),
                ImportClauseData {
                    name: default_name,
                    named_bindings,
                },
            )
        } else {
            NodeIndex::NONE
        };

        self.expect(SyntaxKind::FromKeyword);
        let specifier = self.parse_module_specifier();
        self.eat(SyntaxKind::SemicolonToken);
        let decl = self.arena.add_import_decl(
            pos,
            self.node_end(),
            ImportDeclData {
                import_clause: clause,
                module_specifier: specifier,
            },
        );
        self.arena.set_flags(decl, flags);
        decl
    }

    fn parse_module_specifier(&mut self) -> NodeIndex {
        if self.at(SyntaxKind::StringLiteral) {
            let (pos, end) = (self.token_pos(), self.token_end());
            let data = LiteralData {
                text: self.token_value().to_string(),
            };
            self.next_token();
            self.arena.add_literal(SyntaxKind::StringLiteral, pos, end, data)
        } else {
            self.error_at_current(format!("module specifier expected, found {:?}", self.token()));
            self.unknown_here()
        }
    }

    /// `* as ns`
    fn parse_namespace_import(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        self.expect(SyntaxKind::AsKeyword);
        let name = self.parse_identifier_name();
        self.arena.add_specifier(
            SyntaxKind::NamespaceImport,
            pos,
            self.node_end(),
            SpecifierData {
                property_name: NodeIndex::NONE,
                name,
            },
        )
    }

    /// `{ a, b as c, type D }`
    fn parse_named_imports(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut elements = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
            elements.push(self.parse_import_or_export_specifier(SyntaxKind::ImportSpecifier));
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
        self.arena.add_named_bindings(
            SyntaxKind::NamedImports,
            pos,
            self.node_end(),
            NamedBindingsData {
                elements: NodeList::new(elements),
                module_specifier: NodeIndex::NONE,
            },
        )
    }

    fn parse_import_or_export_specifier(&mut self, kind: SyntaxKind) -> NodeIndex {
        let pos = self.token_pos();
        // Inline `type` modifier: `{ type Foo }`, unless `type` is itself
        // the imported name.
        if self.at(SyntaxKind::TypeKeyword) {
            let next = self.peek();
            if next != SyntaxKind::CommaToken
                && next != SyntaxKind::CloseBraceToken
                && next != SyntaxKind::AsKeyword
            {
                self.next_token();
            }
        }
        let first = self.parse_identifier_name();
        let (property_name, name) = if self.eat(SyntaxKind::AsKeyword) {
            (first, self.parse_identifier_name())
        } else {
            (NodeIndex::NONE, first)
        };
        self.arena.add_specifier(
            kind,
            pos,
            self.node_end(),
            SpecifierData { property_name, name },
        )
    }

    fn parse_export(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();

        match self.token() {
            SyntaxKind::DefaultKeyword => {
                self.next_token();
                let statement = self.parse_expression_statement();
                self.arena.set_flags(statement, NodeFlags::EXPORT | NodeFlags::DEFAULT);
                statement
            }
            SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken => {
                self.parse_export_declaration(pos, NodeFlags::empty())
            }
            SyntaxKind::TypeKeyword if self.peek() == SyntaxKind::OpenBraceToken => {
                self.next_token();
                self.parse_export_declaration(pos, NodeFlags::TYPE_ONLY)
            }
            _ => {
                let statement = self.parse_statement().unwrap_or_else(|| self.unknown_here());
                self.arena.set_flags(statement, NodeFlags::EXPORT);
                statement
            }
        }
    }

    /// `export { ... } [from 'm']` / `export * [as ns] from 'm'`
    fn parse_export_declaration(&mut self, pos: u32, flags: NodeFlags) -> NodeIndex {
        let mut elements = Vec::new();
        if self.at(SyntaxKind::AsteriskToken) {
            self.next_token();
            if self.eat(SyntaxKind::AsKeyword) {
                self.parse_identifier_name();
            }
        } else {
            self.next_token();
            while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
                elements.push(self.parse_import_or_export_specifier(SyntaxKind::ExportSpecifier));
                if !self.eat(SyntaxKind::CommaToken) {
                    break;
                }
            }
            self.expect(SyntaxKind::CloseBraceToken);
        }
        let module_specifier = if self.eat(SyntaxKind::FromKeyword) {
            self.parse_module_specifier()
        } else {
            NodeIndex::NONE
        };
        self.eat(SyntaxKind::SemicolonToken);
        let decl = self.arena.add_named_bindings(
            SyntaxKind::ExportDeclaration,
            pos,
            self.node_end(),
            NamedBindingsData {
                elements: NodeList::new(elements),
                module_specifier,
            },
        );
        self.arena.set_flags(decl, flags | NodeFlags::EXPORT);
        decl
    }

    // --- Variable statements ---

    fn parse_variable_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let flags = match self.token() {
            SyntaxKind::ConstKeyword => NodeFlags::CONST,
            SyntaxKind::LetKeyword => NodeFlags::LET,
            _ => NodeFlags::empty(),
        };
        self.next_token();
        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declaration());
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.eat(SyntaxKind::SemicolonToken);
        let statement = self.arena.add_variable_statement(
            pos,
            self.node_end(),
            VariableData {
                declarations: NodeList::new(declarations),
            },
        );
        self.arena.set_flags(statement, flags);
        statement
    }

    fn parse_variable_declaration(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let name = match self.token() {
            // Destructuring patterns are skipped wholesale.
            SyntaxKind::OpenBraceToken => {
                self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
                self.recovered_span(pos)
            }
            SyntaxKind::OpenBracketToken => {
                self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
                self.recovered_span(pos)
            }
            _ => self.parse_identifier_name(),
        };
        self.eat(SyntaxKind::ExclamationToken);
        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(false, false);
        }
        let initializer = if self.eat(SyntaxKind::EqualsToken) {
            self.parse_assignment()
        } else {
            NodeIndex::NONE
        };
        self.arena.add_variable_declaration(
            pos,
            self.node_end(),
            VariableDeclarationData { name, initializer },
        )
    }

    fn recovered_span(&mut self, pos: u32) -> NodeIndex {
        let node = self.arena.add_token(SyntaxKind::Unknown, pos, self.node_end());
        self.arena.set_flags(node, NodeFlags::RECOVERED);
        node
    }

    // --- Classes ---

    fn parse_decorated_declaration(&mut self) -> NodeIndex {
        let decorators = self.parse_decorators();
        let mut flags = NodeFlags::empty();
        if self.eat(SyntaxKind::ExportKeyword) {
            flags |= NodeFlags::EXPORT;
            if self.eat(SyntaxKind::DefaultKeyword) {
                flags |= NodeFlags::DEFAULT;
            }
        }
        if self.at(SyntaxKind::ClassKeyword) {
            self.parse_class_declaration(decorators, flags)
        } else {
            self.error_at_current(format!(
                "class declaration expected after decorators, found {:?}",
                self.token()
            ));
            self.unknown_here()
        }
    }

    fn parse_decorators(&mut self) -> NodeList {
        let mut decorators = Vec::new();
        while self.at(SyntaxKind::AtToken) {
            let pos = self.token_pos();
            self.next_token();
            let expression = self.parse_call_chain();
            decorators.push(self.arena.add_wrapped(
                SyntaxKind::Decorator,
                pos,
                self.node_end(),
                WrappedData { expression, operator: 0 },
            ));
        }
        NodeList::new(decorators)
    }

    fn parse_class_declaration(&mut self, decorators: NodeList, mut flags: NodeFlags) -> NodeIndex {
        let pos = if decorators.is_empty() {
            self.token_pos()
        } else {
            // Class span includes its decorators.
            self.arena.get(decorators.nodes[0]).map(|n| n.pos).unwrap_or_else(|| self.token_pos())
        };
        if self.eat(SyntaxKind::ExportKeyword) {
            flags |= NodeFlags::EXPORT;
            if self.eat(SyntaxKind::DefaultKeyword) {
                flags |= NodeFlags::DEFAULT;
            }
        }
        self.expect(SyntaxKind::ClassKeyword);
        let name = if self.token().is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            NodeIndex::NONE
        };
        // Heritage clauses are consumed for position tracking only.
        if self.eat(SyntaxKind::ExtendsKeyword) {
            self.parse_call_chain();
        }
        if self.eat(SyntaxKind::ImplementsKeyword) {
            self.parse_call_chain();
            while self.eat(SyntaxKind::CommaToken) {
                self.parse_call_chain();
            }
        }
        let mut members = Vec::new();
        if self.expect(SyntaxKind::OpenBraceToken) {
            while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
                let before = self.token_start();
                members.push(self.parse_class_member());
                if self.token_start() == before {
                    // Recovery guard, as in the top-level loop.
                    self.error_at_current(format!("unexpected token {:?}", self.token()));
                    self.next_token();
                }
            }
            self.expect(SyntaxKind::CloseBraceToken);
        }
        let class = self.arena.add_class(
            pos,
            self.node_end(),
            ClassData {
                decorators,
                name,
                members: NodeList::new(members),
            },
        );
        self.arena.set_flags(class, flags);
        class
    }

    fn parse_class_member(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        // Member decorators are consumed but not retained.
        if self.at(SyntaxKind::AtToken) {
            self.parse_decorators();
        }
        let mut flags = NodeFlags::empty();
        loop {
            match self.token() {
                SyntaxKind::StaticKeyword => {
                    flags |= NodeFlags::STATIC;
                    self.next_token();
                }
                SyntaxKind::AsyncKeyword if self.peek() != SyntaxKind::OpenParenToken => {
                    flags |= NodeFlags::ASYNC;
                    self.next_token();
                }
                SyntaxKind::Identifier
                    if is_member_modifier(self.token_text())
                        && self.peek().is_identifier_or_keyword() =>
                {
                    self.next_token();
                }
                _ => break,
            }
        }

        if self.eat(SyntaxKind::SemicolonToken) {
            return self.recovered_span(pos);
        }

        let name = self.parse_property_name();
        self.eat(SyntaxKind::QuestionToken);
        self.eat(SyntaxKind::ExclamationToken);

        if self.at(SyntaxKind::OpenParenToken) || self.at(SyntaxKind::LessThanToken) {
            // Method; signature and body are skipped.
            if self.at(SyntaxKind::LessThanToken) {
                self.skip_balanced(SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken);
            }
            if self.at(SyntaxKind::OpenParenToken) {
                self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
            }
            if self.at(SyntaxKind::ColonToken) {
                self.skip_type_annotation(false, true);
            }
            if self.at(SyntaxKind::OpenBraceToken) {
                self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
            } else {
                self.eat(SyntaxKind::SemicolonToken);
            }
            let member = self.arena.add_class_member(
                SyntaxKind::MethodDeclaration,
                pos,
                self.node_end(),
                ClassMemberData {
                    name,
                    initializer: NodeIndex::NONE,
                },
            );
            self.arena.set_flags(member, flags);
            return member;
        }

        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(false, false);
        }
        let initializer = if self.eat(SyntaxKind::EqualsToken) {
            self.parse_assignment()
        } else {
            NodeIndex::NONE
        };
        self.eat(SyntaxKind::SemicolonToken);
        let member = self.arena.add_class_member(
            SyntaxKind::PropertyDeclaration,
            pos,
            self.node_end(),
            ClassMemberData { name, initializer },
        );
        self.arena.set_flags(member, flags);
        member
    }

    // --- Functions ---

    fn parse_function_declaration(&mut self, flags: NodeFlags) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let name = if self.token().is_identifier_or_keyword() {
            self.parse_identifier_name()
        } else {
            NodeIndex::NONE
        };
        if self.at(SyntaxKind::LessThanToken) {
            self.skip_balanced(SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken);
        }
        if self.at(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(false, true);
        }
        if self.at(SyntaxKind::OpenBraceToken) {
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
        }
        let declaration = self.arena.add_class_member(
            SyntaxKind::FunctionDeclaration,
            pos,
            self.node_end(),
            ClassMemberData {
                name,
                initializer: NodeIndex::NONE,
            },
        );
        self.arena.set_flags(declaration, flags);
        declaration
    }
}

/// Soft member modifiers that are plain identifiers to the scanner.
fn is_member_modifier(text: &str) -> bool {
    matches!(
        text,
        "public" | "private" | "protected" | "readonly" | "abstract" | "override" | "declare"
    )
}
