//! Expression parsing.

use super::node::*;
use super::{ParserState, ParserSnapshot};
use crate::scanner::SyntaxKind;

/// Binary operator precedence; 0 means "not a binary operator".
fn binary_precedence(kind: SyntaxKind) -> u8 {
    match kind {
        SyntaxKind::BarBarToken | SyntaxKind::QuestionQuestionToken => 1,
        SyntaxKind::AmpersandAmpersandToken => 2,
        SyntaxKind::BarToken => 3,
        SyntaxKind::CaretToken => 4,
        SyntaxKind::AmpersandToken => 5,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => 6,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken => 7,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => 9,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => 10,
        _ => 0,
    }
}

/// Keywords that act as plain identifiers in expression position.
fn is_contextual_identifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::AsKeyword
            | SyntaxKind::AsyncKeyword
            | SyntaxKind::FromKeyword
            | SyntaxKind::TypeKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::ImplementsKeyword
            | SyntaxKind::LetKeyword
    )
}

impl ParserState {
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        self.parse_assignment()
    }

    pub(crate) fn parse_assignment(&mut self) -> NodeIndex {
        // Arrow functions need look-ahead: a parenthesized parameter list is
        // indistinguishable from a parenthesized expression until the `=>`.
        if self.at(SyntaxKind::OpenParenToken) && self.is_parenthesized_arrow() {
            return self.parse_arrow_function();
        }
        if self.at(SyntaxKind::AsyncKeyword) {
            let snapshot = self.snapshot();
            self.next_token();
            if self.at(SyntaxKind::OpenParenToken) && self.is_parenthesized_arrow() {
                let arrow = self.parse_arrow_function();
                self.arena.set_flags(arrow, NodeFlags::ASYNC);
                return arrow;
            }
            self.rewind(snapshot);
        }
        if (self.at(SyntaxKind::Identifier) || is_contextual_identifier(self.token()))
            && self.peek() == SyntaxKind::EqualsGreaterThanToken
        {
            return self.parse_simple_arrow_function();
        }

        let pos = self.token_pos();
        let left = self.parse_binary(1);
        match self.token() {
            SyntaxKind::EqualsToken | SyntaxKind::PlusEqualsToken | SyntaxKind::MinusEqualsToken => {
                let operator = self.token() as u16;
                self.next_token();
                let right = self.parse_assignment();
                self.arena.add_binary_expr(
                    pos,
                    self.node_end(),
                    BinaryExprData { left, operator, right },
                )
            }
            SyntaxKind::QuestionToken => {
                // Conditional expression, kept as two nested binary nodes:
                // (cond ? whenTrue) : whenFalse. Children stay in source
                // order, which is all positional analysis relies on.
                self.next_token();
                let when_true = self.parse_assignment();
                let inner = self.arena.add_binary_expr(
                    pos,
                    self.node_end(),
                    BinaryExprData {
                        left,
                        operator: SyntaxKind::QuestionToken as u16,
                        right: when_true,
                    },
                );
                self.expect(SyntaxKind::ColonToken);
                let when_false = self.parse_assignment();
                self.arena.add_binary_expr(
                    pos,
                    self.node_end(),
                    BinaryExprData {
                        left: inner,
                        operator: SyntaxKind::ColonToken as u16,
                        right: when_false,
                    },
                )
            }
            _ => left,
        }
    }

    fn parse_binary(&mut self, min_precedence: u8) -> NodeIndex {
        let pos = self.token_pos();
        let mut left = self.parse_unary();
        loop {
            let precedence = binary_precedence(self.token());
            if precedence == 0 || precedence < min_precedence {
                return left;
            }
            let operator = self.token() as u16;
            self.next_token();
            let right = self.parse_binary(precedence + 1);
            left = self.arena.add_binary_expr(
                pos,
                self.node_end(),
                BinaryExprData { left, operator, right },
            );
        }
    }

    fn parse_unary(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::AwaitKeyword => {
                let pos = self.token_pos();
                let operator = self.token() as u16;
                self.next_token();
                let operand = self.parse_unary();
                self.arena.add_wrapped(
                    SyntaxKind::PrefixUnaryExpression,
                    pos,
                    self.node_end(),
                    WrappedData {
                        expression: operand,
                        operator,
                    },
                )
            }
            _ => self.parse_call_chain(),
        }
    }

    /// Parse a primary expression followed by member access, element access,
    /// call, and tagged-template suffixes.
    pub(crate) fn parse_call_chain(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let mut expression = self.parse_primary();
        loop {
            match self.token() {
                SyntaxKind::DotToken | SyntaxKind::QuestionDotToken => {
                    let was_optional = self.at(SyntaxKind::QuestionDotToken);
                    self.next_token();
                    if was_optional && self.at(SyntaxKind::OpenParenToken) {
                        let arguments = self.parse_arguments();
                        expression = self.arena.add_call_expr(
                            SyntaxKind::CallExpression,
                            pos,
                            self.node_end(),
                            CallExprData { expression, arguments },
                        );
                        continue;
                    }
                    let name = self.parse_identifier_name();
                    expression = self.arena.add_access_expr(
                        SyntaxKind::PropertyAccessExpression,
                        pos,
                        self.node_end(),
                        AccessExprData {
                            expression,
                            argument: name,
                        },
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token();
                    let argument = self.parse_expression();
                    self.expect(SyntaxKind::CloseBracketToken);
                    expression = self.arena.add_access_expr(
                        SyntaxKind::ElementAccessExpression,
                        pos,
                        self.node_end(),
                        AccessExprData { expression, argument },
                    );
                }
                SyntaxKind::OpenParenToken => {
                    let arguments = self.parse_arguments();
                    expression = self.arena.add_call_expr(
                        SyntaxKind::CallExpression,
                        pos,
                        self.node_end(),
                        CallExprData { expression, arguments },
                    );
                }
                SyntaxKind::LessThanToken => {
                    // Possible explicit type arguments on a call. Skip them
                    // speculatively; on anything else this is a comparison.
                    if !self.try_skip_type_arguments() {
                        return expression;
                    }
                    let arguments = self.parse_arguments();
                    expression = self.arena.add_call_expr(
                        SyntaxKind::CallExpression,
                        pos,
                        self.node_end(),
                        CallExprData { expression, arguments },
                    );
                }
                SyntaxKind::NoSubstitutionTemplateLiteral => {
                    // Tagged template, modeled as a call with one argument.
                    let (literal_pos, literal_end) = (self.token_pos(), self.token_end());
                    let data = LiteralData {
                        text: self.token_value().to_string(),
                    };
                    self.next_token();
                    let literal = self.arena.add_literal(
                        SyntaxKind::NoSubstitutionTemplateLiteral,
                        literal_pos,
                        literal_end,
                        data,
                    );
                    expression = self.arena.add_call_expr(
                        SyntaxKind::CallExpression,
                        pos,
                        self.node_end(),
                        CallExprData {
                            expression,
                            arguments: NodeList::new(vec![literal]),
                        },
                    );
                }
                _ => return expression,
            }
        }
    }

    /// Parse a parenthesized argument list. The current token must be `(`.
    fn parse_arguments(&mut self) -> NodeList {
        debug_assert!(self.at(SyntaxKind::OpenParenToken));
        self.next_token();
        let mut arguments = Vec::new();
        while !self.at(SyntaxKind::CloseParenToken) && !self.at(SyntaxKind::EndOfFileToken) {
            let argument = if self.at(SyntaxKind::DotDotDotToken) {
                let pos = self.token_pos();
                self.next_token();
                let expression = self.parse_assignment();
                self.arena.add_wrapped(
                    SyntaxKind::SpreadElement,
                    pos,
                    self.node_end(),
                    WrappedData { expression, operator: 0 },
                )
            } else {
                self.parse_assignment()
            };
            arguments.push(argument);
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParenToken);
        NodeList::new(arguments)
    }

    fn parse_primary(&mut self) -> NodeIndex {
        let kind = self.token();
        match kind {
            SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier => self.parse_identifier_name(),
            kind if is_contextual_identifier(kind) => self.parse_identifier_name(),
            SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword => {
                let (pos, end) = (self.token_pos(), self.token_end());
                self.next_token();
                self.arena.add_token(kind, pos, end)
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => {
                let (pos, end) = (self.token_pos(), self.token_end());
                let data = LiteralData {
                    text: self.token_value().to_string(),
                };
                self.next_token();
                self.arena.add_literal(kind, pos, end, data)
            }
            SyntaxKind::OpenParenToken => {
                let pos = self.token_pos();
                self.next_token();
                let expression = self.parse_expression();
                self.expect(SyntaxKind::CloseParenToken);
                self.arena.add_wrapped(
                    SyntaxKind::ParenthesizedExpression,
                    pos,
                    self.node_end(),
                    WrappedData { expression, operator: 0 },
                )
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::NewKeyword => self.parse_new_expression(),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            _ => {
                self.error_at_current(format!("expression expected, found {:?}", kind));
                match kind {
                    // Do not consume closers; they belong to an enclosing
                    // construct and the caller's loop will handle them.
                    SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::SemicolonToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::EndOfFileToken => self.unknown_here(),
                    _ => {
                        let (pos, end) = (self.token_pos(), self.token_end());
                        self.next_token();
                        let node = self.arena.add_token(SyntaxKind::Unknown, pos, end);
                        self.arena.set_flags(node, NodeFlags::RECOVERED);
                        node
                    }
                }
            }
        }
    }

    pub(crate) fn parse_object_literal(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut elements = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFileToken) {
            elements.push(self.parse_object_literal_element());
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken);
        self.arena.add_literal_expr(
            SyntaxKind::ObjectLiteralExpression,
            pos,
            self.node_end(),
            LiteralExprData {
                elements: NodeList::new(elements),
            },
        )
    }

    fn parse_object_literal_element(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        if self.at(SyntaxKind::DotDotDotToken) {
            self.next_token();
            let expression = self.parse_assignment();
            return self.arena.add_wrapped(
                SyntaxKind::SpreadAssignment,
                pos,
                self.node_end(),
                WrappedData { expression, operator: 0 },
            );
        }

        let name = self.parse_property_name();
        match self.token() {
            SyntaxKind::ColonToken => {
                self.next_token();
                let initializer = self.parse_assignment();
                self.arena.add_property_assignment(
                    SyntaxKind::PropertyAssignment,
                    pos,
                    self.node_end(),
                    PropertyAssignmentData { name, initializer },
                )
            }
            SyntaxKind::OpenParenToken => {
                // Object method shorthand; the body is skipped.
                self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
                if self.at(SyntaxKind::ColonToken) {
                    self.skip_type_annotation(false, true);
                }
                if self.at(SyntaxKind::OpenBraceToken) {
                    self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
                }
                self.arena.add_class_member(
                    SyntaxKind::MethodDeclaration,
                    pos,
                    self.node_end(),
                    ClassMemberData {
                        name,
                        initializer: NodeIndex::NONE,
                    },
                )
            }
            _ => self.arena.add_property_assignment(
                SyntaxKind::ShorthandPropertyAssignment,
                pos,
                self.node_end(),
                PropertyAssignmentData {
                    name,
                    initializer: NodeIndex::NONE,
                },
            ),
        }
    }

    /// Parse a property name: identifier, keyword-as-name, string/numeric
    /// literal, or computed `[expr]`.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => {
                let (pos, end) = (self.token_pos(), self.token_end());
                let kind = self.token();
                let data = LiteralData {
                    text: self.token_value().to_string(),
                };
                self.next_token();
                self.arena.add_literal(kind, pos, end, data)
            }
            SyntaxKind::OpenBracketToken => {
                let pos = self.token_pos();
                self.next_token();
                let expression = self.parse_assignment();
                self.expect(SyntaxKind::CloseBracketToken);
                self.arena.add_wrapped(
                    SyntaxKind::ComputedPropertyName,
                    pos,
                    self.node_end(),
                    WrappedData { expression, operator: 0 },
                )
            }
            _ => self.parse_identifier_name(),
        }
    }

    pub(crate) fn parse_array_literal(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut elements = Vec::new();
        while !self.at(SyntaxKind::CloseBracketToken) && !self.at(SyntaxKind::EndOfFileToken) {
            let element = if self.at(SyntaxKind::DotDotDotToken) {
                let spread_pos = self.token_pos();
                self.next_token();
                let expression = self.parse_assignment();
                self.arena.add_wrapped(
                    SyntaxKind::SpreadElement,
                    spread_pos,
                    self.node_end(),
                    WrappedData { expression, operator: 0 },
                )
            } else {
                self.parse_assignment()
            };
            elements.push(element);
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBracketToken);
        self.arena.add_literal_expr(
            SyntaxKind::ArrayLiteralExpression,
            pos,
            self.node_end(),
            LiteralExprData {
                elements: NodeList::new(elements),
            },
        )
    }

    fn parse_new_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut expression = self.parse_primary();
        while self.at(SyntaxKind::DotToken) {
            self.next_token();
            let name = self.parse_identifier_name();
            expression = self.arena.add_access_expr(
                SyntaxKind::PropertyAccessExpression,
                pos,
                self.node_end(),
                AccessExprData {
                    expression,
                    argument: name,
                },
            );
        }
        let arguments = if self.at(SyntaxKind::OpenParenToken) {
            self.parse_arguments()
        } else {
            NodeList::empty()
        };
        self.arena.add_call_expr(
            SyntaxKind::NewExpression,
            pos,
            self.node_end(),
            CallExprData { expression, arguments },
        )
    }

    fn parse_function_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let name = if self.at(SyntaxKind::Identifier) {
            self.parse_identifier_name()
        } else {
            NodeIndex::NONE
        };
        if self.at(SyntaxKind::OpenParenToken) {
            self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        }
        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(false, true);
        }
        if self.at(SyntaxKind::OpenBraceToken) {
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
        }
        self.arena.add_class_member(
            SyntaxKind::FunctionDeclaration,
            pos,
            self.node_end(),
            ClassMemberData {
                name,
                initializer: NodeIndex::NONE,
            },
        )
    }

    // --- Arrow functions ---

    /// Look ahead from a `(` to decide whether it opens an arrow-function
    /// parameter list. Never consumes input.
    fn is_parenthesized_arrow(&mut self) -> bool {
        let snapshot = self.snapshot();
        self.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken);
        // `(...) =>` or `(...): ReturnType =>`; a bare colon after the close
        // paren cannot start anything else in expression position.
        let is_arrow = self.at(SyntaxKind::EqualsGreaterThanToken) || self.at(SyntaxKind::ColonToken);
        self.rewind(snapshot);
        is_arrow
    }

    fn parse_arrow_function(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        debug_assert!(self.at(SyntaxKind::OpenParenToken));
        self.next_token();
        let mut parameters = Vec::new();
        while !self.at(SyntaxKind::CloseParenToken) && !self.at(SyntaxKind::EndOfFileToken) {
            parameters.push(self.parse_parameter());
            if !self.eat(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParenToken);
        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(true, false);
        }
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_body();
        self.arena.add_arrow_function(
            pos,
            self.node_end(),
            ArrowFunctionData {
                parameters: NodeList::new(parameters),
                body,
            },
        )
    }

    fn parse_simple_arrow_function(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let parameter = self.parse_identifier_name();
        self.expect(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_body();
        self.arena.add_arrow_function(
            pos,
            self.node_end(),
            ArrowFunctionData {
                parameters: NodeList::new(vec![parameter]),
                body,
            },
        )
    }

    /// Arrow body: an expression, or a skipped block (NONE body).
    fn parse_arrow_body(&mut self) -> NodeIndex {
        if self.at(SyntaxKind::OpenBraceToken) {
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
            NodeIndex::NONE
        } else {
            self.parse_assignment()
        }
    }

    fn parse_parameter(&mut self) -> NodeIndex {
        // Destructuring patterns are skipped wholesale.
        if self.at(SyntaxKind::OpenBraceToken) {
            let start = self.snapshot_unknown_start();
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
            return self.finish_skipped_parameter(start);
        }
        if self.at(SyntaxKind::OpenBracketToken) {
            let start = self.snapshot_unknown_start();
            self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
            return self.finish_skipped_parameter(start);
        }
        self.eat(SyntaxKind::DotDotDotToken);
        let name = self.parse_identifier_name();
        self.eat(SyntaxKind::QuestionToken);
        if self.at(SyntaxKind::ColonToken) {
            self.skip_type_annotation(false, false);
        }
        if self.eat(SyntaxKind::EqualsToken) {
            // Default value; parsed for position tracking, not retained.
            self.parse_assignment();
        }
        name
    }

    fn snapshot_unknown_start(&self) -> u32 {
        self.token_pos()
    }

    fn finish_skipped_parameter(&mut self, pos: u32) -> NodeIndex {
        let node = self.arena.add_token(SyntaxKind::Unknown, pos, self.node_end());
        self.arena.set_flags(node, NodeFlags::RECOVERED);
        node
    }

    /// Speculatively skip `<...>` type arguments; commits (returns true)
    /// only when a `(` immediately follows the closing `>`.
    fn try_skip_type_arguments(&mut self) -> bool {
        debug_assert!(self.at(SyntaxKind::LessThanToken));
        let snapshot: ParserSnapshot = self.snapshot();
        let mut depth: i32 = 0;
        loop {
            match self.token() {
                SyntaxKind::LessThanToken => depth += 1,
                SyntaxKind::GreaterThanToken => {
                    depth -= 1;
                    if depth == 0 {
                        self.next_token();
                        if self.at(SyntaxKind::OpenParenToken) {
                            return true;
                        }
                        self.rewind(snapshot);
                        return false;
                    }
                }
                SyntaxKind::EndOfFileToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::OpenBraceToken => {
                    self.rewind(snapshot);
                    return false;
                }
                _ => {}
            }
            self.next_token();
        }
    }
}
