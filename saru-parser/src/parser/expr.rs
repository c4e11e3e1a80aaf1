use crate::ast::Expr;

use super::*;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Pratt loop: parse a prefix, then fold in infix operators while the
    /// next one binds tighter than `precedence`. The strict `<` makes
    /// equal levels left-associative.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semi) && precedence < self.peek_precedence() {
            left = match self.peek_token.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
                | TokenKind::EqualsEquals
                | TokenKind::NotEquals
                | TokenKind::LessThan
                | TokenKind::GreaterThan => {
                    self.next_token();
                    self.parse_binary_expression(left)?
                }
                TokenKind::OpenParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                TokenKind::OpenBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                // not an infix operator after all, stop folding
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Dispatches on the token that can start an expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current_token.kind {
            TokenKind::Identifier => Some(Expr::Identifier(self.current_token.literal.clone())),
            TokenKind::Number => self.parse_number_literal(),
            TokenKind::String => Some(Expr::StringLit(self.current_token.literal.clone())),
            TokenKind::True | TokenKind::False => {
                Some(Expr::BoolLit(self.current_token_is(TokenKind::True)))
            }
            TokenKind::LogicalNot | TokenKind::Minus => self.parse_unary_expression(),
            TokenKind::OpenParen => self.parse_grouped_expression(),
            TokenKind::OpenBracket => self.parse_array_literal(),
            TokenKind::OpenBrace => self.parse_hash_literal(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Fn => self.parse_function_literal(),
            kind => {
                self.no_prefix_parse_fn_error(kind);
                None
            }
        }
    }

    /* Expressions.Literals */
    fn parse_number_literal(&mut self) -> Option<Expr> {
        match self.current_token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::NumberLit(value)),
            Err(_) => {
                self.error(format!(
                    "could not parse {} as integer",
                    self.current_token.literal
                ));
                None
            }
        }
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::CloseBracket)?;
        Some(Expr::ArrayLit(elements))
    }

    /// Parses `{ key: value, … }` with `{` as the current token. Keys are
    /// arbitrary expressions; pairs keep their source order.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenKind::CloseBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_token_is(TokenKind::CloseBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::CloseBrace) {
            return None;
        }

        Some(Expr::HashLit(pairs))
    }

    /* Expressions.Operators */
    fn parse_unary_expression(&mut self) -> Option<Expr> {
        let op = self.current_token.literal.clone();
        self.next_token();
        let arg = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Unary {
            op,
            arg: Box::new(arg),
        })
    }

    /// Called with the operator as the current token and the left operand
    /// already parsed.
    fn parse_binary_expression(&mut self, lhs: Expr) -> Option<Expr> {
        let op = self.current_token.literal.clone();
        let precedence = self.current_precedence();
        self.next_token();
        let rhs = self.parse_expression(precedence)?;

        Some(Expr::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }

        // no wrapper node, grouping only steers the Pratt loop
        Some(expression)
    }

    /* Expressions.Conditionals */
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::OpenParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::OpenBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::OpenBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /* Expressions.Functions */
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::OpenParen) {
            return None;
        }

        let params = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::OpenBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::FnLit { params, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();

        if self.peek_token_is(TokenKind::CloseParen) {
            self.next_token();
            return Some(params);
        }

        self.next_token();
        params.push(self.current_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            params.push(self.current_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }

        Some(params)
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::CloseParen)?;

        Some(Expr::FnCall {
            callee: Box::new(callee),
            args,
        })
    }

    fn parse_index_expression(&mut self, target: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::CloseBracket) {
            return None;
        }

        Some(Expr::Index {
            target: Box::new(target),
            index: Box::new(index),
        })
    }

    /// Parses a comma separated expression list terminated by `end`,
    /// shared by call arguments and array literals.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
