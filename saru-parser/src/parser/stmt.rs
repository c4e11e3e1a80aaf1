use crate::ast::Stmt;

use super::*;

impl<'a> Parser<'a> {
    /// Parses the statement starting at the current token. `None` means
    /// the statement was malformed; the error has already been recorded
    /// and the caller drops it.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }

        let ident = self.current_token.literal.clone();

        if !self.expect_peek(TokenKind::Equals) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(TokenKind::Semi) {
            self.next_token();
        }

        Some(Stmt::Let {
            ident,
            value: value?,
        })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(TokenKind::Semi) {
            self.next_token();
        }

        Some(Stmt::Return(value?))
    }

    /// A bare expression in statement position. The trailing semicolon is
    /// optional, which is what lets a REPL echo `1 + 1` back.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(TokenKind::Semi) {
            self.next_token();
        }

        Some(Stmt::ExprStmt(expression?))
    }

    /// Collects statements until `}` (or the end of the input), with `{`
    /// as the current token on entry.
    pub(crate) fn parse_block_statement(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_token_is(TokenKind::CloseBrace) && !self.current_token_is(TokenKind::Eof)
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn program(source: &str) -> Program {
        let source = source.into();
        let mut parser = Parser::new(&source);
        let program = parser.parse_program();
        assert!(
            source.has_no_errors(),
            "parser errors: {:?}",
            parser.errors()
        );
        program
    }

    #[test]
    fn test_let_statements() {
        let program = program("let x = 5; let y = 10; let foobar = 838383;");
        assert_eq!(program.statements.len(), 3);

        let tests = &[("x", 5), ("y", 10), ("foobar", 838383)];
        for (statement, (name, value)) in program.statements.iter().zip(tests) {
            assert_eq!(statement.token_literal(), "let");
            match statement {
                Stmt::Let { ident, value: expr } => {
                    assert_eq!(ident, name);
                    assert_eq!(*expr, Expr::NumberLit(*value));
                }
                other => panic!("expected a let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_statements_with_various_values() {
        let tests = &[
            ("let x = 5;", "let x = 5;"),
            ("let y = true;", "let y = true;"),
            ("let foobar = y;", "let foobar = y;"),
            // the semicolon is optional but normalized back in
            ("let z = 1 + 2", "let z = (1 + 2);"),
        ];

        for (source, expected) in tests {
            assert_eq!(program(source).to_string(), *expected);
        }
    }

    #[test]
    fn test_return_statements() {
        let program = program("return 5; return 10; return 993322;");
        assert_eq!(program.statements.len(), 3);

        for (statement, value) in program.statements.iter().zip(&[5, 10, 993322]) {
            assert_eq!(statement.token_literal(), "return");
            match statement {
                Stmt::Return(expr) => assert_eq!(*expr, Expr::NumberLit(*value)),
                other => panic!("expected a return statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_expression_statement_without_semicolon() {
        let program = program("foobar");
        assert_eq!(program.statements.len(), 1);
        assert_eq!(
            program.statements[0],
            Stmt::ExprStmt(Expr::Identifier("foobar".to_string()))
        );
    }

    #[test]
    fn test_block_statements_nest() {
        let program = program("if (a) { if (b) { c } d }");
        assert_eq!(program.to_string(), "ifa ifb cd");
    }

    #[test]
    fn test_statement_count_matches_successful_parses() {
        // the middle statement is broken and gets dropped
        let source = "let a = 1; let b 2; let c = 3;".into();
        let mut parser = Parser::new(&source);
        let program = parser.parse_program();

        assert_eq!(parser.errors().len(), 1);
        assert_eq!(program.statements.len(), 3);
        assert_eq!(program.to_string(), "let a = 1;2let c = 3;");
    }
}
