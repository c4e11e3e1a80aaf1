//! Visitor pattern for AST nodes.
//!
//! The tree is immutable once parsed, so visitors borrow it shared.
//! Override the `visit_*` methods you care about and call the matching
//! `walk_*` function to descend into children.

use crate::ast::{Expr, Program, Stmt};

pub trait Visitor: Sized {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program(visitor: &mut impl Visitor, program: &Program) {
    for statement in &program.statements {
        visitor.visit_stmt(statement);
    }
}

pub fn walk_stmt(visitor: &mut impl Visitor, stmt: &Stmt) {
    match stmt {
        Stmt::Let { ident: _, value } => visitor.visit_expr(value),
        Stmt::Return(value) => visitor.visit_expr(value),
        Stmt::ExprStmt(expression) => visitor.visit_expr(expression),
    }
}

pub fn walk_expr(visitor: &mut impl Visitor, expr: &Expr) {
    match expr {
        Expr::Identifier(_) => {}
        Expr::NumberLit(_) => {}
        Expr::BoolLit(_) => {}
        Expr::StringLit(_) => {}
        Expr::ArrayLit(elements) => {
            for element in elements {
                visitor.visit_expr(element);
            }
        }
        Expr::HashLit(pairs) => {
            for (key, value) in pairs {
                visitor.visit_expr(key);
                visitor.visit_expr(value);
            }
        }
        Expr::Unary { op: _, arg } => visitor.visit_expr(arg),
        Expr::Binary { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::If {
            condition,
            consequence,
            alternative,
        } => {
            visitor.visit_expr(condition);
            for statement in consequence {
                visitor.visit_stmt(statement);
            }
            if let Some(alternative) = alternative {
                for statement in alternative {
                    visitor.visit_stmt(statement);
                }
            }
        }
        Expr::FnLit { params: _, body } => {
            for statement in body {
                visitor.visit_stmt(statement);
            }
        }
        Expr::FnCall { callee, args } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Index { target, index } => {
            visitor.visit_expr(target);
            visitor.visit_expr(index);
        }
    }
}
