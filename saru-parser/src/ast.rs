//! The syntax tree emitted by the parser.
//!
//! Nodes split into [`Expr`] (value producing) and [`Stmt`] (program
//! elements), rooted at a [`Program`]. The tree is immutable once built;
//! the `Display` impls render the canonical, fully parenthesized form
//! used by the tests and by diagnostics.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An identifier (e.g. `foo`).
    Identifier(String),
    NumberLit(i64),
    BoolLit(bool),
    StringLit(String),
    /// An array literal (e.g. `[1, 2 * 2, "three"]`).
    ArrayLit(Vec<Expr>),
    /// A hash literal (e.g. `{"one": 1}`). Pairs keep their source order;
    /// keys are arbitrary expressions at this stage.
    HashLit(Vec<(Expr, Expr)>),
    Unary {
        op: String,
        arg: Box<Expr>,
    },
    /// A binary expression (e.g. `1 + 1`).
    Binary {
        lhs: Box<Expr>,
        op: String,
        rhs: Box<Expr>,
    },
    /// `if (cond) { … } else { … }`, an expression rather than a
    /// statement. The alternative is absent iff no `else` clause was
    /// written.
    If {
        condition: Box<Expr>,
        consequence: Vec<Stmt>,
        alternative: Option<Vec<Stmt>>,
    },
    /// An anonymous function (e.g. `fn(x, y) { x + y; }`).
    FnLit {
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    /// A call (e.g. `foo(1, bar, baz())`). The callee is an arbitrary
    /// expression, so `fn(x) { x }(1)` calls a function literal.
    FnCall {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// An index access (e.g. `items[i + 1]`).
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let <ident> = <value>;`
    Let { ident: String, value: Expr },
    /// `return <value>;`
    Return(Expr),
    /// A bare expression whose value is discarded.
    ExprStmt(Expr),
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Expr {
    /// The literal of the token this expression started with.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(name) => name.clone(),
            Expr::NumberLit(value) => value.to_string(),
            Expr::BoolLit(value) => value.to_string(),
            Expr::StringLit(value) => value.clone(),
            Expr::ArrayLit(_) => "[".to_string(),
            Expr::HashLit(_) => "{".to_string(),
            Expr::Unary { op, .. } => op.clone(),
            Expr::Binary { op, .. } => op.clone(),
            Expr::If { .. } => "if".to_string(),
            Expr::FnLit { .. } => "fn".to_string(),
            Expr::FnCall { .. } => "(".to_string(),
            Expr::Index { .. } => "[".to_string(),
        }
    }
}

impl Stmt {
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let { .. } => "let".to_string(),
            Stmt::Return(_) => "return".to_string(),
            Stmt::ExprStmt(expression) => expression.token_literal(),
        }
    }
}

impl Program {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => String::new(),
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    for statement in statements {
        write!(f, "{}", statement)?;
    }
    Ok(())
}

fn join(items: &[impl fmt::Display]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => f.write_str(name),
            Expr::NumberLit(value) => write!(f, "{}", value),
            Expr::BoolLit(value) => write!(f, "{}", value),
            Expr::StringLit(value) => f.write_str(value),
            Expr::ArrayLit(elements) => write!(f, "[{}]", join(elements)),
            Expr::HashLit(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{}:{}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", pairs)
            }
            Expr::Unary { op, arg } => write!(f, "({}{})", op, arg),
            Expr::Binary { lhs, op, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} ", condition)?;
                write_block(f, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else ")?;
                    write_block(f, alternative)?;
                }
                Ok(())
            }
            Expr::FnLit { params, body } => {
                write!(f, "fn({}) ", params.join(", "))?;
                write_block(f, body)
            }
            Expr::FnCall { callee, args } => write!(f, "{}({})", callee, join(args)),
            Expr::Index { target, index } => write!(f, "({}[{}])", target, index),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { ident, value } => write!(f, "let {} = {};", ident, value),
            Stmt::Return(value) => write!(f, "return {};", value),
            Stmt::ExprStmt(expression) => write!(f, "{}", expression),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_hand_built_let() {
        let program = Program {
            statements: vec![Stmt::Let {
                ident: "myVar".to_string(),
                value: Expr::Identifier("anotherVar".to_string()),
            }],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_stringify_nested_expressions() {
        let expression = Expr::Binary {
            lhs: Box::new(Expr::Unary {
                op: "-".to_string(),
                arg: Box::new(Expr::Identifier("a".to_string())),
            }),
            op: "*".to_string(),
            rhs: Box::new(Expr::NumberLit(2)),
        };

        assert_eq!(expression.to_string(), "((-a) * 2)");
        assert_eq!(expression.token_literal(), "*");
    }

    #[test]
    fn test_stringify_containers() {
        let array = Expr::ArrayLit(vec![
            Expr::NumberLit(1),
            Expr::StringLit("two".to_string()),
        ]);
        assert_eq!(array.to_string(), "[1, two]");

        let hash = Expr::HashLit(vec![
            (Expr::StringLit("one".to_string()), Expr::NumberLit(1)),
            (Expr::StringLit("two".to_string()), Expr::NumberLit(2)),
        ]);
        assert_eq!(hash.to_string(), "{one:1, two:2}");
    }

    #[test]
    fn test_empty_program_token_literal() {
        let program = Program { statements: vec![] };
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
