//! Expression AST nodes

use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal
    IntLit(i64),
    /// Character literal
    CharLit(char),
    /// String literal
    StringLit(String),
    /// Boolean literal
    BoolLit(bool),

    /// List literal: [a, b, c]
    List(Vec<Expr>),

    /// Function literal: fn(params) body
    Lambda {
        params: Vec<String>,
        body: Rc<Expr>,
    },

    /// Function call or list index: name(args)
    Call(Call),

    /// One-armed conditional: if cond then_branch
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
    },

    /// Conditional: if cond then_branch else else_branch
    IfElse {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// Let binding: let name = value
    ///
    /// Only visible to later expressions of the enclosing block.
    Let {
        name: String,
        value: Box<Expr>,
    },

    /// Variable reference
    Var(String),

    /// Unary operation
    Unary {
        op: UnOp,
        expr: Box<Expr>,
    },

    /// Binary operation
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },

    /// Block: { expr1; expr2; ...; result }
    Block(Vec<Expr>),

    /// Concatenation: left ++ right
    Concat {
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// A call site: the callee is always named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub func: String,
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Call {
            func: func.into(),
            args,
        }
    }
}

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Logical
    Or,
    And,

    // Comparison
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl BinOp {
    /// Surface symbol, also used as the error context
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Or => "or",
            BinOp::And => "and",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    /// Negation (-)
    Neg,
    /// Identity on integers (+)
    Pos,
    /// Logical not
    Not,
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "unary -",
            UnOp::Pos => "unary +",
            UnOp::Not => "not",
        }
    }
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
