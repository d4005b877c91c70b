//! Kiln Evaluator Library
//!
//! Tree-walking evaluator for a small dynamically-typed expression language.
//! Parsing lives elsewhere: the evaluator consumes a finished [`ast::Expr`].

pub mod ast;
pub mod interp;

pub use interp::{evaluate, Environment, EvalError, EvalResult, Interpreter, Value};
