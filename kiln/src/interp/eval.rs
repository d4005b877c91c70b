//! Expression evaluator

use super::builtins::{builtin_len, BuiltinFn};
use super::env::Environment;
use super::error::{EvalError, EvalResult};
use super::value::{Closure, Value};
use crate::ast::Expr;
use std::collections::HashMap;
use std::rc::Rc;

/// Stack growth parameters for deep recursion
pub(crate) const STACK_RED_ZONE: usize = 128 * 1024; // 128KB remaining triggers growth
pub(crate) const STACK_GROW_SIZE: usize = 4 * 1024 * 1024; // Grow by 4MB each time

/// Evaluate a finished tree against an empty environment
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    Interpreter::new().run(expr)
}

/// The interpreter
///
/// Holds nothing but the built-in table; all evaluation state travels in the
/// environments passed through `eval`.
pub struct Interpreter {
    /// Builtin functions, consulted before any binding
    builtins: HashMap<String, BuiltinFn>,
}

impl Interpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        let mut interp = Interpreter {
            builtins: HashMap::new(),
        };
        interp.register_builtins();
        interp
    }

    /// Register built-in functions
    fn register_builtins(&mut self) {
        self.builtins.insert("len".to_string(), builtin_len);
    }

    /// Add or replace a built-in. Built-ins shadow every binding of the same name.
    pub fn register_builtin(&mut self, name: impl Into<String>, builtin: BuiltinFn) {
        self.builtins.insert(name.into(), builtin);
    }

    pub fn builtin(&self, name: &str) -> Option<BuiltinFn> {
        self.builtins.get(name).copied()
    }

    /// Evaluate the root expression against an empty environment.
    /// Only the value survives; environment changes are dropped.
    pub fn run(&self, expr: &Expr) -> EvalResult<Value> {
        let result = self.eval(expr, &Environment::new()).map(|(value, _)| value);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "evaluation failed");
        }
        result
    }

    /// Evaluate an expression with automatic stack growth for deep recursion
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<(Value, Environment)> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.eval_inner(expr, env))
    }

    /// Inner eval implementation
    fn eval_inner(&self, expr: &Expr, env: &Environment) -> EvalResult<(Value, Environment)> {
        match expr {
            Expr::IntLit(n) => Ok((Value::Int(*n), env.clone())),
            Expr::CharLit(c) => Ok((Value::Char(*c), env.clone())),
            Expr::StringLit(s) => Ok((Value::Str(s.clone()), env.clone())),
            Expr::BoolLit(b) => Ok((Value::Bool(*b), env.clone())),

            Expr::List(items) => Ok((Value::List(self.eval_list(items, env)?), env.clone())),

            // Captures nothing here; the scope is assembled when called
            Expr::Lambda { params, body } => Ok((
                Value::Function(Closure::new(params.clone(), Rc::clone(body))),
                env.clone(),
            )),

            Expr::Call(call) => self.eval_call(call, env),

            Expr::If { cond, then_branch } => {
                let value = if self.eval_condition(cond, env)? {
                    self.eval(then_branch, env)?.0
                } else {
                    Value::Empty
                };
                Ok((value, env.clone()))
            }

            Expr::IfElse {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_condition(cond, env)? {
                    then_branch
                } else {
                    else_branch
                };
                let (value, _) = self.eval(branch, env)?;
                Ok((value, env.clone()))
            }

            Expr::Let { name, value } => {
                let (val, _) = self.eval(value, env)?;
                Ok((Value::Empty, env.bind(name.clone(), val)))
            }

            Expr::Var(name) => env
                .get(name)
                .map(|value| (value.clone(), env.clone()))
                .ok_or_else(|| EvalError::unbound(name)),

            Expr::Unary { op, expr: inner } => Ok((self.eval_unary(*op, inner, env)?, env.clone())),

            Expr::Binary { left, op, right } => {
                Ok((self.eval_binary(*op, left, right, env)?, env.clone()))
            }

            // Bindings made inside the block stay inside it
            Expr::Block(items) => {
                let (value, _) = self.eval_sequence(items, env)?;
                Ok((value, env.clone()))
            }

            Expr::Concat { left, right } => Ok((self.eval_concat(left, right, env)?, env.clone())),
        }
    }

    /// Evaluate expressions left to right against the same environment
    pub(crate) fn eval_list(&self, items: &[Expr], env: &Environment) -> EvalResult<Vec<Value>> {
        items
            .iter()
            .map(|item| self.eval(item, env).map(|(value, _)| value))
            .collect()
    }

    /// Evaluate expressions in order, threading the environment from each
    /// into the next. Returns the last value and the final environment.
    pub(crate) fn eval_sequence(
        &self,
        items: &[Expr],
        env: &Environment,
    ) -> EvalResult<(Value, Environment)> {
        items
            .iter()
            .try_fold((Value::Empty, env.clone()), |(_, scope), item| self.eval(item, &scope))
    }

    pub(crate) fn eval_condition(&self, cond: &Expr, env: &Environment) -> EvalResult<bool> {
        let (value, _) = self.eval(cond, env)?;
        value
            .as_bool()
            .ok_or_else(|| EvalError::non_boolean_condition(&value))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
