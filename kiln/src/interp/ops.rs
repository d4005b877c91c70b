//! Operator evaluation
//!
//! Both operands are always evaluated, left then right, before any type
//! check runs, so an operand error wins over the operator's own error.

use super::env::Environment;
use super::error::{EvalError, EvalResult};
use super::eval::Interpreter;
use super::value::Value;
use crate::ast::{BinOp, Expr, UnOp};
use std::cmp::Ordering;

impl Interpreter {
    pub(crate) fn eval_unary(
        &self,
        op: UnOp,
        operand: &Expr,
        env: &Environment,
    ) -> EvalResult<Value> {
        let (val, _) = self.eval(operand, env)?;
        apply_unary(op, val)
    }

    pub(crate) fn eval_binary(
        &self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> EvalResult<Value> {
        let (lval, _) = self.eval(left, env)?;
        let (rval, _) = self.eval(right, env)?;
        apply_binary(op, lval, rval)
    }

    pub(crate) fn eval_concat(
        &self,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> EvalResult<Value> {
        let (lval, _) = self.eval(left, env)?;
        let (rval, _) = self.eval(right, env)?;
        concat(lval, rval)
    }
}

/// Apply a unary operator to an evaluated operand
pub fn apply_unary(op: UnOp, val: Value) -> EvalResult<Value> {
    match (op, val) {
        (UnOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| EvalError::overflow(op.symbol())),
        (UnOp::Pos, Value::Int(n)) => Ok(Value::Int(n)),
        (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnOp::Neg, other) => Err(EvalError::type_mismatch("unary -", "int", &other)),
        (UnOp::Pos, other) => Err(EvalError::type_mismatch("unary +", "int", &other)),
        (UnOp::Not, other) => Err(EvalError::type_mismatch("not", "bool", &other)),
    }
}

/// Apply a binary operator to evaluated operands
pub fn apply_binary(op: BinOp, left: Value, right: Value) -> EvalResult<Value> {
    match op {
        BinOp::Add => checked(op, &left, &right, i64::checked_add),
        BinOp::Sub => checked(op, &left, &right, i64::checked_sub),
        BinOp::Mul => checked(op, &left, &right, i64::checked_mul),
        BinOp::Div => {
            let (a, b) = int_operands(op, &left, &right)?;
            if b == 0 {
                return Err(EvalError::division_by_zero(op.symbol()));
            }
            floor_div(a, b)
                .map(Value::Int)
                .ok_or_else(|| EvalError::overflow(op.symbol()))
        }
        BinOp::Mod => {
            let (a, b) = int_operands(op, &left, &right)?;
            if b == 0 {
                return Err(EvalError::division_by_zero(op.symbol()));
            }
            Ok(Value::Int(floor_mod(a, b)))
        }
        BinOp::Or => logical(op, &left, &right, |a, b| a || b),
        BinOp::And => logical(op, &left, &right, |a, b| a && b),
        BinOp::Gt => compare_values(op, &left, &right, Ordering::is_gt),
        BinOp::Ge => compare_values(op, &left, &right, Ordering::is_ge),
        BinOp::Lt => compare_values(op, &left, &right, Ordering::is_lt),
        BinOp::Le => compare_values(op, &left, &right, Ordering::is_le),
        BinOp::Eq => compare_values(op, &left, &right, Ordering::is_eq),
        BinOp::Ne => compare_values(op, &left, &right, Ordering::is_ne),
    }
}

fn int_operands(op: BinOp, left: &Value, right: &Value) -> EvalResult<(i64, i64)> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok((*a, *b)),
        _ => Err(EvalError::operand_mismatch(op.symbol(), "two ints", left, right)),
    }
}

fn checked<F>(op: BinOp, left: &Value, right: &Value, f: F) -> EvalResult<Value>
where
    F: Fn(i64, i64) -> Option<i64>,
{
    let (a, b) = int_operands(op, left, right)?;
    f(a, b)
        .map(Value::Int)
        .ok_or_else(|| EvalError::overflow(op.symbol()))
}

fn logical<F>(op: BinOp, left: &Value, right: &Value, f: F) -> EvalResult<Value>
where
    F: Fn(bool, bool) -> bool,
{
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(f(*a, *b))),
        _ => Err(EvalError::operand_mismatch(op.symbol(), "two bools", left, right)),
    }
}

/// Quotient rounded toward negative infinity. `b` must be non-zero.
pub fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Remainder carrying the sign of the divisor. `b` must be non-zero.
pub fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

/// Compare two ints or two chars (by code point)
fn compare_values<F>(op: BinOp, left: &Value, right: &Value, f: F) -> EvalResult<Value>
where
    F: Fn(Ordering) -> bool,
{
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(f(a.cmp(b)))),
        (Value::Char(a), Value::Char(b)) => Ok(Value::Bool(f(a.cmp(b)))),
        // Equality over strings, lists and bools is deliberately unsupported
        _ => Err(EvalError::operand_mismatch(
            op.symbol(),
            "two ints or two chars",
            left,
            right,
        )),
    }
}

/// Concatenate lists or strings; a string meeting a list is split into
/// one-character strings first and the result is a list.
pub fn concat(left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::List(mut items), Value::List(rest)) => {
            items.extend(rest);
            Ok(Value::List(items))
        }
        (Value::Str(mut s), Value::Str(rest)) => {
            s.push_str(&rest);
            Ok(Value::Str(s))
        }
        (Value::Str(s), Value::List(rest)) => {
            let mut items = Value::explode(&s);
            items.extend(rest);
            Ok(Value::List(items))
        }
        (Value::List(mut items), Value::Str(s)) => {
            items.extend(Value::explode(&s));
            Ok(Value::List(items))
        }
        (left, right) => Err(EvalError::operand_mismatch(
            "++",
            "lists or strings",
            &left,
            &right,
        )),
    }
}
