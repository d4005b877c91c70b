//! Runtime errors for the interpreter

use super::Value;
use thiserror::Error;

/// Runtime error during evaluation
///
/// The first error raised anywhere aborts the whole evaluation and reaches
/// the caller of the entry point unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },

    /// Function call, `len` or list index with the wrong number of arguments
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("type error in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("division by zero in `{op}`")]
    DivisionByZero { op: &'static str },

    #[error("index {index} out of bounds for list {list} of length {len}")]
    IndexOutOfBounds {
        list: String,
        index: i64,
        len: usize,
    },

    #[error("{name} is not a function or list, got {got}")]
    NotCallable { name: String, got: &'static str },

    #[error("condition must be bool, got {got}")]
    NonBooleanCondition { got: &'static str },

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },
}

impl EvalError {
    pub fn unbound(name: &str) -> Self {
        EvalError::UnboundIdentifier {
            name: name.to_string(),
        }
    }

    pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> Self {
        EvalError::ArityMismatch {
            name: name.to_string(),
            expected,
            got,
        }
    }

    pub fn type_mismatch(context: &'static str, expected: &'static str, got: &Value) -> Self {
        EvalError::TypeMismatch {
            context,
            expected,
            got: got.type_name().to_string(),
        }
    }

    /// Type error for a two-operand operator, reporting both operand kinds
    pub fn operand_mismatch(
        context: &'static str,
        expected: &'static str,
        left: &Value,
        right: &Value,
    ) -> Self {
        EvalError::TypeMismatch {
            context,
            expected,
            got: format!("{} and {}", left.type_name(), right.type_name()),
        }
    }

    pub fn division_by_zero(op: &'static str) -> Self {
        EvalError::DivisionByZero { op }
    }

    pub fn index_out_of_bounds(list: &str, index: i64, len: usize) -> Self {
        EvalError::IndexOutOfBounds {
            list: list.to_string(),
            index,
            len,
        }
    }

    pub fn not_callable(name: &str, got: &Value) -> Self {
        EvalError::NotCallable {
            name: name.to_string(),
            got: got.type_name(),
        }
    }

    pub fn non_boolean_condition(got: &Value) -> Self {
        EvalError::NonBooleanCondition {
            got: got.type_name(),
        }
    }

    pub fn overflow(op: &'static str) -> Self {
        EvalError::IntegerOverflow { op }
    }
}

/// Result type for interpreter operations
pub type EvalResult<T> = Result<T, EvalError>;
