//! Built-in functions
//!
//! Built-ins intercept call syntax before the callee name is looked up, so
//! they receive the unevaluated call and decide themselves how to evaluate
//! their arguments.

use super::env::Environment;
use super::error::{EvalError, EvalResult};
use super::eval::Interpreter;
use super::value::Value;
use crate::ast::Call;

/// Builtin function type
pub type BuiltinFn = fn(&Interpreter, &Call, &Environment) -> EvalResult<(Value, Environment)>;

/// len(xs) -> int
/// Element count of a list, char count of a string.
pub(crate) fn builtin_len(
    interp: &Interpreter,
    call: &Call,
    env: &Environment,
) -> EvalResult<(Value, Environment)> {
    let [arg] = call.args.as_slice() else {
        return Err(EvalError::arity_mismatch(&call.func, 1, call.args.len()));
    };
    let (value, _) = interp.eval(arg, env)?;
    let len = match &value {
        Value::List(items) => items.len(),
        Value::Str(s) => s.chars().count(),
        other => return Err(EvalError::type_mismatch("len", "list or string", other)),
    };
    let len = i64::try_from(len).map_err(|_| EvalError::overflow("len"))?;
    Ok((Value::Int(len), env.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn len_of(args: Vec<Expr>) -> EvalResult<Value> {
        let interp = Interpreter::new();
        let call = Call::new("len", args);
        builtin_len(&interp, &call, &Environment::new()).map(|(v, _)| v)
    }

    #[test]
    fn test_len_string_counts_chars() {
        assert_eq!(len_of(vec![Expr::StringLit("abc".to_string())]), Ok(Value::Int(3)));
        assert_eq!(len_of(vec![Expr::StringLit("né".to_string())]), Ok(Value::Int(2)));
    }

    #[test]
    fn test_len_list() {
        assert_eq!(len_of(vec![Expr::List(vec![])]), Ok(Value::Int(0)));
        assert_eq!(
            len_of(vec![Expr::List(vec![Expr::IntLit(1), Expr::BoolLit(true)])]),
            Ok(Value::Int(2))
        );
    }

    #[test]
    fn test_len_arity() {
        let err = len_of(vec![Expr::List(vec![]), Expr::List(vec![])]).unwrap_err();
        assert_eq!(err, EvalError::arity_mismatch("len", 1, 2));
        let err = len_of(vec![]).unwrap_err();
        assert_eq!(err, EvalError::arity_mismatch("len", 1, 0));
    }

    #[test]
    fn test_len_wrong_type() {
        let err = len_of(vec![Expr::IntLit(5)]).unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { context: "len", .. }));
    }

    #[test]
    fn test_len_propagates_argument_error() {
        let err = len_of(vec![Expr::Var("missing".to_string())]).unwrap_err();
        assert_eq!(err, EvalError::unbound("missing"));
    }

    #[test]
    fn test_len_returns_env_unchanged() {
        let interp = Interpreter::new();
        let env = Environment::new().bind("s", Value::string("xy"));
        let call = Call::new("len", vec![Expr::Var("s".to_string())]);
        let (value, out) = builtin_len(&interp, &call, &env).unwrap();
        assert_eq!(value, Value::Int(2));
        assert_eq!(out, env);
    }
}
