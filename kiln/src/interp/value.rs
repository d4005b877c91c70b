//! Runtime values for the interpreter

use super::env::Environment;
use crate::ast::Expr;
use std::fmt;
use std::rc::Rc;

/// Runtime value
///
/// Values are never mutated after construction; every operation builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// Single Unicode scalar
    Char(char),
    /// Boolean
    Bool(bool),
    /// String (lengths count chars, not bytes)
    Str(String),
    /// Heterogeneous list
    List(Vec<Value>),
    /// First-class function
    Function(Closure),
    /// No value: result of a let binding or a false one-armed `if`
    Empty,
}

/// Function value: captured scope, parameter names and unevaluated body
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    pub env: Environment,
    pub params: Vec<String>,
    pub body: Rc<Expr>,
}

impl Closure {
    /// A freshly evaluated function literal captures nothing
    pub fn new(params: Vec<String>, body: Rc<Expr>) -> Self {
        Closure {
            env: Environment::new(),
            params,
            body,
        }
    }

    /// Fold `scope` into the captured environment; bindings already captured win.
    pub fn enclose(&self, scope: &Environment) -> Self {
        Closure {
            env: scope.overlay(&self.env),
            params: self.params.clone(),
            body: Rc::clone(&self.body),
        }
    }
}

impl Value {
    /// Get type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Char(_) => "char",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Function(_) => "function",
            Value::Empty => "empty",
        }
    }

    /// Try to convert to bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Build a string value from anything string-like
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Split a string into a list of one-character strings
    pub fn explode(s: &str) -> Vec<Value> {
        s.chars().map(|c| Value::Str(c.to_string())).collect()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Function(closure) => write!(f, "<fn({})>", closure.params.join(", ")),
            Value::Empty => write!(f, "()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Int(-42)), "-42");
        assert_eq!(format!("{}", Value::Char('a')), "'a'");
        assert_eq!(format!("{}", Value::Bool(true)), "true");
        assert_eq!(format!("{}", Value::string("hi")), "\"hi\"");
        assert_eq!(format!("{}", Value::Empty), "()");
    }

    #[test]
    fn test_list_display() {
        let list = Value::List(vec![
            Value::Int(1),
            Value::Char('x'),
            Value::List(vec![]),
        ]);
        insta::assert_snapshot!(list.to_string(), @"[1, 'x', []]");
    }

    #[test]
    fn test_function_display() {
        let f = Value::Function(Closure::new(
            vec!["a".to_string(), "b".to_string()],
            Rc::new(Expr::Var("a".to_string())),
        ));
        insta::assert_snapshot!(f.to_string(), @"<fn(a, b)>");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(0).type_name(), "int");
        assert_eq!(Value::Char('c').type_name(), "char");
        assert_eq!(Value::string("").type_name(), "string");
        assert_eq!(Value::List(vec![]).type_name(), "list");
        assert_eq!(Value::Empty.type_name(), "empty");
    }

    #[test]
    fn test_as_conversions() {
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Int(1).as_bool(), None);
    }

    #[test]
    fn test_explode_counts_chars() {
        let parts = Value::explode("hé!");
        assert_eq!(
            parts,
            vec![Value::string("h"), Value::string("é"), Value::string("!")]
        );
    }

    #[test]
    fn test_new_closure_captures_nothing() {
        let closure = Closure::new(vec![], Rc::new(Expr::IntLit(1)));
        assert_eq!(closure.env, Environment::new());
    }

    #[test]
    fn test_enclose_keeps_captured_bindings() {
        let closure = Closure::new(vec![], Rc::new(Expr::Var("x".to_string())));
        let captured = closure.enclose(&Environment::new().bind("x", Value::Int(1)));
        let scope = Environment::new()
            .bind("x", Value::Int(2))
            .bind("y", Value::Int(3));
        let merged = captured.enclose(&scope);
        assert_eq!(merged.env.get("x"), Some(&Value::Int(1)));
        assert_eq!(merged.env.get("y"), Some(&Value::Int(3)));
    }
}
