//! Tree-walking interpreter
//!
//! `eval` takes an expression and an environment and hands back a value plus
//! an environment. Only a block threads that environment onward; everywhere
//! else it is dropped, which keeps `let` bindings scoped to their block.

mod builtins;
mod call;
mod env;
mod error;
mod eval;
mod ops;
mod value;

pub use builtins::BuiltinFn;
pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use eval::{evaluate, Interpreter};
pub use ops::{apply_binary, apply_unary, concat, floor_div, floor_mod};
pub use value::{Closure, Value};
