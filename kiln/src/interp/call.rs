//! Call protocol: closures and list indexing share the call syntax

use super::env::Environment;
use super::error::{EvalError, EvalResult};
use super::eval::{Interpreter, STACK_GROW_SIZE, STACK_RED_ZONE};
use super::value::{Closure, Value};
use crate::ast::{Call, Expr};

impl Interpreter {
    /// Resolve a call: built-ins first, then the name as a function or list.
    ///
    /// The environment handed back is always the call-site environment.
    pub(crate) fn eval_call(
        &self,
        call: &Call,
        env: &Environment,
    ) -> EvalResult<(Value, Environment)> {
        if let Some(builtin) = self.builtin(&call.func) {
            tracing::trace!(name = %call.func, "dispatching builtin");
            return builtin(self, call, env);
        }

        let value = match env.get(&call.func) {
            Some(Value::Function(closure)) => {
                self.call_closure(&call.func, closure, &call.args, env)?
            }
            Some(Value::List(items)) => self.index_list(&call.func, items, &call.args, env)?,
            Some(other) => return Err(EvalError::not_callable(&call.func, other)),
            None => return Err(EvalError::unbound(&call.func)),
        };
        Ok((value, env.clone()))
    }

    /// Call a function value.
    ///
    /// The body runs in the call-site environment, overlaid by the captured
    /// environment, overlaid by the argument bindings. A function returned by
    /// the body picks up the environment its evaluation ended in.
    #[tracing::instrument(
        level = "debug",
        skip(self, closure, args, env),
        fields(arity = args.len())
    )]
    fn call_closure(
        &self,
        name: &str,
        closure: &Closure,
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult<Value> {
        if closure.params.len() != args.len() {
            return Err(EvalError::arity_mismatch(name, closure.params.len(), args.len()));
        }

        let values = self.eval_list(args, env)?;
        let bindings: Environment = closure.params.iter().cloned().zip(values).collect();
        let call_env = env.overlay(&closure.env).overlay(&bindings);

        let (result, produced) = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_body(&closure.body, &call_env)
        })?;

        Ok(match result {
            Value::Function(inner) => Value::Function(inner.enclose(&produced)),
            other => other,
        })
    }

    /// Evaluate a function body, handing back the environment its tail
    /// position ended in.
    ///
    /// Blocks thread their `let`s into the last item and conditionals pass
    /// through to the chosen branch, so a function returned from anywhere in
    /// tail position sees the bindings made on the way there.
    fn eval_body(&self, body: &Expr, env: &Environment) -> EvalResult<(Value, Environment)> {
        match body {
            Expr::Block(items) => match items.split_last() {
                Some((last, init)) => {
                    let (_, scope) = self.eval_sequence(init, env)?;
                    self.eval_body(last, &scope)
                }
                None => Ok((Value::Empty, env.clone())),
            },
            Expr::If { cond, then_branch } => {
                if self.eval_condition(cond, env)? {
                    self.eval_body(then_branch, env)
                } else {
                    Ok((Value::Empty, env.clone()))
                }
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
                self.eval_body(branch, env)
            }
            other => self.eval(other, env),
        }
    }

    /// `xs(i)` reads element `i` of the list bound to `xs`
    fn index_list(
        &self,
        name: &str,
        items: &[Value],
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult<Value> {
        let [index_expr] = args else {
            return Err(EvalError::arity_mismatch(name, 1, args.len()));
        };
        let (index, _) = self.eval(index_expr, env)?;
        let Value::Int(index) = index else {
            return Err(EvalError::type_mismatch("list index", "int", &index));
        };
        usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or_else(|| EvalError::index_out_of_bounds(name, index, items.len()))
    }
}
