use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{
            core::Value,
            function::{FunctionValue, NativeFunction},
        },
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// Arguments are evaluated left to right before the callee expression.
    /// Native functions receive the caller's environment; user-defined
    /// functions run in a child of the environment they were declared in.
    ///
    /// # Errors
    /// - `InvalidCallee` if the callee is not a function.
    /// - `Native` if a host callback reports a failure.
    /// - Any error raised while evaluating arguments or the body.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            env: &Environment)
                            -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| self.eval(arg, env))
                            .collect::<EvalResult<Vec<_>>>()?;

        match self.eval(callee, env)? {
            Value::NativeFunction(native) => Self::call_native(&native, &args, line, env),
            Value::Function(function) => self.call_function(&function, args, line),
            other => Err(RuntimeError::InvalidCallee { found: format!("{} ({other})",
                                                                      other.type_name()),
                                                       line }),
        }
    }

    /// Invokes a host callback with the calling environment.
    fn call_native(native: &NativeFunction,
                   args: &[Value],
                   line: usize,
                   env: &Environment)
                   -> EvalResult<Value> {
        debug!(name = %native.name, args = args.len(), "calling native function");
        native.call(args, env)
              .map_err(|message| RuntimeError::Native { name: native.name.to_string(),
                                                        message,
                                                        line })
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound positionally in a fresh child of the function's
    /// closure. Missing trailing arguments bind `null`; surplus arguments are
    /// ignored. The call-frame scope is dropped on return unless a function
    /// created inside it escapes and keeps it alive. Functions that stay
    /// inside the frame would keep it alive through their closures, so the
    /// frame is released explicitly once the body finishes.
    ///
    /// # Returns
    /// The value of the last body statement, or `null` for an empty body.
    ///
    /// # Errors
    /// Returns `DuplicateDeclaration` if two parameters share a name, or any
    /// error raised by the body.
    pub fn call_function(&self,
                         function: &FunctionValue,
                         args: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        debug!(name = %function.name, args = args.len(), "calling function");

        let frame = function.closure.child();
        let mut args = args.into_iter();
        for param in &function.params {
            let value = args.next().unwrap_or(Value::Null);
            frame.declare(param, value, false)
                 .map_err(|e| e.at(param, line))?;
        }

        let result = self.eval_statements(&function.body, &frame);
        frame.release_if_unreachable();
        result
    }
}
