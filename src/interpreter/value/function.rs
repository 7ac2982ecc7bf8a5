use std::rc::Rc;

use crate::{
    ast::Statement,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result returned by a native function.
///
/// The error is a plain message; the evaluator attaches the function name
/// and call-site line when it turns it into a `RuntimeError::Native`.
pub type NativeResult = Result<Value, String>;

/// Signature of a host callback: the evaluated arguments and the calling
/// environment.
pub type NativeFn = dyn Fn(&[Value], &Environment) -> NativeResult;

/// A user-defined function together with its closure.
///
/// `closure` is the environment that was active where the function was
/// declared. Calls run in a fresh child of it, never of the caller's
/// environment.
pub struct FunctionValue {
    /// The declared name.
    pub name:    String,
    /// Parameter names, bound positionally.
    pub params:  Vec<String>,
    /// Statements executed on each call.
    pub body:    Rc<[Statement]>,
    /// The declaration environment.
    pub closure: Environment,
}

// The closure usually contains this function itself, so it is left out.
impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

/// A host-supplied function.
#[derive(Clone)]
pub struct NativeFunction {
    /// The name the function was registered under.
    pub name: Rc<str>,
    func:     Rc<NativeFn>,
}

impl NativeFunction {
    /// Wraps a host callback.
    pub fn new(name: &str, func: impl Fn(&[Value], &Environment) -> NativeResult + 'static) -> Self {
        Self { name: Rc::from(name),
               func: Rc::new(func), }
    }

    /// Invokes the callback.
    pub fn call(&self, args: &[Value], env: &Environment) -> NativeResult {
        (self.func)(args, env)
    }

    /// Returns `true` if both handles wrap the same callback.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.func), Rc::as_ptr(&other.func))
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}
