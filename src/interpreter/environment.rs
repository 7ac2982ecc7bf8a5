use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        natives::DEFAULT_NATIVES,
        value::{
            core::Value,
            function::{NativeFunction, NativeResult},
        },
    },
};

/// Why a scope operation failed.
///
/// Scopes know nothing about source lines, so callers turn this into a
/// [`RuntimeError`] with [`ScopeError::at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// The name is not bound anywhere in the chain.
    Undeclared,
    /// The name is already bound in this very scope.
    DuplicateDeclaration,
    /// The binding that owns the name is constant.
    ConstantAssignment,
}

impl ScopeError {
    /// Attaches the binding name and source line.
    #[must_use]
    pub fn at(self, name: &str, line: usize) -> RuntimeError {
        let name = name.to_string();
        match self {
            Self::Undeclared => RuntimeError::Undeclared { name, line },
            Self::DuplicateDeclaration => RuntimeError::DuplicateDeclaration { name, line },
            Self::ConstantAssignment => RuntimeError::ConstantAssignment { name, line },
        }
    }
}

/// Bindings of one scope and the link to its parent.
#[derive(Default)]
struct Scope {
    variables: HashMap<String, Value>,
    constants: HashSet<String>,
    parent:    Option<Environment>,
}

/// A handle to one scope in a chain of lexical scopes.
///
/// Cloning the handle does not copy the scope: clones share the same
/// bindings. A child holds a handle to its parent, and a function value holds
/// a handle to the scope it was declared in, so a scope lives as long as its
/// longest holder.
///
/// Environments are single-threaded and must not be shared between
/// concurrent evaluations.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates an empty root scope with no bindings at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root scope holding only the constants `true`, `false` and
    /// `null`.
    #[must_use]
    pub fn bare_global() -> Self {
        let env = Self::new();
        {
            let mut scope = env.0.borrow_mut();
            for (name, value) in [("true", Value::Boolean(true)),
                                  ("false", Value::Boolean(false)),
                                  ("null", Value::Null)]
            {
                scope.variables.insert(name.to_string(), value);
                scope.constants.insert(name.to_string());
            }
        }
        env
    }

    /// Creates a root scope with the constants of [`Self::bare_global`] and
    /// the default native functions, such as `print`.
    ///
    /// Every call builds an independent root, so separate evaluations never
    /// observe each other's globals.
    ///
    /// # Example
    /// ```
    /// use kestrel::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::global();
    ///
    /// assert_eq!(env.lookup("true"), Ok(Value::Boolean(true)));
    /// assert!(matches!(env.lookup("print"), Ok(Value::NativeFunction(_))));
    /// ```
    #[must_use]
    pub fn global() -> Self {
        let env = Self::bare_global();
        for native in DEFAULT_NATIVES {
            // Names in the table are distinct and absent from a bare root.
            let _ = env.define_native(native.name, native.func);
        }
        env
    }

    /// Creates a new scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Scope { parent: Some(self.clone()),
                                          ..Scope::default() })))
    }

    /// Returns the parent scope, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    /// Binds `name` in this scope.
    ///
    /// Shadowing a binding of an enclosing scope is allowed.
    ///
    /// # Errors
    /// Returns [`ScopeError::DuplicateDeclaration`] if `name` is already bound
    /// in this scope.
    pub fn declare(&self, name: &str, value: Value, is_constant: bool) -> Result<(), ScopeError> {
        let mut scope = self.0.borrow_mut();
        if scope.variables.contains_key(name) {
            return Err(ScopeError::DuplicateDeclaration);
        }
        if is_constant {
            scope.constants.insert(name.to_string());
        }
        scope.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrites the nearest binding of `name`, innermost scope first.
    ///
    /// # Errors
    /// - [`ScopeError::Undeclared`] if no scope in the chain binds `name`.
    /// - [`ScopeError::ConstantAssignment`] if the owning scope marked it
    ///   constant.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), ScopeError> {
        let owner = self.resolve(name).ok_or(ScopeError::Undeclared)?;
        let mut scope = owner.0.borrow_mut();
        if scope.constants.contains(name) {
            return Err(ScopeError::ConstantAssignment);
        }
        scope.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value of the nearest binding of `name`.
    ///
    /// # Errors
    /// Returns [`ScopeError::Undeclared`] if no scope in the chain binds
    /// `name`.
    pub fn lookup(&self, name: &str) -> Result<Value, ScopeError> {
        let owner = self.resolve(name).ok_or(ScopeError::Undeclared)?;
        let scope = owner.0.borrow();
        scope.variables.get(name).cloned().ok_or(ScopeError::Undeclared)
    }

    /// Returns `true` if `name` is bound in this scope, ignoring parents.
    #[must_use]
    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().variables.contains_key(name)
    }

    /// Registers a host callback as a constant binding.
    ///
    /// # Errors
    /// Returns [`ScopeError::DuplicateDeclaration`] if `name` is already bound
    /// in this scope.
    pub fn define_native(&self,
                         name: &str,
                         func: impl Fn(&[Value], &Self) -> NativeResult + 'static)
                         -> Result<(), ScopeError> {
        self.declare(name, Value::NativeFunction(NativeFunction::new(name, func)), true)
    }

    /// Removes every binding of this scope. The parent link is kept.
    pub fn clear(&self) {
        let variables = {
            let mut scope = self.0.borrow_mut();
            scope.constants.clear();
            std::mem::take(&mut scope.variables)
        };
        // Dropped after the borrow ends: a binding may hold the last handle
        // to another scope.
        drop(variables);
    }

    /// Returns `true` if both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Clears a finished call frame if nothing outside it can still reach it.
    ///
    /// A function declared in a frame is bound in that frame and holds the
    /// frame as its closure. That `Rc` cycle is never freed on its own. The
    /// frame is unreachable when:
    /// - every strong handle to it, apart from `self`, belongs to a function
    ///   declared in it;
    /// - every such function, and every object leading to one, is only
    ///   referenced from the frame's own bindings.
    ///
    /// Returns `true` if the frame was cleared.
    pub fn release_if_unreachable(&self) -> bool {
        let (closures, escaped) = {
            let scope = self.0.borrow();
            let mut tally = HashMap::new();
            let mut closures = 0;
            for value in scope.variables.values() {
                count_references(value, self, &mut tally, &mut closures);
            }
            let escaped = tally.values().any(|t: &Tally| t.reaches_frame && t.seen != t.strong);
            (closures, escaped)
        };

        if closures == 0 || escaped || Rc::strong_count(&self.0) != 1 + closures {
            return false;
        }
        trace!(closures, "releasing call frame");
        self.clear();
        true
    }

    /// Finds the innermost scope in the chain that binds `name`.
    fn resolve(&self, name: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(env) = current {
            if env.has_own(name) {
                return Some(env);
            }
            current = env.parent();
        }
        None
    }
}

/// References to one `Rc` found while walking a frame's bindings.
struct Tally {
    /// How many times the walk reached it.
    seen:          usize,
    /// Its strong count when first reached.
    strong:        usize,
    /// Whether it is, or leads to, a function closing over the frame.
    reaches_frame: bool,
}

/// Counts the references `value` holds to objects and to functions whose
/// closure is `frame`. Objects are immutable, so the walk never loops.
///
/// Returns `true` if `value` leads to such a function.
fn count_references(value: &Value,
                    frame: &Environment,
                    tally: &mut HashMap<*const (), Tally>,
                    closures: &mut usize)
                    -> bool {
    match value {
        Value::Function(function) if function.closure.ptr_eq(frame) => {
            let entry = tally.entry(Rc::as_ptr(function).cast())
                             .or_insert_with(|| {
                                 *closures += 1;
                                 Tally { seen:          0,
                                         strong:        Rc::strong_count(function),
                                         reaches_frame: true, }
                             });
            entry.seen += 1;
            true
        },
        Value::Object(object) => {
            let key: *const () = Rc::as_ptr(object).cast();
            if let Some(entry) = tally.get_mut(&key) {
                entry.seen += 1;
                return entry.reaches_frame;
            }
            tally.insert(key,
                         Tally { seen:          1,
                                 strong:        Rc::strong_count(object),
                                 reaches_frame: false, });

            let mut reaches_frame = false;
            for (_, property) in object.iter() {
                reaches_frame |= count_references(property, frame, tally, closures);
            }
            if let Some(entry) = tally.get_mut(&key) {
                entry.reaches_frame = reaches_frame;
            }
            reaches_frame
        },
        _ => false,
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<_> = scope.variables.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &scope.parent.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::value::{function::FunctionValue, object::ObjectValue};

    #[test]
    fn shadowing_leaves_the_parent_untouched() {
        let parent = Environment::new();
        parent.declare("x", Value::Number(1.0), false).unwrap();

        {
            let child = parent.child();
            child.declare("x", Value::Number(2.0), false).unwrap();
            assert_eq!(child.lookup("x"), Ok(Value::Number(2.0)));
        }

        assert_eq!(parent.lookup("x"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn redeclaring_in_the_same_scope_fails() {
        let env = Environment::new();
        env.declare("x", Value::Null, false).unwrap();

        assert_eq!(env.declare("x", Value::Null, false),
                   Err(ScopeError::DuplicateDeclaration));
        assert_eq!(env.child().declare("x", Value::Null, false), Ok(()));
    }

    #[test]
    fn assignment_walks_outward() {
        let parent = Environment::new();
        parent.declare("x", Value::Number(1.0), false).unwrap();
        let child = parent.child();

        child.assign("x", Value::Number(5.0)).unwrap();

        assert!(!child.has_own("x"));
        assert_eq!(parent.lookup("x"), Ok(Value::Number(5.0)));
    }

    #[test]
    fn constants_reject_assignment() {
        let env = Environment::new();
        env.declare("c", Value::Number(1.0), true).unwrap();

        assert_eq!(env.child().assign("c", Value::Number(2.0)),
                   Err(ScopeError::ConstantAssignment));
        assert_eq!(env.lookup("c"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn constness_belongs_to_the_owning_scope() {
        let parent = Environment::new();
        parent.declare("x", Value::Number(1.0), true).unwrap();
        let child = parent.child();
        child.declare("x", Value::Number(2.0), false).unwrap();

        assert_eq!(child.assign("x", Value::Number(3.0)), Ok(()));
        assert_eq!(child.lookup("x"), Ok(Value::Number(3.0)));
    }

    #[test]
    fn unknown_names_are_undeclared() {
        let env = Environment::bare_global().child();

        assert_eq!(env.lookup("nope"), Err(ScopeError::Undeclared));
        assert_eq!(env.assign("nope", Value::Null), Err(ScopeError::Undeclared));
    }

    #[test]
    fn globals_are_constant_and_independent() {
        let a = Environment::global();
        let b = Environment::global();

        assert_eq!(a.assign("null", Value::Number(0.0)),
                   Err(ScopeError::ConstantAssignment));
        a.declare("only_in_a", Value::Null, false).unwrap();
        assert_eq!(b.lookup("only_in_a"), Err(ScopeError::Undeclared));
    }

    fn declare_closure(frame: &Environment, name: &str) -> Rc<FunctionValue> {
        let function = Rc::new(FunctionValue { name:    name.to_string(),
                                               params:  Vec::new(),
                                               body:    Rc::from(Vec::new()),
                                               closure: frame.clone(), });
        frame.declare(name, Value::Function(Rc::clone(&function)), true)
             .unwrap();
        function
    }

    #[test]
    fn frames_held_only_by_their_own_closures_are_released() {
        let frame = Environment::new().child();
        frame.declare("x", Value::Number(1.0), false).unwrap();
        drop(declare_closure(&frame, "inner"));

        assert!(frame.release_if_unreachable());
        assert!(!frame.has_own("x"));
        assert!(!frame.has_own("inner"));
    }

    #[test]
    fn frames_with_escaping_closures_are_kept() {
        let frame = Environment::new().child();
        let escaped = declare_closure(&frame, "inner");

        assert!(!frame.release_if_unreachable());
        assert!(frame.has_own("inner"));
        drop(escaped);
    }

    #[test]
    fn closures_escaping_inside_an_object_keep_the_frame() {
        let frame = Environment::new().child();
        let function = declare_closure(&frame, "inner");
        let object: ObjectValue = [("inner", Value::Function(function))].into_iter().collect();
        let object = Rc::new(object);
        frame.declare("holder", Value::Object(Rc::clone(&object)), false)
             .unwrap();

        assert!(!frame.release_if_unreachable());

        drop(object);
        assert!(frame.release_if_unreachable());
    }

    #[test]
    fn frames_without_closures_are_left_alone() {
        let frame = Environment::new().child();
        frame.declare("x", Value::Null, false).unwrap();

        assert!(!frame.release_if_unreachable());
        assert!(frame.has_own("x"));
    }

    #[test]
    fn natives_are_registered_as_constants() {
        let env = Environment::bare_global();
        env.define_native("answer", |_, _| Ok(Value::Number(42.0))).unwrap();

        assert_eq!(env.assign("answer", Value::Null),
                   Err(ScopeError::ConstantAssignment));
        assert_eq!(env.define_native("answer", |_, _| Ok(Value::Null)),
                   Err(ScopeError::DuplicateDeclaration));
    }
}
