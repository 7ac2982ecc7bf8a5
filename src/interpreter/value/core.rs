use std::rc::Rc;

use crate::{
    interpreter::value::{
        function::{FunctionValue, NativeFunction},
        object::ObjectValue,
    },
    util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// Objects and functions are reference counted; cloning a `Value` never
/// copies an object's properties or a function's body.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Also the result of statements that produce
    /// nothing, such as function declarations.
    Null,
    /// A double-precision floating-point number.
    Number(f64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A string.
    String(String),
    /// An object with insertion-ordered properties.
    Object(Rc<ObjectValue>),
    /// A user-defined function and its closure.
    Function(Rc<FunctionValue>),
    /// A host-supplied function.
    NativeFunction(NativeFunction),
}

impl Value {
    /// The name of this value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use kestrel::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::NativeFunction(_) => "native function",
        }
    }

    /// Returns the number if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Scalars compare by value, objects by contents, and functions by
    /// identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::NativeFunction(a), Self::NativeFunction(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<ObjectValue> for Value {
    fn from(v: ObjectValue) -> Self {
        Self::Object(Rc::new(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Object(o) => write!(f, "{o}"),
            Self::Function(func) => write!(f, "<fn {}>", func.name),
            Self::NativeFunction(native) => write!(f, "<native fn {}>", native.name),
        }
    }
}
