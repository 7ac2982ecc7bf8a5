use crate::interpreter::{
    environment::Environment,
    value::{core::Value, function::NativeResult},
};

/// Type alias for native function handlers registered by default.
///
/// A native receives the evaluated arguments and the calling environment.
type NativeHandler = fn(&[Value], &Environment) -> NativeResult;

/// One entry of the default native table.
pub struct NativeDef {
    /// The global name the function is bound to.
    pub name: &'static str,
    /// The handler.
    pub func: NativeHandler,
}

/// Defines the default native functions by generating `DEFAULT_NATIVES`, the
/// table consumed by `Environment::global`.
macro_rules! native_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        pub static DEFAULT_NATIVES: &[NativeDef] = &[
            $(
                NativeDef { name: $name, func: $func },
            )*
        ];
    };
}

native_functions! {
    "print"   => print,
    "type_of" => type_of,
}

/// Renders arguments the way `print` writes them: each value's display
/// form, separated by single spaces.
///
/// # Example
/// ```
/// use kestrel::interpreter::{natives::render_arguments, value::core::Value};
///
/// let line = render_arguments(&[Value::from("x ="), Value::Number(12.0), Value::Null]);
///
/// assert_eq!(line, "x = 12 null");
/// ```
#[must_use]
pub fn render_arguments(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints all arguments on one line of standard output and returns `null`.
///
/// # Example
/// ```
/// use kestrel::interpreter::{environment::Environment, natives::print, value::core::Value};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// let result = print(&[Value::Number(42.0)], &Environment::new()).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn print(args: &[Value], _env: &Environment) -> NativeResult {
    println!("{}", render_arguments(args));
    Ok(Value::Null)
}

/// Returns the type name of its single argument as a string.
///
/// # Errors
/// Fails unless exactly one argument is supplied.
pub fn type_of(args: &[Value], _env: &Environment) -> NativeResult {
    match args {
        [value] => Ok(Value::from(value.type_name())),
        _ => Err(format!("expected 1 argument, got {}", args.len())),
    }
}
