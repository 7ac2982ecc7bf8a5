use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name was looked up or assigned but is not bound in any enclosing
    /// scope.
    #[error("Error on line {line}: '{name}' is not declared.")]
    Undeclared {
        /// The name of the binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was declared twice in the same scope.
    #[error("Error on line {line}: '{name}' is already declared in this scope.")]
    DuplicateDeclaration {
        /// The name of the binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a `const` binding.
    #[error("Error on line {line}: Cannot assign to constant '{name}'.")]
    ConstantAssignment {
        /// The name of the binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment is not an identifier.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    #[error("Error on line {line}: {found} is not callable.")]
    InvalidCallee {
        /// Rendering of the value that was called.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A construct that parses but has no meaning for the given operands.
    #[error("Error on line {line}: Unsupported: {details}.")]
    UnsupportedFeature {
        /// What was attempted.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An arithmetic operator was applied to a non-numeric operand.
    #[error("Error on line {line}: Cannot apply '{op}' to {left} and {right}.")]
    TypeMismatch {
        /// The operator symbol.
        op:    String,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A native function reported a failure.
    #[error("Error on line {line}: Native function '{name}' failed: {message}.")]
    Native {
        /// The native function's registered name.
        name:    String,
        /// The message returned by the host callback.
        message: String,
        /// The source line of the call.
        line:    usize,
    },
}
