/// Core evaluation logic.
///
/// Contains the `Interpreter`, its options, the exhaustive dispatch over
/// expression variants, and statement and program evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the arithmetic operators to numeric operands and enforces the
/// division-by-zero and operand-type rules.
pub mod binary;

/// Call evaluation.
///
/// Invokes native functions with the calling environment and user-defined
/// functions in a fresh child of their closure.
pub mod call;

/// Object literal evaluation.
pub mod object;

/// Member access evaluation.
///
/// Reads properties of object values by name or by computed key.
pub mod member;
