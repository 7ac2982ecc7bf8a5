/// Entry points and the shared result type.
///
/// Holds `parse_program` and the assignment level of the expression grammar,
/// which every other level eventually recurses back into.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading keyword: `let`/`const` declarations, `fn`
/// declarations, and expression statements.
pub mod statement;

/// Additive and multiplicative expressions.
///
/// Both levels are left-associative and built by iterative left-folding.
pub mod binary;

/// Object literal parsing.
pub mod object;

/// Call and member chains, and primary expressions.
pub mod postfix;

/// Utility functions for the parser.
///
/// Provides token inspection, expectation helpers and comma-separated list
/// parsing shared by the other parser modules.
pub mod utils;
