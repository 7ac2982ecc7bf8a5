/// The environment module implements lexical scopes.
///
/// An environment maps names to values, remembers which names are constant,
/// and links to its parent. Lookup and assignment walk outward through the
/// parents, innermost first.
///
/// # Responsibilities
/// - Declares, assigns and looks up bindings.
/// - Builds independent root environments with the built-in constants and
///   native functions.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively against an environment,
/// producing a value or failing with a runtime error. Evaluation is fully
/// synchronous; deep recursion in a script is deep recursion in the host.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Creates call-frame scopes for user-defined functions.
/// - Reports runtime errors such as undeclared names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, its matched text and its line. The stream always ends
/// with an end-of-input token.
///
/// # Responsibilities
/// - Recognizes numbers, strings, identifiers, keywords, punctuation and
///   operators.
/// - Reports unexpected characters, unterminated strings and malformed
///   numbers.
pub mod lexer;
/// The natives module holds the host functions every global environment
/// starts with.
pub mod natives;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead and no
/// backtracking.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions with correct precedence
///   and associativity.
/// - Reports the first syntax error with its line and aborts.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides ordered objects, closures and native function handles.
/// - Renders values for printing.
pub mod value;
