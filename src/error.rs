/// Lexing errors.
///
/// Raised by the tokenizer when the source text contains a character outside
/// every recognized class, a string literal that is never closed, or a
/// malformed numeric literal.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an AST.
/// The parser does not recover: the first malformed construct aborts the
/// whole parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undeclared names, assignments to constants, or division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running source text end to end.
///
/// Each phase keeps its own error type; this enum lets the entry points in
/// the crate root propagate all of them with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
