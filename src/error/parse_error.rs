use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required token was missing or of the wrong kind.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The input ended inside a parenthesized, braced or bracketed group.
    #[error("Error on line {line}: Unclosed '{delimiter}'.")]
    UnclosedGroup {
        /// The opening delimiter that was never closed.
        delimiter: char,
        /// The line of the opening delimiter.
        line:      usize,
    },
}
