use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedChar {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing quote was never found.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The line on which the string literal starts.
        line: usize,
    },
    /// A numeric literal with more than one decimal point, such as `1.2.3`.
    #[error("Error on line {line}: Malformed number literal '{literal}'.")]
    MalformedNumber {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
