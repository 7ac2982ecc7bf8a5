use logos::Logos;

use crate::error::LexError;

/// Raw token produced by logos before text and line information are
/// attached.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Digits and decimal points, starting with a digit. Validated in
    /// [`tokenize`] so that `1.2.3` is rejected instead of truncated.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    /// A double-quoted string with no escape sequences. Newlines inside the
    /// literal still advance the line counter.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    })]
    String,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `fn`
    #[token("fn")]
    Fn,
    /// Letters and underscores. Digits are not part of identifiers.
    #[regex(r"[a-zA-Z_]+")]
    Identifier,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `.`
    #[token(".")]
    Dot,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`, `-`, `*`, `/` or `%`.
    #[regex(r"[+\-*/%]")]
    BinaryOperator,
    /// A line break. Advances the line counter and is skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal, such as `42` or `3.5`.
    Number,
    /// Identifier, such as `x` or `make_point`.
    Identifier,
    /// String literal. The token text excludes the quotes.
    String,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `fn`
    Fn,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `=`
    Equals,
    /// One of `+ - * / %`; the token text holds the symbol.
    BinaryOperator,
    /// End-of-input sentinel. Always the last token of a stream.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Let => "'let'",
            Self::Const => "'const'",
            Self::Fn => "'fn'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Equals => "'='",
            Self::BinaryOperator => "operator",
            Self::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// Represents a lexical token in the source input.
///
/// A token pairs its classification with the matched source text and the
/// line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The matched source text. For strings this excludes the quotes.
    pub text: String,
    /// The source line where the token starts.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Returns `true` if this is the end-of-input sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Converts source text into a token stream.
///
/// Whitespace (space, tab, newline, carriage return) separates tokens and is
/// otherwise discarded. The returned vector always ends with a
/// [`TokenKind::Eof`] token.
///
/// # Errors
/// - [`LexError::UnexpectedChar`] for a character that starts no token.
/// - [`LexError::UnterminatedString`] when a `"` is never closed.
/// - [`LexError::MalformedNumber`] for a number with several decimal points.
///
/// # Example
/// ```
/// use kestrel::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 42").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Identifier, TokenKind::Equals, TokenKind::Number,
///             TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let line = lexer.extras.line;

        let Ok(raw) = raw else {
            return Err(lex_error(slice, line));
        };

        let token = match raw {
            RawToken::Number => {
                if slice.matches('.').count() > 1 {
                    return Err(LexError::MalformedNumber { literal: slice.to_string(),
                                                           line });
                }
                Token::new(TokenKind::Number, slice, line)
            },
            RawToken::String => {
                // The callback already counted newlines inside the literal.
                let start_line = line - slice.matches('\n').count();
                Token::new(TokenKind::String, &slice[1..slice.len() - 1], start_line)
            },
            RawToken::Let => Token::new(TokenKind::Let, slice, line),
            RawToken::Const => Token::new(TokenKind::Const, slice, line),
            RawToken::Fn => Token::new(TokenKind::Fn, slice, line),
            RawToken::Identifier => Token::new(TokenKind::Identifier, slice, line),
            RawToken::LParen => Token::new(TokenKind::LParen, slice, line),
            RawToken::RParen => Token::new(TokenKind::RParen, slice, line),
            RawToken::LBrace => Token::new(TokenKind::LBrace, slice, line),
            RawToken::RBrace => Token::new(TokenKind::RBrace, slice, line),
            RawToken::LBracket => Token::new(TokenKind::LBracket, slice, line),
            RawToken::RBracket => Token::new(TokenKind::RBracket, slice, line),
            RawToken::Comma => Token::new(TokenKind::Comma, slice, line),
            RawToken::Colon => Token::new(TokenKind::Colon, slice, line),
            RawToken::Semicolon => Token::new(TokenKind::Semicolon, slice, line),
            RawToken::Dot => Token::new(TokenKind::Dot, slice, line),
            RawToken::Equals => Token::new(TokenKind::Equals, slice, line),
            RawToken::BinaryOperator => Token::new(TokenKind::BinaryOperator, slice, line),
            RawToken::NewLine | RawToken::Ignored => continue,
        };
        tokens.push(token);
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    Ok(tokens)
}

/// Classifies the slice logos could not match.
fn lex_error(slice: &str, line: usize) -> LexError {
    match slice.chars().next() {
        Some('"') => LexError::UnterminatedString { line },
        Some(character) => LexError::UnexpectedChar { character, line },
        None => LexError::UnexpectedChar { character: '\0',
                                           line },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_operators() {
        assert_eq!(kinds("( ) { } [ ] , : ; . = + - * / %"),
                   vec![TokenKind::LParen,
                        TokenKind::RParen,
                        TokenKind::LBrace,
                        TokenKind::RBrace,
                        TokenKind::LBracket,
                        TokenKind::RBracket,
                        TokenKind::Comma,
                        TokenKind::Colon,
                        TokenKind::Semicolon,
                        TokenKind::Dot,
                        TokenKind::Equals,
                        TokenKind::BinaryOperator,
                        TokenKind::BinaryOperator,
                        TokenKind::BinaryOperator,
                        TokenKind::BinaryOperator,
                        TokenKind::BinaryOperator,
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_only_match_whole_words() {
        let tokens = tokenize("let letter const fn fnord").unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

        assert_eq!(pairs,
                   vec![(TokenKind::Let, "let"),
                        (TokenKind::Identifier, "letter"),
                        (TokenKind::Const, "const"),
                        (TokenKind::Fn, "fn"),
                        (TokenKind::Identifier, "fnord"),
                        (TokenKind::Eof, "")]);
    }

    #[test]
    fn digits_end_an_identifier() {
        let tokens = tokenize("abc1").unwrap();

        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "abc", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Number, "1", 1));
    }

    #[test]
    fn numbers_and_strings_keep_their_text() {
        let tokens = tokenize("3.25 \"hi there\"").unwrap();

        assert_eq!(tokens[0], Token::new(TokenKind::Number, "3.25", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::String, "hi there", 1));
    }

    #[test]
    fn lines_are_tracked() {
        let tokens = tokenize("a\r\n\tb\n\"x\ny\" c").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();

        assert_eq!(lines, vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn multiple_decimal_points_are_rejected() {
        assert_eq!(tokenize("1.2.3"),
                   Err(LexError::MalformedNumber { literal: "1.2.3".to_string(),
                                                   line:    1, }));
    }

    #[test]
    fn unterminated_string_fails() {
        assert_eq!(tokenize("let s = \"abc"),
                   Err(LexError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn unknown_character_fails() {
        assert_eq!(tokenize("a\n  # b"),
                   Err(LexError::UnexpectedChar { character: '#',
                                                  line:      2, }));
    }
}
