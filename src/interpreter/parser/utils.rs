use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// An exhausted iterator is reported as [`TokenKind::Eof`], so callers never
/// have to distinguish the sentinel from a missing token.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |t| t.kind)
}

/// Returns the line of the next token, or `0` if the stream is exhausted.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(0, |t| t.line)
}

/// Builds an `UnexpectedToken` error for the next token.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseError
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(tok) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                   found:    tok.to_string(),
                                                   line:     tok.line, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    "end of input".to_string(),
                                              line:     0, },
    }
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns `UnexpectedToken` naming `expected` if the next token differs.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == kind
       && let Some(tok) = tokens.next()
    {
        return Ok(tok);
    }
    Err(unexpected(tokens, expected))
}

/// Consumes the closing delimiter of a group.
///
/// Reaching the end of input instead of `closing` is reported as
/// `UnclosedGroup` for the opening delimiter; any other token is an
/// `UnexpectedToken`.
pub(in crate::interpreter::parser) fn expect_closing<'a, I>(tokens: &mut Peekable<I>,
                                                            closing: TokenKind,
                                                            opener: char,
                                                            open_line: usize)
                                                            -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        kind if kind == closing => {
            tokens.next();
            Ok(())
        },
        TokenKind::Eof => Err(ParseError::UnclosedGroup { delimiter: opener,
                                                          line:      open_line, }),
        _ => Err(unexpected(tokens, &closing.to_string())),
    }
}

/// Runs `parse` on the contents of a group opened by `opener` on
/// `open_line`.
///
/// If `parse` stops at the end of input with `UnexpectedToken`, the group
/// was never closed, and the error becomes `UnclosedGroup` for `opener`.
/// Nested groups convert first, so the innermost open delimiter is the one
/// reported.
pub(in crate::interpreter::parser) fn within_group<'a, I, T>(
    tokens: &mut Peekable<I>,
    opener: char,
    open_line: usize,
    parse: impl FnOnce(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<T>
    where I: Iterator<Item = &'a Token>
{
    match parse(tokens) {
        Err(ParseError::UnexpectedToken { .. }) if peek_kind(tokens) == TokenKind::Eof => {
            Err(ParseError::UnclosedGroup { delimiter: opener,
                                            line:      open_line, })
        },
        result => result,
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by call argument lists and function parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. An
/// immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, if a token other than
/// `,` or `closing` follows an item, or `UnclosedGroup` if the input ends
/// first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind,
    opener: char,
    open_line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if peek_kind(tokens) == closing {
        tokens.next();

        return Ok(items);
    }
    loop {
        if peek_kind(tokens) == TokenKind::Eof {
            return Err(ParseError::UnclosedGroup { delimiter: opener,
                                                   line:      open_line, });
        }
        items.push(parse_item(tokens)?);
        match peek_kind(tokens) {
            TokenKind::Comma => {
                tokens.next();
            },
            kind if kind == closing => {
                tokens.next();
                break;
            },
            TokenKind::Eof => {
                return Err(ParseError::UnclosedGroup { delimiter: opener,
                                                       line:      open_line, });
            },
            _ => return Err(unexpected(tokens, &format!("',' or {closing}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, "identifier").map(|tok| tok.text.clone())
}

/// Skips any `;` separators between statements.
pub(in crate::interpreter::parser) fn skip_semicolons<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while peek_kind(tokens) == TokenKind::Semicolon {
        tokens.next();
    }
}
