use std::iter::Peekable;

use crate::{
    ast::{Expr, Property},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_closing, parse_identifier, peek_kind, peek_line, unexpected,
                within_group,
            },
        },
    },
};

/// Parses an object literal, or falls through to an additive expression.
///
/// Object literals sit between assignment and addition in the precedence
/// hierarchy, so `{ ... }` is only recognized where a full expression may
/// start.
///
/// Grammar:
/// ```text
///     object_literal := "{" (property ("," property)* ","?)? "}"
///                     | additive
///     property       := identifier (":" expression)?
/// ```
///
/// A property without `: expression` is shorthand; its value is read from
/// the binding of the same name when the literal is evaluated.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a key is not an identifier,
/// - two properties are not separated by a comma,
/// - the input ends before the closing brace (`UnclosedGroup`).
pub fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) != TokenKind::LBrace {
        return parse_additive(tokens);
    }
    let line = expect(tokens, TokenKind::LBrace, "'{'")?.line;

    within_group(tokens, '{', line, |tokens| {
        let properties = parse_properties(tokens)?;
        expect_closing(tokens, TokenKind::RBrace, '{', line)?;
        Ok(Expr::ObjectLiteral { properties, line })
    })
}

/// Parses the properties of an object literal up to, but not including, the
/// closing brace.
fn parse_properties<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Property>>
    where I: Iterator<Item = &'a Token>
{
    let mut properties = Vec::new();

    loop {
        match peek_kind(tokens) {
            TokenKind::RBrace | TokenKind::Eof => break,
            _ => {},
        }

        let key_line = peek_line(tokens);
        let key = parse_identifier(tokens)?;

        match peek_kind(tokens) {
            TokenKind::Comma => {
                tokens.next();
                properties.push(Property { key,
                                           value: None,
                                           line: key_line });
                continue;
            },
            TokenKind::RBrace => {
                properties.push(Property { key,
                                           value: None,
                                           line: key_line });
                continue;
            },
            _ => {},
        }

        expect(tokens, TokenKind::Colon, "':'")?;
        let value = parse_expression(tokens)?;
        properties.push(Property { key,
                                   value: Some(value),
                                   line: key_line });

        match peek_kind(tokens) {
            TokenKind::Comma => {
                tokens.next();
            },
            TokenKind::RBrace | TokenKind::Eof => {},
            _ => return Err(unexpected(tokens, "',' or '}'")),
        }
    }

    Ok(properties)
}
