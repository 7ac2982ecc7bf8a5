use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                expect_closing, parse_comma_separated, parse_identifier, unexpected, within_group,
            },
        },
    },
};

/// Parses a primary expression followed by any number of call and member
/// suffixes.
///
/// Each suffix wraps the expression built so far, so chains fold to the
/// left: `a.b(1)[c]` is `((a.b)(1))[c]`.
///
/// Grammar:
/// ```text
///     call_member := primary suffix*
///     suffix      := "." identifier
///                  | "[" expression "]"
///                  | "(" (expression ("," expression)*)? ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if a suffix is malformed or left unclosed.
pub(crate) fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut node = parse_primary(tokens)?;

    loop {
        let Some(&token) = tokens.peek() else {
            break;
        };
        match token.kind {
            TokenKind::Dot => {
                tokens.next();
                let property_line = tokens.peek().map_or(token.line, |t| t.line);
                let name = parse_identifier(tokens)?;
                node = Expr::Member { object:   Box::new(node),
                                      property: Box::new(Expr::Identifier { name,
                                                                            line:
                                                                                property_line }),
                                      computed: false,
                                      line:     token.line, };
            },
            TokenKind::LBracket => {
                tokens.next();
                let property = within_group(tokens, '[', token.line, |tokens| {
                                   let property = parse_expression(tokens)?;
                                   expect_closing(tokens, TokenKind::RBracket, '[', token.line)?;
                                   Ok(property)
                               })?;
                node = Expr::Member { object:   Box::new(node),
                                      property: Box::new(property),
                                      computed: true,
                                      line:     token.line, };
            },
            TokenKind::LParen => {
                tokens.next();
                let arguments = within_group(tokens, '(', token.line, |tokens| {
                                    parse_comma_separated(tokens,
                                                          parse_expression,
                                                          TokenKind::RParen,
                                                          '(',
                                                          token.line)
                                })?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line: token.line };
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - identifiers
/// - numeric literals
/// - string literals
/// - parenthesized expressions
///
/// # Errors
/// Returns `UnexpectedToken` for any other token, and `UnclosedGroup` for a
/// parenthesis that is never closed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(&token) = tokens.peek() else {
        return Err(unexpected(tokens, "expression"));
    };

    match token.kind {
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Identifier { name: token.text.clone(),
                                  line: token.line, })
        },
        TokenKind::Number => {
            tokens.next();
            let value =
                token.text
                     .parse::<f64>()
                     .map_err(|_| ParseError::UnexpectedToken { expected: "numeric literal".to_string(),
                                                                found:    token.to_string(),
                                                                line:     token.line, })?;
            Ok(Expr::NumericLiteral { value,
                                      line: token.line })
        },
        TokenKind::String => {
            tokens.next();
            Ok(Expr::StringLiteral { value: token.text.clone(),
                                     line:  token.line, })
        },
        TokenKind::LParen => {
            tokens.next();
            within_group(tokens, '(', token.line, |tokens| {
                let expr = parse_expression(tokens)?;
                expect_closing(tokens, TokenKind::RParen, '(', token.line)?;
                Ok(expr)
            })
        },
        _ => Err(unexpected(tokens, "expression")),
    }
}
