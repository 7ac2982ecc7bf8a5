use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                expect, expect_closing, parse_comma_separated, parse_identifier, peek_kind,
                peek_line, skip_semicolons, within_group,
            },
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`let` or `const`),
/// - a function declaration (`fn`),
/// - an expression used as a statement.
///
/// Dispatch uses one token of lookahead; nothing is ever backtracked.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::Let | TokenKind::Const => parse_variable_declaration(tokens),
        TokenKind::Fn => parse_function_declaration(tokens),
        _ => {
            let line = peek_line(tokens);
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> (= <expression>)?` or the
/// same with `const`, which marks the binding constant.
///
/// # Errors
/// Returns a `ParseError` if the identifier is missing or the initializer is
/// malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let kind = peek_kind(tokens);
    let keyword = expect(tokens, kind, "'let' or 'const'")?;
    let is_constant = keyword.kind == TokenKind::Const;
    let line = keyword.line;

    let name = parse_identifier(tokens)?;

    let value = if peek_kind(tokens) == TokenKind::Equals {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Statement::VariableDeclaration { name,
                                        value,
                                        is_constant,
                                        line })
}

/// Parses a function declaration of the form
/// `fn <name>(param1, param2, ...) { <statements> }`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - the parameter list or body is not properly delimited,
/// - a body statement fails to parse.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, TokenKind::Fn, "'fn'")?.line;
    let name = parse_identifier(tokens)?;

    let open = expect(tokens, TokenKind::LParen, "'('")?;
    let params = within_group(tokens, '(', open.line, |tokens| {
                     parse_comma_separated(tokens, parse_identifier, TokenKind::RParen, '(', open.line)
                 })?;

    let body = parse_statement_list(tokens)?;

    Ok(Statement::FunctionDeclaration(FunctionDef { name,
                                                    params,
                                                    body,
                                                    line }))
}

/// Parses a brace-delimited statement list, as used for function bodies.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns `UnclosedGroup` if the input ends before the closing brace.
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let open_line = expect(tokens, TokenKind::LBrace, "'{'")?.line;

    within_group(tokens, '{', open_line, |tokens| {
        let mut statements = Vec::new();
        loop {
            skip_semicolons(tokens);
            match peek_kind(tokens) {
                TokenKind::RBrace | TokenKind::Eof => break,
                _ => statements.push(parse_statement(tokens)?),
            }
        }

        expect_closing(tokens, TokenKind::RBrace, '{', open_line)?;
        Ok(statements)
    })
}
