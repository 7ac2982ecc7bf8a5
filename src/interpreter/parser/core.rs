use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            object::parse_object_literal,
            statement::parse_statement,
            utils::{peek_kind, skip_semicolons},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a [`Program`].
///
/// Statements are parsed until the end-of-input sentinel. Stray `;`
/// separators between statements are skipped.
///
/// # Errors
/// The first malformed construct aborts the parse; there is no recovery.
///
/// # Example
/// ```
/// use kestrel::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let a = 1; a + 2").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut body = Vec::new();

    loop {
        skip_semicolons(&mut iter);
        if peek_kind(&mut iter) == TokenKind::Eof {
            break;
        }
        body.push(parse_statement(&mut iter)?);
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy:
///
/// ```text
///     assignment     := object_literal ("=" assignment)?
///     object_literal := "{" properties "}" | additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := call_member (("*" | "/" | "%") call_member)*
///     call_member    := primary ("." identifier | "[" expression "]" | "(" args ")")*
///     primary        := identifier | number | string | "(" expression ")"
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: the right-hand side is itself parsed as
/// an assignment, so `a = b = 3` becomes `a = (b = 3)`. The target is not
/// validated here; the evaluator rejects anything but an identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_object_literal(tokens)?;

    if peek_kind(tokens) == TokenKind::Equals
       && let Some(eq) = tokens.next()
    {
        let value = parse_assignment(tokens)?;
        return Ok(Expr::Assignment { assignee: Box::new(left),
                                     value:    Box::new(value),
                                     line:     eq.line, });
    }

    Ok(left)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, FunctionDef, Property, Statement},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Program> {
        parse_program(&tokenize(source).unwrap())
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier { name: name.to_string(),
                           line: 1, }
    }

    fn num(value: f64) -> Expr {
        Expr::NumericLiteral { value, line: 1 }
    }

    fn only_expr(source: &str) -> Expr {
        let mut program = parse(source).unwrap();
        assert_eq!(program.body.len(), 1);
        match program.body.remove(0) {
            Statement::Expression { expr, .. } => expr,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(only_expr("1 + 2 * 3"),
                   Expr::Binary { left:  Box::new(num(1.0)),
                                  right: Box::new(Expr::Binary { left:  Box::new(num(2.0)),
                                                                 right: Box::new(num(3.0)),
                                                                 op:    BinaryOperator::Mul,
                                                                 line:  1, }),
                                  op:    BinaryOperator::Add,
                                  line:  1, });
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(only_expr("8 - 4 - 2"),
                   Expr::Binary { left:  Box::new(Expr::Binary { left:  Box::new(num(8.0)),
                                                                 right: Box::new(num(4.0)),
                                                                 op:    BinaryOperator::Sub,
                                                                 line:  1, }),
                                  right: Box::new(num(2.0)),
                                  op:    BinaryOperator::Sub,
                                  line:  1, });
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(only_expr("a = b = 3"),
                   Expr::Assignment { assignee: Box::new(ident("a")),
                                      value:    Box::new(Expr::Assignment { assignee:
                                                                                Box::new(ident("b")),
                                                                            value:
                                                                                Box::new(num(3.0)),
                                                                            line:     1, }),
                                      line:     1, });
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(only_expr("(1 + 2) * 3"),
                   Expr::Binary { left:  Box::new(Expr::Binary { left:  Box::new(num(1.0)),
                                                                 right: Box::new(num(2.0)),
                                                                 op:    BinaryOperator::Add,
                                                                 line:  1, }),
                                  right: Box::new(num(3.0)),
                                  op:    BinaryOperator::Mul,
                                  line:  1, });
    }

    #[test]
    fn declarations() {
        let program = parse("let a\nconst b = 2").unwrap();

        assert_eq!(program.body,
                   vec![Statement::VariableDeclaration { name:        "a".to_string(),
                                                         value:       None,
                                                         is_constant: false,
                                                         line:        1, },
                        Statement::VariableDeclaration { name:        "b".to_string(),
                                                         value:       Some(Expr::NumericLiteral {
                                                             value: 2.0,
                                                             line:  2,
                                                         }),
                                                         is_constant: true,
                                                         line:        2, }]);
    }

    #[test]
    fn function_declaration() {
        let program = parse("fn add(a, b) { a + b }").unwrap();

        assert_eq!(program.body,
                   vec![Statement::FunctionDeclaration(FunctionDef {
                       name:   "add".to_string(),
                       params: vec!["a".to_string(), "b".to_string()],
                       body:   vec![Statement::Expression {
                           expr: Expr::Binary { left:  Box::new(ident("a")),
                                                right: Box::new(ident("b")),
                                                op:    BinaryOperator::Add,
                                                line:  1, },
                           line: 1,
                       }],
                       line:   1,
                   })]);
    }

    #[test]
    fn object_literal_with_shorthand_and_trailing_comma() {
        assert_eq!(only_expr("{ a: 1, b, }"),
                   Expr::ObjectLiteral { properties: vec![Property { key:   "a".to_string(),
                                                                     value: Some(num(1.0)),
                                                                     line:  1, },
                                                          Property { key:   "b".to_string(),
                                                                     value: None,
                                                                     line:  1, }],
                                         line:       1, });
    }

    #[test]
    fn call_and_member_chains_fold_left() {
        assert_eq!(only_expr("a.b[c](1)"),
                   Expr::Call { callee:    Box::new(Expr::Member {
                                    object:   Box::new(Expr::Member { object:   Box::new(ident("a")),
                                                                      property: Box::new(ident("b")),
                                                                      computed: false,
                                                                      line:     1, }),
                                    property: Box::new(ident("c")),
                                    computed: true,
                                    line:     1,
                                }),
                                arguments: vec![num(1.0)],
                                line:      1, });
    }

    #[test]
    fn semicolons_separate_statements() {
        let program = parse(";let a = 1;; a;").unwrap();

        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn unclosed_groups_are_reported() {
        assert_eq!(parse("(1 + 2"),
                   Err(ParseError::UnclosedGroup { delimiter: '(',
                                                   line:      1, }));
        assert_eq!(parse("fn f() {\n 1"),
                   Err(ParseError::UnclosedGroup { delimiter: '{',
                                                   line:      1, }));
        assert_eq!(parse("a[1"),
                   Err(ParseError::UnclosedGroup { delimiter: '[',
                                                   line:      1, }));
        assert_eq!(parse("f(1, 2"),
                   Err(ParseError::UnclosedGroup { delimiter: '(',
                                                   line:      1, }));
    }

    #[test]
    fn input_ending_anywhere_inside_a_group_is_unclosed() {
        for (source, delimiter) in [("(", '('),
                                    ("(1 +", '('),
                                    ("f(", '('),
                                    ("f(1 *", '('),
                                    ("a[", '['),
                                    ("a[1 -", '['),
                                    ("let o = { a", '{'),
                                    ("let o = { a:", '{'),
                                    ("let o = { a: 1 +", '{'),
                                    ("fn f(a", '('),
                                    ("fn f() { let", '{'),
                                    ("fn f() { g(", '(')]
        {
            assert_eq!(parse(source),
                       Err(ParseError::UnclosedGroup { delimiter,
                                                       line: 1 }),
                       "source: {source:?}");
        }
    }

    #[test]
    fn innermost_open_group_is_reported() {
        assert_eq!(parse("fn f() {\n  let o = {\n    a: (1 +"),
                   Err(ParseError::UnclosedGroup { delimiter: '(',
                                                   line:      3, }));
        assert_eq!(parse("fn f() {\n  { a: 1 }\n"),
                   Err(ParseError::UnclosedGroup { delimiter: '{',
                                                   line:      1, }));
    }

    #[test]
    fn input_ending_outside_a_group_is_unexpected() {
        assert_eq!(parse("let x ="),
                   Err(ParseError::UnexpectedToken { expected: "expression".to_string(),
                                                     found:    "end of input".to_string(),
                                                     line:     1, }));
    }

    #[test]
    fn missing_tokens_are_unexpected() {
        assert_eq!(parse("let = 3"),
                   Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                     found:    "'='".to_string(),
                                                     line:     1, }));
        assert_eq!(parse("{ a: 1 b: 2 }"),
                   Err(ParseError::UnexpectedToken { expected: "',' or '}'".to_string(),
                                                     found:    "'b'".to_string(),
                                                     line:     1, }));
        assert!(matches!(parse("1 + )"), Err(ParseError::UnexpectedToken { .. })));
    }
}
