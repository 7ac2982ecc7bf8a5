//! # kestrel
//!
//! kestrel is a small expression-oriented scripting language with a
//! tree-walking evaluator written in Rust. Source text is tokenized, parsed
//! into an AST, and evaluated against a chain of lexical scopes. Functions
//! are closures over the scope they were declared in.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalOptions, Interpreter},
        lexer::{Token, tokenize as lex},
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, owned by its parent node, and never modified
/// afterwards.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error carries the source line it refers to. Errors are fail-fast:
/// the first one aborts the phase that raised it.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation.
pub mod interpreter;
/// General utilities shared across the interpreter.
pub mod util;

pub use error::Error;

/// Tokenizes source text.
///
/// # Errors
/// Returns a lexing error for input the tokenizer cannot classify.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(lex(source)?)
}

/// Tokenizes and parses source text into a [`Program`].
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Example
/// ```
/// let program = kestrel::parse("fn add(a, b) { a + b }").unwrap();
///
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = lex(source)?;
    Ok(parse_program(&tokens)?)
}

/// Runs source text in a fresh global environment with default options.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use kestrel::{interpreter::value::core::Value, run};
///
/// let source = "let a = 3\nlet b = 4\na * b + 1";
/// assert_eq!(run(source), Ok(Value::Number(13.0)));
///
/// // Example with an intentional error (unknown variable).
/// let source = "let y = x + 1";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    run_with(source, &Environment::global(), EvalOptions::default())
}

/// Runs source text in the given environment.
///
/// Declarations made by the program stay in `env`, so successive calls can
/// build on each other.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
pub fn run_with(source: &str, env: &Environment, options: EvalOptions) -> Result<Value, Error> {
    let program = parse(source)?;
    Ok(Interpreter::with_options(options).eval_program(&program, env)?)
}
