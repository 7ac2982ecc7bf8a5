use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{core::Value, function::FunctionValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Settings that change how programs are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// When set, arithmetic on a non-numeric operand yields `null` instead of
    /// failing with `TypeMismatch`.
    pub lenient_arithmetic: bool,
}

/// Walks the AST and produces values.
///
/// The interpreter itself holds only options; all program state lives in
/// the [`Environment`] passed to each call. The same interpreter can
/// therefore evaluate against any number of independent roots.
///
/// ## Usage
///
/// ```
/// use kestrel::interpreter::{
///     environment::Environment, evaluator::core::Interpreter, lexer::tokenize,
///     parser::core::parse_program, value::core::Value,
/// };
///
/// let program = parse_program(&tokenize("let a = 3\na * 2").unwrap()).unwrap();
/// let result = Interpreter::new().eval_program(&program, &Environment::global());
///
/// assert_eq!(result, Ok(Value::Number(6.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: EvalOptions,
}

impl Interpreter {
    /// Creates an interpreter with default (strict) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given options.
    #[must_use]
    pub const fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    /// The options this interpreter was created with.
    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }

    /// Evaluates every statement of `program` in order.
    ///
    /// # Returns
    /// The value of the last statement, or `null` for an empty program.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> EvalResult<Value> {
        debug!(statements = program.body.len(), "evaluating program");
        let result = self.eval_statements(&program.body, env);
        if let Err(e) = &result {
            debug!(error = %e, "program failed");
        }
        result
    }

    /// Evaluates a statement list in `env`, yielding the last value.
    pub(crate) fn eval_statements(&self,
                                  statements: &[Statement],
                                  env: &Environment)
                                  -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in statements {
            last = self.eval_statement(statement, env)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind into `env` itself, never into a parent.
    ///
    /// # Returns
    /// - For a variable declaration, the bound value.
    /// - For a function declaration, `null`.
    /// - For an expression statement, the expression's value.
    pub fn eval_statement(&self, statement: &Statement, env: &Environment) -> EvalResult<Value> {
        match statement {
            Statement::VariableDeclaration { name,
                                             value,
                                             is_constant,
                                             line, } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Null,
                };
                trace!(name = %name, constant = is_constant, "declare");
                env.declare(name, value.clone(), *is_constant)
                   .map_err(|e| e.at(name, *line))?;
                Ok(value)
            },
            Statement::FunctionDeclaration(def) => {
                Self::eval_function_declaration(def, env)?;
                Ok(Value::Null)
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The match is
    /// exhaustive over [`Expr`], so every node kind has exactly one rule.
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            Expr::Identifier { name, line } => env.lookup(name).map_err(|e| e.at(name, *line)),
            Expr::Binary { left,
                           right,
                           op,
                           line, } => self.eval_binary_expr(left, right, *op, *line, env),
            Expr::Assignment { assignee,
                               value,
                               line, } => self.eval_assignment(assignee, value, *line, env),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
            Expr::Member { object,
                           property,
                           computed,
                           line, } => self.eval_member(object, property, *computed, *line, env),
            Expr::ObjectLiteral { properties, .. } => self.eval_object_literal(properties, env),
        }
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated first; the target must then be an
    /// identifier, which is assigned in the nearest scope that binds it.
    ///
    /// # Returns
    /// The assigned value, so assignments can be chained.
    fn eval_assignment(&self,
                       assignee: &Expr,
                       value: &Expr,
                       line: usize,
                       env: &Environment)
                       -> EvalResult<Value> {
        let value = self.eval(value, env)?;

        let Expr::Identifier { name, .. } = assignee else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        trace!(name = %name, "assign");
        env.assign(name, value.clone()).map_err(|e| e.at(name, line))?;
        Ok(value)
    }

    /// Binds a function declaration as a constant in `env`.
    ///
    /// The function captures `env` itself, so it observes later assignments
    /// to the variables it references.
    fn eval_function_declaration(def: &FunctionDef, env: &Environment) -> EvalResult<()> {
        let function = FunctionValue { name:    def.name.clone(),
                                       params:  def.params.clone(),
                                       body:    Rc::from(def.body.as_slice()),
                                       closure: env.clone(), };

        trace!(name = %def.name, params = def.params.len(), "declare function");
        env.declare(&def.name, Value::Function(Rc::new(function)), true)
           .map_err(|e| e.at(&def.name, def.line))
    }
}
