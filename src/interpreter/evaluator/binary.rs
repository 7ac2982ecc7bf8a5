use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands of a binary expression, left then right, and
    /// combines them.
    ///
    /// Both sides are always evaluated; there is no short-circuiting.
    pub(crate) fn eval_binary_expr(&self,
                                   left: &Expr,
                                   right: &Expr,
                                   op: BinaryOperator,
                                   line: usize,
                                   env: &Environment)
                                   -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;
        self.eval_binary(op, &left, &right, line)
    }

    /// Applies a binary operator to two values.
    ///
    /// Numbers follow IEEE double arithmetic, except that dividing by exactly
    /// zero fails. A non-numeric operand fails with `TypeMismatch`, or yields
    /// `null` when lenient arithmetic is enabled.
    ///
    /// # Example
    /// ```
    /// use kestrel::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let interpreter = Interpreter::new();
    /// let seven = interpreter.eval_binary(BinaryOperator::Mod,
    ///                                     &Value::Number(17.0),
    ///                                     &Value::Number(10.0),
    ///                                     1);
    /// assert_eq!(seven, Ok(Value::Number(7.0)));
    ///
    /// let zero = interpreter.eval_binary(BinaryOperator::Div,
    ///                                    &Value::Number(1.0),
    ///                                    &Value::Number(0.0),
    ///                                    3);
    /// assert_eq!(zero, Err(RuntimeError::DivisionByZero { line: 3 }));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        let (Value::Number(l), Value::Number(r)) = (left, right) else {
            if self.options().lenient_arithmetic {
                return Ok(Value::Null);
            }
            return Err(RuntimeError::TypeMismatch { op: op.to_string(),
                                                    left: left.type_name(),
                                                    right: right.type_name(),
                                                    line });
        };

        Ok(Value::Number(Self::eval_numeric(op, *l, *r, line)?))
    }

    /// Applies an arithmetic operator to two numbers.
    fn eval_numeric(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left / right
            },
            Mod => left % right,
        })
    }
}
