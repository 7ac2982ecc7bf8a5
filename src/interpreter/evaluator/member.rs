use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::format_number,
};

impl Interpreter {
    /// Evaluates a member access.
    ///
    /// `object.name` reads the property `name`. `object[expr]` evaluates
    /// `expr` and reads the property with that key; numeric keys are
    /// converted to their printed form. A missing property reads as `null`.
    ///
    /// # Errors
    /// Returns `UnsupportedFeature` if the receiver is not an object or a
    /// computed key is neither a string nor a number.
    pub(crate) fn eval_member(&self,
                              object: &Expr,
                              property: &Expr,
                              computed: bool,
                              line: usize,
                              env: &Environment)
                              -> EvalResult<Value> {
        let receiver = self.eval(object, env)?;

        let object = match receiver {
            Value::Object(object) => object,
            other => {
                return Err(RuntimeError::UnsupportedFeature { details: format!("member access on a {} value",
                                                                               other.type_name()),
                                                              line });
            },
        };

        let key = if computed {
            match self.eval(property, env)? {
                Value::String(s) => s,
                Value::Number(n) => format_number(n),
                other => {
                    return Err(RuntimeError::UnsupportedFeature { details: format!("{} as a property key",
                                                                                   other.type_name()),
                                                                  line });
                },
            }
        } else {
            match property {
                Expr::Identifier { name, .. } => name.clone(),
                other => {
                    return Err(RuntimeError::UnsupportedFeature { details: "non-identifier property name".to_string(),
                                                                  line:    other.line_number(), });
                },
            }
        };

        Ok(object.get(&key).cloned().unwrap_or(Value::Null))
    }
}
