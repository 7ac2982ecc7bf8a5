use std::rc::Rc;

use crate::{
    ast::Property,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, object::ObjectValue},
    },
};

impl Interpreter {
    /// Evaluates an object literal.
    ///
    /// Properties are evaluated in source order. A shorthand property reads
    /// the binding of the same name. A repeated key overwrites the earlier
    /// value but keeps the earlier position.
    ///
    /// # Errors
    /// Returns `Undeclared` for a shorthand property with no matching
    /// binding, or any error raised by a value expression.
    pub(crate) fn eval_object_literal(&self,
                                      properties: &[Property],
                                      env: &Environment)
                                      -> EvalResult<Value> {
        let mut object = ObjectValue::new();

        for property in properties {
            let value = match &property.value {
                Some(expr) => self.eval(expr, env)?,
                None => env.lookup(&property.key)
                           .map_err(|e| e.at(&property.key, property.line))?,
            };
            object.insert(property.key.as_str(), value);
        }

        Ok(Value::Object(Rc::new(object)))
    }
}
