use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Looks up a variable by name.
    ///
    /// Inside a function call the innermost local scope is checked first,
    /// then the global scope. Scopes of callers further down the stack are
    /// never visible.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use pyhton::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// interpreter.set_variable("x", Value::Number(1.0));
    /// interpreter.locals.push(HashMap::new());
    ///
    /// assert_eq!(interpreter.get_variable("x"), Some(&Value::Number(1.0)));
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.locals
            .last()
            .and_then(|scope| scope.get(name))
            .or_else(|| self.globals.get(name))
    }

    /// Binds `name` in the innermost local scope, or globally when no call is
    /// active.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        let scope = match self.locals.last_mut() {
            Some(scope) => scope,
            None => &mut self.globals,
        };
        scope.insert(name.to_string(), value);
    }

    /// Evaluates a variable reference, failing with
    /// [`RuntimeError::UnknownVariable`] when the name is unbound.
    pub(crate) fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
