use std::{
    collections::HashMap,
    io::Write,
    ops::{Deref, DerefMut},
};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

/// Deepest allowed nesting of function calls.
pub const MAX_CALL_DEPTH: usize = 200;

/// An active function call.
///
/// Entering a frame pushes the call's local scope and dropping it pops the
/// scope again, whether the body finished, returned early or failed.
pub struct CallFrame<'i, W: Write> {
    interpreter: &'i mut Interpreter<W>,
}

impl<'i, W: Write> CallFrame<'i, W> {
    /// Pushes `locals` as the innermost scope of `interpreter`.
    pub fn enter(interpreter: &'i mut Interpreter<W>, locals: HashMap<String, Value>) -> Self {
        interpreter.locals.push(locals);
        Self { interpreter }
    }
}

impl<W: Write> Deref for CallFrame<'_, W> {
    type Target = Interpreter<W>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl<W: Write> DerefMut for CallFrame<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<W: Write> Drop for CallFrame<'_, W> {
    fn drop(&mut self) {
        self.interpreter.locals.pop();
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a call of a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's scope before the
    /// argument count is checked. The body then runs in a fresh local scope
    /// holding only the parameters. A `return` ends the body and supplies the
    /// result; a body that runs to completion yields [`Value::None`].
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownFunction`] if no function of that name exists.
    /// - [`RuntimeError::ArityMismatch`] if the argument count is wrong.
    /// - [`RuntimeError::RecursionLimit`] if calls nest deeper than
    ///   [`MAX_CALL_DEPTH`].
    /// - Any error raised while evaluating arguments or the body.
    ///
    /// # Example
    /// ```
    /// use pyhton::{
    ///     interpreter::{
    ///         evaluator::core::Interpreter, lexer::tokenize, parser::parse, value::core::Value,
    ///     },
    /// };
    ///
    /// let program = parse(&tokenize("deff twice(n):\n  retrn n * 2")).unwrap();
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// interpreter.interpret(&program).unwrap();
    ///
    /// let call = parse(&tokenize("twice(21)")).unwrap();
    /// let flow = interpreter.execute(&call.statements[0]).unwrap();
    /// assert_eq!(flow, pyhton::interpreter::evaluator::core::Flow::Normal(Value::Number(42.0)));
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let function =
            self.functions
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                               line })?;

        let values = arguments.iter()
                              .map(|arg| self.eval(arg))
                              .collect::<EvalResult<Vec<_>>>()?;

        if values.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: function.params.len(),
                                                     found: values.len(),
                                                     line });
        }

        if self.locals.len() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      line });
        }

        let locals = function.params.iter().cloned().zip(values).collect();
        let mut frame = CallFrame::enter(self, locals);

        match frame.execute_body(&function.body)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal(_) => Ok(Value::None),
        }
    }
}
