use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is always evaluated. The right one is evaluated only
    /// when the left does not already decide the result. The deciding operand
    /// itself is returned, not a converted boolean, so `0 or "x"` yields `"x"`.
    ///
    /// # Example
    /// ```
    /// use pyhton::{
    ///     ast::{Expr, LogicalOperator},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// let zero = Expr::Number { value: 0.0,
    ///                           line:  1, };
    /// let unbound = Expr::Identifier { name: "missing".to_string(),
    ///                                  line: 1, };
    ///
    /// let result = interpreter.eval_logic(LogicalOperator::And, &zero, &unbound);
    /// assert_eq!(result.unwrap(), Value::Number(0.0));
    /// ```
    pub fn eval_logic(&mut self, op: LogicalOperator, left: &Expr, right: &Expr) -> EvalResult<Value> {
        let left = self.eval(left)?;
        let decided = match op {
            LogicalOperator::And => !left.is_truthy(),
            LogicalOperator::Or => left.is_truthy(),
        };

        if decided {
            Ok(left)
        } else {
            self.eval(right)
        }
    }
}
