use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary operation.
    ///
    /// `-` requires a number. `not` works on any value and yields the
    /// negation of its truthiness.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, operand: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(operand)?;
        apply_unary(op, &value, line)
    }
}

/// Applies a unary operator to an already evaluated operand.
///
/// # Example
/// ```
/// use pyhton::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::apply_unary, value::core::Value},
/// };
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, &Value::Number(2.0), 1).unwrap(),
///            Value::Number(-2.0));
/// assert_eq!(apply_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap(),
///            Value::Bool(true));
/// assert!(apply_unary(UnaryOperator::Negate, &Value::from("a"), 1).is_err());
/// ```
pub fn apply_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOperator::Negate, other) => {
            Err(RuntimeError::TypeError { details: format!("bad operand type for unary -: {}",
                                                           other.type_name()),
                                          line })
        },
        (UnaryOperator::Not, other) => Ok(Value::Bool(!other.is_truthy())),
    }
}
