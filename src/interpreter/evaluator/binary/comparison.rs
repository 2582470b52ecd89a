use std::{cmp::Ordering, io::Write};

use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the final
/// boolean.
///
/// This function does not compare anything itself.
#[must_use]
pub fn ordering_satisfies(op: ComparisonOperator, ordering: Ordering) -> bool {
    match op {
        ComparisonOperator::Equal => ordering.is_eq(),
        ComparisonOperator::NotEqual => ordering.is_ne(),
        ComparisonOperator::Less => ordering.is_lt(),
        ComparisonOperator::Greater => ordering.is_gt(),
        ComparisonOperator::LessEqual => ordering.is_le(),
        ComparisonOperator::GreaterEqual => ordering.is_ge(),
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values; values of different kinds are
    /// never equal. The ordering operators need two numbers or two strings.
    ///
    /// # Example
    /// ```
    /// use pyhton::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Interpreter::<Vec<u8>>::eval_comparison(ComparisonOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let mixed = Interpreter::<Vec<u8>>::eval_comparison(ComparisonOperator::Equal,
    ///                                                      &a,
    ///                                                      &Value::from("3"),
    ///                                                      1);
    /// assert_eq!(mixed.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match op {
            ComparisonOperator::Equal => return Ok(Value::Bool(left == right)),
            ComparisonOperator::NotEqual => return Ok(Value::Bool(left != right)),
            _ => {},
        }

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' not supported between {} and {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line });
            },
        };

        Ok(Value::Bool(ordering.is_some_and(|ordering| ordering_satisfies(op, ordering))))
    }
}
