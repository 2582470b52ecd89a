use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an arithmetic operator to two values.
///
/// Numbers support all four operators. Two strings may be joined with `+`.
/// Every other combination is a type error.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when dividing by zero.
/// - [`RuntimeError::TypeError`] for unsupported operand types.
///
/// # Example
/// ```
/// use pyhton::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::apply_arithmetic, value::core::Value},
/// };
///
/// let sum = apply_arithmetic(BinaryOperator::Add, &Value::Number(2.0), &Value::Number(3.0), 1);
/// assert_eq!(sum.unwrap(), Value::Number(5.0));
///
/// let joined = apply_arithmetic(BinaryOperator::Add, &Value::from("ab"), &Value::from("c"), 1);
/// assert_eq!(joined.unwrap(), Value::from("abc"));
///
/// assert!(apply_arithmetic(BinaryOperator::Div, &Value::Number(1.0), &Value::Number(0.0), 1).is_err());
/// ```
pub fn apply_arithmetic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => number_arithmetic(op, *a, *b, line),
        (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(RuntimeError::TypeError { details: format!("unsupported operand types for {op}: {} and {}",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line }),
    }
}

fn number_arithmetic(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a / b
        },
    };
    Ok(Value::Number(result))
}
