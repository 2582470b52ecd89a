use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::scalar::apply_arithmetic,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates an arithmetic expression.
    ///
    /// Both operands are always evaluated, left first, before the operator
    /// is applied.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        apply_arithmetic(op, &left, &right, line)
    }
}
