use std::{
    collections::HashMap,
    io::{self, Stdout, Write},
    rc::Rc,
};

use crate::{
    ast::{Expr, FunctionDef, IfStatement, Program, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of executing a statement.
///
/// `return` is not an error and not a plain value either. It travels up
/// through nested statement bodies as [`Flow::Return`] until the function
/// call boundary turns it into the call's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement. Carries the value the
    /// statement produced, or [`Value::None`].
    Normal(Value),
    /// A `return` fired and the rest of the current body must be skipped.
    Return(Value),
}

/// Stores the runtime evaluation state of one program run.
///
/// This struct holds the global variables, one local scope per active
/// function call and every function defined so far. Program output goes to
/// `W`, which is standard output unless another writer is supplied.
///
/// ## Usage
///
/// An `Interpreter` is created once per run. Statements executed through the
/// same instance share globals and functions, so a REPL can feed it one
/// program at a time. Separate instances share nothing.
pub struct Interpreter<W: Write = Stdout> {
    /// Variables assigned outside of any function.
    pub globals:       HashMap<String, Value>,
    /// One scope per active call, innermost last.
    pub locals:        Vec<HashMap<String, Value>>,
    /// A mapping from function names to their definitions.
    pub functions:     HashMap<String, Rc<FunctionDef>>,
    pub(crate) output: W,
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `output`.
    ///
    /// # Example
    /// ```
    /// use pyhton::{
    ///     interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
    /// };
    ///
    /// let program = parse(&tokenize("prnit(1 + 1)")).unwrap();
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(interpreter.into_output(), b"2.0\n");
    /// ```
    pub fn with_output(output: W) -> Self {
        Self { globals: HashMap::new(),
               locals: Vec::new(),
               functions: HashMap::new(),
               output }
    }

    /// Consumes the interpreter and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// The first runtime error aborts the run. State built up before the
    /// failure, such as globals and defined functions, stays in place.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        self.output
            .flush()
            .map_err(|source| RuntimeError::Output { source, line: 0 })
    }

    /// Executes a single statement.
    ///
    /// Assignments and expression statements produce their value; every
    /// other statement produces [`Value::None`]. A `return` produces
    /// [`Flow::Return`], which is only legal while a function call is active.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr).map(Flow::Normal),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value.clone());
                Ok(Flow::Normal(value))
            },
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), Rc::new(def.clone()));
                Ok(Flow::Normal(Value::None))
            },
            Statement::Return { value, line } => {
                if self.locals.is_empty() {
                    return Err(RuntimeError::ReturnOutsideFunction { line: *line });
                }
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::None,
                };
                Ok(Flow::Return(value))
            },
            Statement::Print { value, line } => {
                let value = self.eval(value)?;
                writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                          line: *line })?;
                Ok(Flow::Normal(Value::None))
            },
            Statement::If(stmt) => self.execute_if(stmt),
        }
    }

    /// Executes statements in order, stopping early on `return`.
    pub fn execute_body(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.execute(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal(Value::None))
    }

    /// Runs the first branch whose condition is truthy, or the `else` body.
    fn execute_if(&mut self, stmt: &IfStatement) -> EvalResult<Flow> {
        if self.eval(&stmt.condition)?.is_truthy() {
            return self.execute_body(&stmt.then_body);
        }
        for (condition, body) in &stmt.elif_clauses {
            if self.eval(condition)?.is_truthy() {
                return self.execute_body(body);
            }
        }
        match &stmt.else_body {
            Some(body) => self.execute_body(body),
            None => Ok(Flow::Normal(Value::None)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables, unary,
    /// binary, comparison and logical operations, and function calls.
    ///
    /// # Example
    /// ```
    /// use pyhton::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// let expr = Expr::Str { value: "hi".to_string(),
    ///                        line:  1, };
    ///
    /// assert_eq!(interpreter.eval(&expr).unwrap(), Value::from("hi"));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Identifier { name, line } => self.eval_variable(name, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::Comparison { left,
                               op,
                               right,
                               line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logic(*op, left, right),
            Expr::Unary { op, operand, line } => self.eval_unary_op(*op, operand, *line),
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_function_call(name, arguments, *line),
        }
    }
}
