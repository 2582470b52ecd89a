/// An expression node.
///
/// Every variant records the source line it started on so runtime errors can
/// point back at the program text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    Str {
        /// The characters between the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `True` or `False`.
    Bool {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Arithmetic on two operands.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Comparison of two operands.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// Which connective this is.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operator applied to one operand.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Call of a user-defined function, e.g. `add(1, 2)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use pyhton::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Bool { line, .. }
            | Self::Identifier { line, .. }
            | Self::Binary { line, .. }
            | Self::Comparison { line, .. }
            | Self::Logical { line, .. }
            | Self::Unary { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A function definition: `def name(a, b): body`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// Statements run on each call.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// An `if` statement with its `elif` chain and optional `else`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// Condition of the leading `if`.
    pub condition:    Expr,
    /// Body run when `condition` holds.
    pub then_body:    Vec<Statement>,
    /// `(condition, body)` pairs, tried in order.
    pub elif_clauses: Vec<(Expr, Vec<Statement>)>,
    /// Body run when no condition holds.
    pub else_body:    Option<Vec<Statement>>,
    /// Line number in the source code.
    pub line:         usize,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value`.
    Assignment {
        /// The variable being written.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function definition.
    Function(FunctionDef),
    /// `return` with an optional value.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(value)`.
    Print {
        /// The expression to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `if` / `elif` / `else` chain.
    If(IfStatement),
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assignment { line, .. }
            | Self::Return { line, .. }
            | Self::Print { line, .. } => *line,
            Self::Function(def) => def.line,
            Self::If(stmt) => stmt.line,
        }
    }
}

/// A whole parsed program: its top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements, in execution order.
    pub statements: Vec<Statement>,
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a logical connective.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
