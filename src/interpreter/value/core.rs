use crate::util::num::format_number;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable. Operators always build new ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value, printed as `True` or `False`.
    Bool(bool),
    /// The absence of a value. Produced by calls that do not return anything
    /// and by statements such as `print`.
    None,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Converts the value to a truth value.
    ///
    /// `False`, `None`, zero and the empty string are false; everything else is
    /// true.
    ///
    /// # Example
    /// ```
    /// use pyhton::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::None.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::None => false,
        }
    }

    /// Short name of the value's kind, used in type errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::None => "None",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::None => write!(f, "None"),
        }
    }
}
