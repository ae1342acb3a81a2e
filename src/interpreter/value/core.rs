use std::{fmt, rc::Rc};

use crate::interpreter::value::callable::Callable;

/// Represents a runtime value in the interpreter.
///
/// This is the only runtime type: a closed set of five variants. Strings are
/// reference counted so copying a value never copies text. Callables share
/// ownership of their captured environment.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Falsy.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A user-defined or native function.
    Callable(Callable),
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
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Callable(v)
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `nil` and `false` are falsy; everything else, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            _ => true,
        }
    }

    /// Returns the number inside the value, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a short name for the variant, used in log output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Callable(_) => "function",
        }
    }
}

/// Language equality.
///
/// `nil` equals only `nil`. Values of different variants are never equal.
/// Numbers use IEEE-754 comparison (so `NaN != NaN`), strings compare by
/// content and callables by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a == b,
            _ => false,
        }
    }
}

/// The textual rendering used by `print` and the prompt.
///
/// Integral numbers print without a fractional part.
///
/// # Example
/// ```
/// use lox::interpreter::value::core::Value;
///
/// assert_eq!(Value::Number(4.0).to_string(), "4");
/// assert_eq!(Value::Number(4.5).to_string(), "4.5");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Callable(c) => write!(f, "{c}"),
        }
    }
}
