use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// The `Display` rendering is the message alone; [`RuntimeError::report`]
/// adds the line in the diagnostic format.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Read or assigned a name that no environment in the chain binds.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator that needs a number got something else.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The operator, as written.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An arithmetic or comparison operator got a non-number operand.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The operator, as written.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` got operands other than two numbers or two strings.
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a value that is not a function.
    #[error("Can only call functions and classes.")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The number of arguments differs from the callee's arity.
    #[error("Expected {expected} arguments but got {found}.")]
    ArityMismatch {
        /// The callee's arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Calls nested deeper than the interpreter allows.
    #[error("Stack overflow.")]
    StackOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `print` output failed.
    #[error("Failed to write output: {source}")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line, .. }
            | Self::OperandsMustBeNumbers { line, .. }
            | Self::OperandsMustBeNumbersOrStrings { line }
            | Self::NotCallable { line }
            | Self::ArityMismatch { line, .. }
            | Self::StackOverflow { line }
            | Self::Output { line, .. } => *line,
        }
    }

    /// The operator a type error was raised by, as written in the source.
    ///
    /// # Example
    /// ```
    /// use lox::{Error, get_output};
    ///
    /// let Err(Error::Runtime(error)) = get_output("print 1 < nil;") else {
    ///     panic!("expected a runtime error");
    /// };
    /// assert_eq!(error.operator(), Some("<"));
    /// ```
    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        match self {
            Self::OperandMustBeNumber { operator, .. } | Self::OperandsMustBeNumbers { operator, .. } => {
                Some(operator.as_str())
            },
            _ => None,
        }
    }

    /// Renders the error in the diagnostic format: the message, a newline,
    /// then `[line N]`.
    ///
    /// # Example
    /// ```
    /// use lox::error::RuntimeError;
    ///
    /// let error = RuntimeError::NotCallable { line: 4 };
    /// assert_eq!(error.report(), "Can only call functions and classes.\n[line 4]");
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        format!("{self}\n[line {}]", self.line())
    }
}
