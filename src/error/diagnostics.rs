use tracing::debug;

use crate::error::{RuntimeError, SyntaxError};

/// Exit status for a run that hit a syntax error.
pub const EXIT_SYNTAX_ERROR: u8 = 65;
/// Exit status for a run that hit a runtime error.
pub const EXIT_RUNTIME_ERROR: u8 = 70;

/// Collects the errors of the pipeline.
///
/// Lexer and parser report every syntax error they find and keep going; the
/// driver checks [`Diagnostics::had_syntax_error`] before executing. The
/// evaluator stops at the first runtime error, which is stored here.
///
/// [`Diagnostics::begin_run`] starts an independent run (a file, or one
/// prompt line): it forgets the previous run's errors but keeps the sticky
/// "a runtime error happened" flag.
#[derive(Debug, Default)]
pub struct Diagnostics {
    syntax_errors:     Vec<SyntaxError>,
    runtime_error:     Option<RuntimeError>,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Records a syntax error.
    pub fn report(&mut self, error: SyntaxError) {
        debug!(line = error.line, message = %error.message, "syntax error");
        self.syntax_errors.push(error);
    }

    /// Records the runtime error that ended the current run.
    pub fn report_runtime(&mut self, error: RuntimeError) {
        debug!(line = error.line(), operator = error.operator(), %error, "runtime error");
        self.runtime_error = Some(error);
        self.had_runtime_error = true;
    }

    /// Clears the errors of the previous run.
    ///
    /// The runtime flag survives: a prompt session remembers that some
    /// earlier line failed.
    pub fn begin_run(&mut self) {
        self.syntax_errors.clear();
        self.runtime_error = None;
    }

    /// Whether the current run has any syntax error.
    #[must_use]
    pub fn had_syntax_error(&self) -> bool {
        !self.syntax_errors.is_empty()
    }

    /// Whether any run so far ended in a runtime error.
    #[must_use]
    pub const fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// The syntax errors of the current run, in the order they were found.
    #[must_use]
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        &self.syntax_errors
    }

    /// The runtime error of the current run, if any.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&RuntimeError> {
        self.runtime_error.as_ref()
    }

    /// Takes the runtime error of the current run out of the collector.
    pub fn take_runtime_error(&mut self) -> Option<RuntimeError> {
        self.runtime_error.take()
    }

    /// Renders every error of the current run in diagnostic format, one
    /// report per item.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.syntax_errors
            .iter()
            .map(ToString::to_string)
            .chain(self.runtime_error.iter().map(RuntimeError::report))
            .collect()
    }

    /// The process exit status for a file run: 65 after a syntax error, 70
    /// after a runtime error, 0 otherwise.
    ///
    /// # Example
    /// ```
    /// use lox::error::{Diagnostics, RuntimeError, SyntaxError};
    ///
    /// let mut diagnostics = Diagnostics::default();
    /// assert_eq!(diagnostics.exit_code(), 0);
    ///
    /// diagnostics.report_runtime(RuntimeError::NotCallable { line: 1 });
    /// assert_eq!(diagnostics.exit_code(), 70);
    ///
    /// diagnostics.report(SyntaxError::bare(1, "Unexpected character."));
    /// assert_eq!(diagnostics.exit_code(), 65);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.had_syntax_error() {
            EXIT_SYNTAX_ERROR
        } else if self.had_runtime_error {
            EXIT_RUNTIME_ERROR
        } else {
            0
        }
    }
}
