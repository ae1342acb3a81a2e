use thiserror::Error;

/// Syntax errors.
///
/// Defines the error type for everything detected before execution: lexical
/// errors (unexpected characters, unterminated strings) and parse errors. It
/// renders in the `[line N] error <where>: <message>` diagnostic format.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, undefined variables, bad calls and output failures. Each
/// carries the line of the offending token.
pub mod runtime_error;
/// Per-run error bookkeeping.
///
/// The `Diagnostics` collector is threaded through lexing, parsing and
/// execution and is owned by whoever drives the pipeline.
pub mod diagnostics;

pub use diagnostics::Diagnostics;
pub use parse_error::{Location, SyntaxError};
pub use runtime_error::RuntimeError;

/// Why a whole run failed, as returned by [`get_output`](crate::get_output).
///
/// Renders in the same diagnostic format the command line prints.
#[derive(Error, Debug)]
pub enum Error {
    /// The source did not parse; nothing was executed.
    #[error("{}", render_syntax_errors(.0))]
    Syntax(Vec<SyntaxError>),
    /// Execution stopped at a runtime error.
    #[error("{}", .0.report())]
    Runtime(RuntimeError),
}

fn render_syntax_errors(errors: &[SyntaxError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
