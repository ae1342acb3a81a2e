//! # lox
//!
//! lox is a tree-walking interpreter for a small dynamically-typed scripting
//! language, written in Rust. Source text is scanned into tokens, parsed into
//! a syntax tree and executed directly over that tree, with lexical scoping,
//! first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Statement,
    error::Diagnostics,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to the AST nodes that can fail at runtime.
/// - Renders expressions in a parenthesized prefix form for debugging.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code, and the `Diagnostics` collector that records them for one
/// run. Every error carries the line it is attributed to.
///
/// # Responsibilities
/// - Defines the syntax and runtime error types and their exact report
///   formats.
/// - Tracks which kinds of error a run produced and the matching exit status.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for scanning, parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;
pub use interpreter::{lexer::scan, parser::parse};

/// Drives the pipeline over one interpreter.
///
/// A session keeps its interpreter, and so its global definitions, across
/// runs. Each [`Session::run`] is an independent pass of scan, parse and
/// execute: the program only runs if it parsed without error.
pub struct Session<W: Write> {
    interpreter: Interpreter<W>,
    diagnostics: Diagnostics,
}

impl<W: Write> Session<W> {
    /// Creates a session whose programs print to `out`.
    pub fn new(out: W) -> Self {
        Self::with_interpreter(Interpreter::new(out))
    }

    /// Creates a session around an existing interpreter, for example one with
    /// extra natives defined.
    pub fn with_interpreter(interpreter: Interpreter<W>) -> Self {
        Self { interpreter,
               diagnostics: Diagnostics::default() }
    }

    /// Scans, parses and, when there was no syntax error, executes `source`.
    ///
    /// # Returns
    /// The diagnostics of this run.
    ///
    /// # Example
    /// ```
    /// use lox::Session;
    ///
    /// let mut session = Session::new(Vec::new());
    /// session.run("var greeting = \"hi\";");
    /// let diagnostics = session.run("print greeting + \"!\";");
    ///
    /// assert_eq!(diagnostics.exit_code(), 0);
    /// assert_eq!(session.into_output(), b"hi!\n");
    /// ```
    pub fn run(&mut self, source: &str) -> &Diagnostics {
        if let Some(program) = self.prepare(source) {
            self.execute(&program);
        }

        &self.diagnostics
    }

    /// Runs one line of the interactive prompt.
    ///
    /// A line that is exactly one expression statement is evaluated and its
    /// value returned so the caller can echo it. Any other line runs like
    /// [`Session::run`].
    ///
    /// # Returns
    /// The value to echo, or `None` if the line was not a lone expression or
    /// it failed.
    pub fn echo_line(&mut self, source: &str) -> Option<Value> {
        let program = self.prepare(source)?;

        if let [Statement::Expression { expr }] = program.as_slice() {
            return match self.interpreter.evaluate(expr) {
                Ok(value) => Some(value),
                Err(error) => {
                    self.diagnostics.report_runtime(error);
                    None
                },
            };
        }

        self.execute(&program);
        None
    }

    /// The diagnostics of the latest run.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The interpreter, for defining natives or inspecting globals.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter<W> {
        &mut self.interpreter
    }

    /// Consumes the session and returns the output channel.
    pub fn into_output(self) -> W {
        self.interpreter.into_output()
    }

    /// Starts a run and parses `source`, returning the program only if it
    /// has no syntax error.
    fn prepare(&mut self, source: &str) -> Option<Vec<Statement>> {
        self.diagnostics.begin_run();

        let tokens = scan(source, &mut self.diagnostics);
        let program = parse(tokens, &mut self.diagnostics);

        if self.diagnostics.had_syntax_error() {
            debug!(errors = self.diagnostics.syntax_errors().len(), "skipping execution");
            return None;
        }

        Some(program)
    }

    fn execute(&mut self, program: &[Statement]) {
        if let Err(error) = self.interpreter.interpret(program) {
            self.diagnostics.report_runtime(error);
        }
    }
}

/// Runs `source` in a fresh session and returns everything it printed.
///
/// This is the simplest way to embed the interpreter. Output printed before a
/// runtime error is discarded along with the run.
///
/// # Errors
/// Returns [`Error::Syntax`] with every syntax error if the source does not
/// parse, or [`Error::Runtime`] if execution fails.
///
/// # Examples
/// ```
/// use lox::get_output;
///
/// let source = "fun add(a, b) { return a + b; } print add(2, 2);";
/// assert_eq!(get_output(source).unwrap(), "4\n");
///
/// // 'x' is not defined
/// let error = get_output("print x;").unwrap_err();
/// assert_eq!(error.to_string(), "Undefined variable 'x'.\n[line 1]");
/// ```
pub fn get_output(source: &str) -> Result<String, Error> {
    let mut session = Session::new(Vec::new());
    session.run(source);

    if session.diagnostics.had_syntax_error() {
        return Err(Error::Syntax(session.diagnostics.syntax_errors().to_vec()));
    }
    if let Some(error) = session.diagnostics.take_runtime_error() {
        return Err(Error::Runtime(error));
    }

    Ok(String::from_utf8_lossy(&session.into_output()).into_owned())
}
