use tracing::debug;

use crate::{
    ast::Statement,
    error::Diagnostics,
    interpreter::{lexer::Token, parser::core::Parser},
};

/// Parsing of `{ ... }` statement lists.
pub mod block;

/// Parsing of the binary precedence levels, from logical OR down to
/// multiplication.
///
/// Each level is a separate function that delegates to the next-higher
/// precedence, following the precedence climbing method.
pub mod binary;

/// The parser state and the expression entry point.
///
/// Defines `Parser` and the `ParseResult` type used throughout parsing, and
/// the assignment level, which is the lowest precedence.
pub mod core;

/// Parsing of declarations and statements, including the desugaring of
/// `for` loops.
pub mod statement;

/// Parsing of unary operators, calls and primary expressions.
///
/// These are the highest-precedence constructs.
pub mod unary;

/// Token cursor helpers shared by all parsing functions: lookahead,
/// matching, consuming and error recovery.
pub mod utils;

/// Parses a token sequence into a program.
///
/// Syntax errors are reported to `diagnostics`. After an error the parser
/// skips to the next statement boundary and keeps going, so one pass reports
/// every malformed statement. Statements that failed to parse are left out
/// of the result; callers must check [`Diagnostics::had_syntax_error`]
/// before executing it.
///
/// # Example
/// ```
/// use lox::{error::Diagnostics, parse, scan};
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan("var a = 1; print a;", &mut diagnostics);
/// let program = parse(tokens, &mut diagnostics);
///
/// assert_eq!(program.len(), 2);
/// assert!(!diagnostics.had_syntax_error());
/// ```
pub fn parse(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut parser = Parser::new(tokens, diagnostics);
    let mut statements = Vec::new();

    while !parser.is_at_end() {
        if let Some(statement) = parser.declaration() {
            statements.push(statement);
        }
    }

    debug!(statements = statements.len(), "parsed program");
    statements
}
