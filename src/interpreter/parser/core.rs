use std::{iter::Peekable, vec};

use crate::{
    ast::Expr,
    error::{Diagnostics, SyntaxError},
    interpreter::{
        lexer::{Token, TokenKind},
        stack::ensure_sufficient_stack,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Maximum number of parameters of a function, and of arguments of a call.
pub const MAX_ARGUMENTS: usize = 255;

/// Recursive-descent parser state.
///
/// Owns the token stream and borrows the diagnostics collector, which
/// receives both the errors caught at statement level and the non-fatal ones
/// reported in place (such as an invalid assignment target).
pub struct Parser<'d> {
    pub(super) tokens:      Peekable<vec::IntoIter<Token>>,
    pub(super) diagnostics: &'d mut Diagnostics,
    /// Line of the final token, used to anchor errors once the stream is
    /// exhausted.
    pub(super) eof_line:    usize,
}

impl<'d> Parser<'d> {
    /// Creates a parser over `tokens`, normally the output of
    /// [`scan`](crate::interpreter::lexer::scan).
    pub fn new(tokens: Vec<Token>, diagnostics: &'d mut Diagnostics) -> Self {
        let eof_line = tokens.last().map_or(1, |token| token.line);

        Self { tokens: tokens.into_iter().peekable(),
               diagnostics,
               eof_line }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy. Every nesting level of an expression passes
    /// through here, so the stack is grown here when it runs low.
    ///
    /// Grammar: `expression := assignment`
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Parses an assignment.
    ///
    /// Assignment is right-associative: `a = b = c` assigns `c` to `b`, then
    /// to `a`. The left-hand side is parsed as an ordinary expression first;
    /// only a bare variable is a valid target. Any other target is reported
    /// without unwinding, and the left-hand expression is kept as the result.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_or()?;

        if let Some(equals) = self.matches(&[TokenKind::Equal]) {
            let value = self.parse_expression()?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assign { name,
                                         value: Box::new(value) });
            }

            self.diagnostics
                .report(SyntaxError::at(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }
}
