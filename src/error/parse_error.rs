use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

/// Where a syntax error is anchored in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Only the line is known (lexical errors).
    Line,
    /// At the end of the input.
    AtEnd,
    /// At a specific token, identified by its lexeme.
    AtToken(String),
}

/// An error detected while scanning or parsing.
///
/// The rendering is a fixed, tool-facing format:
/// `[line <N>] error <where>: <message>`, where `<where>` is empty for
/// line-anchored errors, `at end` at the end of input, and ` at '<lexeme>'`
/// (with its leading space) at a token.
///
/// # Example
/// ```
/// use lox::{error::SyntaxError, interpreter::lexer::{Token, TokenKind}};
///
/// let token = Token::new(TokenKind::Identifier, "x", 2);
///
/// assert_eq!(SyntaxError::bare(1, "Unexpected character.").to_string(),
///            "[line 1] error : Unexpected character.");
/// assert_eq!(SyntaxError::at(&token, "Expect ';' after value.").to_string(),
///            "[line 2] error  at 'x': Expect ';' after value.");
/// assert_eq!(SyntaxError::at(&Token::eof(3), "Expect expression.").to_string(),
///            "[line 3] error at end: Expect expression.");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] error {location}: {message}")]
pub struct SyntaxError {
    /// The source line of the error.
    pub line:     usize,
    /// Where on the line the error is anchored.
    pub location: Location,
    /// Human-readable description.
    pub message:  String,
}

impl SyntaxError {
    /// Creates an error anchored only to a line.
    pub fn bare(line: usize, message: impl Into<String>) -> Self {
        Self { line,
               location: Location::Line,
               message: message.into() }
    }

    /// Creates an error anchored at `token`.
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        let location = if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::AtToken(token.lexeme.clone())
        };

        Self { line: token.line,
               location,
               message: message.into() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => Ok(()),
            Self::AtEnd => write!(f, "at end"),
            Self::AtToken(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}
