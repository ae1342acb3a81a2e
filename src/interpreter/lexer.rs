use logos::Logos;
use tracing::debug;

use crate::{
    error::{Diagnostics, SyntaxError},
    interpreter::value::core::Value,
};

/// The kind of a lexical token.
///
/// The lexer derives its state machine from the attributes on each variant.
/// Keywords are matched as exact tokens, which take priority over the
/// identifier pattern for inputs of the same length, so `or` is a keyword
/// while `orchid` is an identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literals such as `"hello"`. May span several lines.
    #[token("\"", lex_string)]
    String,
    /// Numeric literals such as `42` or `3.14`. A trailing `.` is not part
    /// of the number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; counted, never emitted.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Appended by [`scan`], never matched.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Errors the lexer can run into. Neither stops the scan.
#[derive(thiserror::Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// A string literal still open at the end of the input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical token: the unit the parser consumes.
///
/// Tokens are created once by [`scan`] and are read-only afterwards. String
/// and number tokens carry their decoded value in `literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What sort of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The value of a string or number literal.
    pub literal: Option<Value>,
    /// The line on which the token ends.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its source text, decoding literal values.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 3);
    /// assert_eq!(token.literal, Some(Value::from("hi")));
    /// assert_eq!(token.line, 3);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::String => {
                let inner = lexeme.strip_prefix('"')
                                  .and_then(|s| s.strip_suffix('"'))
                                  .unwrap_or(lexeme);
                Some(Value::from(inner))
            },
            TokenKind::Number => lexeme.parse::<f64>().ok().map(Value::Number),
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

/// Converts source text into tokens, terminated by exactly one
/// [`TokenKind::Eof`].
///
/// Lexical errors (unexpected characters, unterminated strings) are reported
/// to `diagnostics` and scanning continues after them; the offending text
/// produces no token.
///
/// # Example
/// ```
/// use lox::{error::Diagnostics, interpreter::lexer::{TokenKind, scan}};
///
/// let mut diagnostics = Diagnostics::default();
/// let kinds: Vec<_> = scan("var x = 1.5;", &mut diagnostics).iter()
///                                                          .map(|t| t.kind)
///                                                          .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(!diagnostics.had_syntax_error());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), lexer.extras.line)),
            Err(error) => {
                diagnostics.report(SyntaxError::bare(lexer.extras.line, error.to_string()));
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!(tokens = tokens.len(), lines = lexer.extras.line, "scanned source");

    tokens
}

/// Counts a line break and skips it.
fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    logos::Skip
}

/// Consumes the body of a string literal after its opening quote.
///
/// Line breaks inside the literal are counted. Without a closing quote the
/// rest of the input is consumed and reported as unterminated.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    let remainder = lex.remainder();

    if let Some(end) = remainder.find('"') {
        lex.extras.line += remainder[..end].matches('\n').count();
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.extras.line += remainder.matches('\n').count();
        lex.bump(remainder.len());
        Err(LexError::UnterminatedString)
    }
}
