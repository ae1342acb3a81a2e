use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// The kind of the next token; `Eof` once the stream is exhausted.
    pub(super) fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
    }

    pub(super) fn check(&mut self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(super) fn is_at_end(&mut self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consumes the next token unless it is the end of input, which is
    /// never consumed.
    fn advance(&mut self) -> Option<Token> {
        if self.is_at_end() {
            None
        } else {
            self.tokens.next()
        }
    }

    /// Consumes the next token if it is one of `kinds`.
    pub(super) fn matches(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        self.tokens
            .next_if(|token| token.kind != TokenKind::Eof && kinds.contains(&token.kind))
    }

    /// Consumes the next token if it is one of the operators in the table,
    /// returning it together with its operator.
    ///
    /// # Parameters
    /// - `operators`: Pairs of token kind and the operator it denotes.
    ///
    /// # Returns
    /// The consumed token and its operator, or `None` without consuming.
    pub(super) fn match_operator<O: Copy>(&mut self,
                                          operators: &[(TokenKind, O)])
                                          -> Option<(Token, O)> {
        let kind = self.peek_kind();
        let &(_, op) = operators.iter().find(|(candidate, _)| *candidate == kind)?;

        self.advance().map(|token| (token, op))
    }

    /// Consumes the next token, which must be of `kind`.
    ///
    /// # Errors
    /// A `SyntaxError` anchored at the unexpected token carrying `message`.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        match self.tokens.next_if(|token| token.kind == kind) {
            Some(token) => Ok(token),
            None => Err(self.error_at_peek(message)),
        }
    }

    /// Builds an error anchored at the next token.
    pub(super) fn error_at_peek(&mut self, message: &str) -> SyntaxError {
        let eof_line = self.eof_line;

        match self.tokens.peek() {
            Some(token) => SyntaxError::at(token, message),
            None => SyntaxError::at(&Token::eof(eof_line), message),
        }
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// Always discards the token that caused the error, then stops just
    /// after a `;` or just before a token that begins a declaration or
    /// statement.
    pub(super) fn synchronize(&mut self) {
        let Some(mut previous) = self.advance() else {
            return;
        };

        loop {
            if previous.kind == TokenKind::Semicolon {
                return;
            }

            match self.peek_kind() {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Eof => return,
                _ => {},
            }

            match self.advance() {
                Some(token) => previous = token,
                None => return,
            }
        }
    }

    /// Parses a parenthesized, comma-separated list after its opening `(`.
    ///
    /// Shared by parameter lists and call arguments. An immediate `)`
    /// produces an empty list. Lists longer than
    /// [`MAX_ARGUMENTS`] are reported without aborting the parse.
    ///
    /// Grammar (simplified): `list := ( item ( "," item )* )? ")"`
    ///
    /// # Parameters
    /// - `what`: Plural noun for the items, used in the length error.
    /// - `closing_message`: Error message when the closing `)` is missing.
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Returns
    /// The parsed items and the closing `)` token.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if an item fails to parse or the list is not
    /// closed.
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           what: &str,
                                           closing_message: &str,
                                           mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
                                           -> ParseResult<(Vec<T>, Token)> {
        let mut items = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if items.len() >= MAX_ARGUMENTS {
                    let error =
                        self.error_at_peek(&format!("Can't have more than {MAX_ARGUMENTS} {what}."));
                    self.diagnostics.report(error);
                }
                items.push(parse_item(self)?);

                if self.matches(&[TokenKind::Comma]).is_none() {
                    break;
                }
            }
        }

        let closing = self.consume(TokenKind::RightParen, closing_message)?;
        Ok((items, closing))
    }
}
