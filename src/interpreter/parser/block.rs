use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        stack::ensure_sufficient_stack,
    },
};

impl Parser<'_> {
    /// Parses the declarations of a block, after its opening `{`.
    ///
    /// Errors inside the block are recovered per declaration, like at top
    /// level; only a missing `}` fails the block itself.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// # Returns
    /// The statements of the block, without the failed ones.
    pub(super) fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = ensure_sufficient_stack(|| self.declaration()) {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
