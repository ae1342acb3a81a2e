use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        stack::ensure_sufficient_stack,
        value::core::Value,
    },
};

const UNARY: &[(TokenKind, UnaryOperator)] = &[(TokenKind::Bang, UnaryOperator::Not),
                                               (TokenKind::Minus, UnaryOperator::Negate)];

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix operators are right-associative, so `!!x` is `!(!x)` and
    /// `--x` is `-(-x)`.
    ///
    /// Grammar: `unary := ( "!" | "-" ) unary | call`
    pub(super) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some((token, op)) = self.match_operator(UNARY) {
            let expr = ensure_sufficient_stack(|| self.parse_unary())?;

            return Ok(Expr::Unary { op,
                                    expr: Box::new(expr),
                                    line: token.line });
        }

        self.parse_call()
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// `f(1)(2)` calls the result of `f(1)`.
    ///
    /// Grammar: `call := primary ( "(" arguments? ")" )*`
    fn parse_call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.matches(&[TokenKind::LeftParen]).is_some() {
            let (arguments, paren) =
                self.parse_comma_separated("arguments", "Expect ')' after arguments.", Self::parse_expression)?;

            expr = Expr::Call { callee: Box::new(expr),
                                arguments,
                                line: paren.line };
        }

        Ok(expr)
    }

    /// Parses a primary expression.
    ///
    /// Primary expressions are the atoms of the grammar: literals, variable
    /// references and parenthesized expressions.
    ///
    /// Grammar:
    /// `primary := "true" | "false" | "nil" | NUMBER | STRING | IDENTIFIER | "(" expression ")"`
    ///
    /// # Errors
    /// "Expect expression." at the current token if nothing here starts an
    /// expression.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::False]).is_some() {
            return Ok(Expr::Literal { value: Value::Bool(false) });
        }
        if self.matches(&[TokenKind::True]).is_some() {
            return Ok(Expr::Literal { value: Value::Bool(true) });
        }
        if self.matches(&[TokenKind::Nil]).is_some() {
            return Ok(Expr::Literal { value: Value::Nil });
        }
        if let Some(token) = self.matches(&[TokenKind::Number, TokenKind::String]) {
            return Ok(Expr::Literal { value: token.literal.unwrap_or(Value::Nil) });
        }
        if let Some(name) = self.matches(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable { name });
        }
        if self.matches(&[TokenKind::LeftParen]).is_some() {
            let expr = self.parse_expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;

            return Ok(Expr::Grouping { expr: Box::new(expr) });
        }

        Err(self.error_at_peek("Expect expression."))
    }
}
