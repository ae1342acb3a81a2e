use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

const EQUALITY: &[(TokenKind, BinaryOperator)] = &[(TokenKind::BangEqual, BinaryOperator::NotEqual),
                                                   (TokenKind::EqualEqual, BinaryOperator::Equal)];

const COMPARISON: &[(TokenKind, BinaryOperator)] =
    &[(TokenKind::Greater, BinaryOperator::Greater),
      (TokenKind::GreaterEqual, BinaryOperator::GreaterEqual),
      (TokenKind::Less, BinaryOperator::Less),
      (TokenKind::LessEqual, BinaryOperator::LessEqual)];

const TERM: &[(TokenKind, BinaryOperator)] = &[(TokenKind::Minus, BinaryOperator::Sub),
                                               (TokenKind::Plus, BinaryOperator::Add)];

const FACTOR: &[(TokenKind, BinaryOperator)] = &[(TokenKind::Slash, BinaryOperator::Div),
                                                 (TokenKind::Star, BinaryOperator::Mul)];

impl Parser<'_> {
    /// Parses a logical OR expression.
    ///
    /// `or` binds looser than `and`, and both bind looser than equality.
    ///
    /// Grammar: `logic_or := logic_and ( "or" logic_and )*`
    pub(super) fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;

        while self.matches(&[TokenKind::Or]).is_some() {
            let right = self.parse_and()?;
            left = Expr::Logical { left:  Box::new(left),
                                   op:    LogicalOperator::Or,
                                   right: Box::new(right), };
        }

        Ok(left)
    }

    /// Parses a logical AND expression.
    ///
    /// Grammar: `logic_and := equality ( "and" equality )*`
    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;

        while self.matches(&[TokenKind::And]).is_some() {
            let right = self.parse_equality()?;
            left = Expr::Logical { left:  Box::new(left),
                                   op:    LogicalOperator::And,
                                   right: Box::new(right), };
        }

        Ok(left)
    }

    /// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(EQUALITY, Self::parse_comparison)
    }

    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(COMPARISON, Self::parse_term)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(TERM, Self::parse_factor)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(FACTOR, Self::parse_unary)
    }

    /// Parses one left-associative binary precedence level.
    ///
    /// `a - b - c` groups as `(a - b) - c`. Each node records the line of
    /// its operator token.
    ///
    /// # Parameters
    /// - `operators`: The operators of this level.
    /// - `operand`: Parser for the next-higher precedence level.
    fn parse_left_associative(&mut self,
                              operators: &[(TokenKind, BinaryOperator)],
                              operand: fn(&mut Self) -> ParseResult<Expr>)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some((token, op)) = self.match_operator(operators) {
            let right = operand(self)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
        }

        Ok(left)
    }
}
