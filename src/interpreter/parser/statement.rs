use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        stack::ensure_sufficient_stack,
        value::core::Value,
    },
};

impl Parser<'_> {
    /// Parses one declaration, recovering from any syntax error inside it.
    ///
    /// On error the diagnostic is recorded, the parser synchronizes to the
    /// next statement boundary and `None` is returned.
    ///
    /// Grammar: `declaration := fun_decl | var_decl | statement`
    pub(super) fn declaration(&mut self) -> Option<Statement> {
        let result = if self.matches(&[TokenKind::Fun]).is_some() {
            self.parse_function()
        } else if self.matches(&[TokenKind::Var]).is_some() {
            self.parse_var_declaration()
        } else {
            self.parse_statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.diagnostics.report(error);
                self.synchronize();
                None
            },
        }
    }

    /// Parses a function declaration after `fun`.
    ///
    /// Grammar: `fun_decl := "fun" IDENTIFIER "(" parameters? ")" block`
    fn parse_function(&mut self) -> ParseResult<Statement> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let (params, _) = self.parse_comma_separated("parameters", "Expect ')' after parameters.", |parser| {
                                  parser.consume(TokenKind::Identifier, "Expect parameter name.")
                              })?;

        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.parse_block()?;

        Ok(Statement::Function(Rc::new(FunctionDef { name, params, body })))
    }

    /// Grammar: `var_decl := "var" IDENTIFIER ( "=" expression )? ";"`
    fn parse_var_declaration(&mut self) -> ParseResult<Statement> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.matches(&[TokenKind::Equal]).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Statement::Var { name, initializer })
    }

    /// Parses a statement that is not a declaration.
    ///
    /// Grammar:
    /// `statement := expr_stmt | for_stmt | if_stmt | print_stmt | return_stmt | while_stmt | block`
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Statement> {
        if self.matches(&[TokenKind::For]).is_some() {
            return self.parse_for();
        }
        if self.matches(&[TokenKind::If]).is_some() {
            return self.parse_if();
        }
        if let Some(keyword) = self.matches(&[TokenKind::Print]) {
            let expr = self.parse_expression()?;
            self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;

            return Ok(Statement::Print { expr,
                                         line: keyword.line });
        }
        if let Some(keyword) = self.matches(&[TokenKind::Return]) {
            let value = if self.check(TokenKind::Semicolon) {
                None
            } else {
                Some(self.parse_expression()?)
            };
            self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;

            return Ok(Statement::Return { value,
                                          line: keyword.line });
        }
        if self.matches(&[TokenKind::While]).is_some() {
            return self.parse_while();
        }
        if self.matches(&[TokenKind::LeftBrace]).is_some() {
            return Ok(Statement::Block { statements: self.parse_block()? });
        }

        self.parse_expression_statement()
    }

    /// Parses a `for` loop and desugars it into a `while` loop.
    ///
    /// `for (init; cond; incr) body` becomes
    /// `{ init; while (cond) { body; incr; } }`. A missing condition is
    /// `true`. Without an initializer no outer block is created, and without
    /// an increment the body is not wrapped.
    ///
    /// Grammar:
    /// `for_stmt := "for" "(" ( var_decl | expr_stmt | ";" ) expression? ";" expression? ")" statement`
    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]).is_some() {
            None
        } else if self.matches(&[TokenKind::Var]).is_some() {
            Some(self.parse_var_declaration()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.parse_statement()?;

        if let Some(increment) = increment {
            body = Statement::Block { statements: vec![body, Statement::Expression { expr: increment }] };
        }

        let condition = condition.unwrap_or(Expr::Literal { value: Value::Bool(true) });
        body = Statement::While { condition,
                                  body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Statement::Block { statements: vec![initializer, body] };
        }

        Ok(body)
    }

    /// Parses an `if` statement. An `else` binds to the nearest `if`.
    ///
    /// Grammar: `if_stmt := "if" "(" expression ")" statement ( "else" statement )?`
    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.matches(&[TokenKind::Else]).is_some() {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch })
    }

    /// Grammar: `while_stmt := "while" "(" expression ")" statement`
    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Statement::While { condition, body })
    }

    /// Grammar: `expr_stmt := expression ";"`
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;

        Ok(Statement::Expression { expr })
    }
}
