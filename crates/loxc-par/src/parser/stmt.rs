//! Statement and declaration grammar (spec §4.2).

use std::rc::Rc;

use loxc_lex::TokenKind;
use loxc_util::{DiagnosticCode, Span};

use crate::ast::{ClassDecl, ExprKind, FunctionDecl, LiteralValue, Stmt};
use crate::error::ParseError;

use super::core::Parser;

const MAX_PARAMS: usize = 255;

impl<'a> Parser<'a> {
    /// Parses the whole program: `declaration* EOF`.
    ///
    /// Accumulates errors rather than stopping at the first one (spec §7
    /// propagation policy): each failed declaration is reported, then
    /// [`Parser::synchronize`] skips to the next likely statement start.
    pub fn parse(mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => stmts.push(stmt),
                Err(_) => self.synchronize(),
            }
        }
        stmts
    }

    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::Class]) {
            return self.class_declaration();
        }
        if self.match_any(&[TokenKind::Function]) {
            return self.function_declaration("function").map(Stmt::Function);
        }
        if self.match_any(&[TokenKind::Var]) {
            return self.var_declaration();
        }
        self.statement()
    }

    fn class_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "class name")?.clone();

        // Self-inheritance (`class X < X`) is a resolver concern (spec
        // §4.3), not a syntax error, so it's not checked here.
        let superclass = if self.match_any(&[TokenKind::Less]) {
            let super_name = self.consume(TokenKind::Identifier, "superclass name")?.clone();
            let span = Span::new(0, 0, super_name.line);
            Some(self.mk_expr(ExprKind::Variable { name: super_name }, span))
        } else {
            None
        };

        self.consume(TokenKind::LeftBrace, "'{' before class body")?;
        let mut methods = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            methods.push(Rc::new(self.function_declaration("method")?));
        }
        self.consume(TokenKind::RightBrace, "'}' after class body")?;

        Ok(Stmt::Class(Rc::new(ClassDecl { name, superclass, methods })))
    }

    /// `IDENT "(" params? ")" block`, shared by `funcDecl` and class
    /// methods (`kind` is only used to word diagnostics).
    fn function_declaration(&mut self, kind: &'static str) -> Result<FunctionDecl, ParseError> {
        let name = self.consume(TokenKind::Identifier, &format!("{kind} name"))?.clone();
        self.consume(TokenKind::LeftParen, &format!("'(' after {kind} name"))?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_PARAMS {
                    let err = ParseError::TooMany { what: "parameters", line: self.peek().line };
                    self.report(&err, DiagnosticCode::E_PARSE_TOO_MANY_ARGS);
                }
                params.push(self.consume(TokenKind::Identifier, "parameter name")?.clone());
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "')' after parameters")?;

        self.consume(TokenKind::LeftBrace, &format!("'{{' before {kind} body"))?;
        let body = self.block()?;

        Ok(FunctionDecl { name, params, body })
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "variable name")?.clone();
        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "';' after variable declaration")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.match_any(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_any(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_any(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "';' after value")?;
        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "';' after return value")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "'(' after 'while'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "')' after condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { cond, body })
    }

    /// `for (init; cond; inc) body` desugars to a `while` wrapped in a
    /// block, per spec §4.2's desugaring rule.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "'(' after 'for'")?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.match_any(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "';' after loop condition")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "')' after for clauses")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or_else(|| {
            self.mk_expr(ExprKind::Literal { value: LiteralValue::Bool(true) }, Span::DUMMY)
        });
        body = Stmt::While { cond: condition, body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "'(' after 'if'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_any(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { cond, then_branch, else_branch })
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            stmts.push(self.declaration()?);
        }
        self.consume(TokenKind::RightBrace, "'}' after block")?;
        Ok(stmts)
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "';' after expression")?;
        Ok(Stmt::Expression(expr))
    }
}
