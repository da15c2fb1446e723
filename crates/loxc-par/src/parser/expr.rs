//! Expression grammar (spec §4.2), precedence climbing from `assignment`
//! (lowest) down to `primary` (highest), one level per grammar rule.

use loxc_lex::{Literal, TokenKind};
use loxc_util::DiagnosticCode;

use crate::ast::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};
use crate::error::ParseError;

use super::core::Parser;

const MAX_ARGS: usize = 255;

impl<'a> Parser<'a> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `( call "." )? IDENT "=" assignment | logic_or`
    ///
    /// Parsed at `or` precedence first; if `=` follows, the already-parsed
    /// left side is reinterpreted as an assignment target instead of
    /// being re-parsed, per spec's assignment rule.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or_expr()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals_line = self.previous().line;
            let value = self.assignment()?;
            let span = expr.span.merge(value.span);

            return match expr.kind {
                ExprKind::Variable { name } => {
                    Ok(self.mk_expr(ExprKind::Assign { name, value: Box::new(value) }, span))
                }
                ExprKind::Get { object, name } => Ok(self.mk_expr(
                    ExprKind::Set { object, name, value: Box::new(value) },
                    span,
                )),
                _ => {
                    let err = ParseError::InvalidAssignTarget { line: equals_line };
                    self.report(&err, DiagnosticCode::E_PARSE_INVALID_ASSIGN_TARGET);
                    Err(err)
                }
            };
        }

        Ok(expr)
    }

    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and_expr()?;
        while self.match_any(&[TokenKind::Or]) {
            let right = self.and_expr()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(
                ExprKind::Logical { left: Box::new(expr), op: LogicalOp::Or, right: Box::new(right) },
                span,
            );
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_any(&[TokenKind::And]) {
            let right = self.equality()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(
                ExprKind::Logical { left: Box::new(expr), op: LogicalOp::And, right: Box::new(right) },
                span,
            );
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::BangEqual => BinaryOp::NotEqual,
                TokenKind::EqualEqual => BinaryOp::Equal,
                _ => break,
            };
            self.advance();
            let right = self.comparison()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(ExprKind::Binary { left: Box::new(expr), op, right: Box::new(right) }, span);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                _ => break,
            };
            self.advance();
            let right = self.term()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(ExprKind::Binary { left: Box::new(expr), op, right: Box::new(right) }, span);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Minus => BinaryOp::Subtract,
                TokenKind::Plus => BinaryOp::Add,
                _ => break,
            };
            self.advance();
            let right = self.factor()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(ExprKind::Binary { left: Box::new(expr), op, right: Box::new(right) }, span);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Slash => BinaryOp::Divide,
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Percent => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            let span = expr.span.merge(right.span);
            expr = self.mk_expr(ExprKind::Binary { left: Box::new(expr), op, right: Box::new(right) }, span);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Negate,
            _ => return self.call(),
        };
        let start_line = self.advance().line;
        let right = self.unary()?;
        let span_end = right.span;
        let span = loxc_util::Span::new(0, 0, start_line).merge(span_end);
        Ok(self.mk_expr(ExprKind::Unary { op, right: Box::new(right) }, span))
    }

    /// `primary ( "(" arguments? ")" | "." IDENT )*`
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            if self.match_any(&[TokenKind::LeftParen]) {
                expr = self.finish_call(expr)?;
            } else if self.match_any(&[TokenKind::Dot]) {
                let name = self.consume(TokenKind::Identifier, "property name after '.'")?.clone();
                let span = expr.span.merge(loxc_util::Span::new(0, 0, name.line));
                expr = self.mk_expr(ExprKind::Get { object: Box::new(expr), name }, span);
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    let err = ParseError::TooMany { what: "arguments", line: self.peek().line };
                    self.report(&err, DiagnosticCode::E_PARSE_TOO_MANY_ARGS);
                }
                args.push(self.expression()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        let paren = self.consume(TokenKind::RightParen, "')' after arguments")?.clone();
        let span = callee.span.merge(loxc_util::Span::new(0, 0, paren.line));
        Ok(self.mk_expr(ExprKind::Call { callee: Box::new(callee), paren, args }, span))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        let span = loxc_util::Span::new(0, 0, token.line);

        match token.kind {
            TokenKind::False => {
                self.advance();
                Ok(self.mk_expr(ExprKind::Literal { value: LiteralValue::Bool(false) }, span))
            }
            TokenKind::True => {
                self.advance();
                Ok(self.mk_expr(ExprKind::Literal { value: LiteralValue::Bool(true) }, span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(self.mk_expr(ExprKind::Literal { value: LiteralValue::Nil }, span))
            }
            TokenKind::Number => {
                self.advance();
                let n = match token.literal {
                    Some(Literal::Number(n)) => n,
                    _ => unreachable!("lexer always attaches a Number literal"),
                };
                Ok(self.mk_expr(ExprKind::Literal { value: LiteralValue::Number(n) }, span))
            }
            TokenKind::String => {
                self.advance();
                let s = match token.literal {
                    Some(Literal::Str(s)) => s,
                    _ => unreachable!("lexer always attaches a String literal"),
                };
                Ok(self.mk_expr(ExprKind::Literal { value: LiteralValue::Str(s) }, span))
            }
            TokenKind::This => {
                self.advance();
                Ok(self.mk_expr(ExprKind::This { keyword: token }, span))
            }
            TokenKind::Super => {
                self.advance();
                self.consume(TokenKind::Dot, "'.' after 'super'")?;
                let method = self.consume(TokenKind::Identifier, "superclass method name")?.clone();
                Ok(self.mk_expr(ExprKind::Super { keyword: token, method }, span))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(self.mk_expr(ExprKind::Variable { name: token }, span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                let close = self.consume(TokenKind::RightParen, "')' after expression")?.clone();
                let span = span.merge(loxc_util::Span::new(0, 0, close.line));
                Ok(self.mk_expr(ExprKind::Grouping { inner: Box::new(inner) }, span))
            }
            _ => Err(self.error("expression")),
        }
    }
}
