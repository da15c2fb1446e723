//! Parser core: token cursor, matching helpers, and error recovery.

use loxc_lex::{Token, TokenKind};
use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::ast::{Expr, ExprIdGen, ExprKind};
use crate::error::ParseError;

/// Recursive-descent parser over a finished token vector (spec §4.2).
///
/// One token of lookahead; every grammar rule is a method that either
/// returns its node or an `Err` caught at the `declaration` boundary,
/// where [`Parser::synchronize`] skips ahead to a likely statement start
/// so one run can report more than one syntax error.
pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) current: usize,
    pub(crate) handler: &'a Handler,
    pub(crate) ids: ExprIdGen,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            current: 0,
            handler,
            ids: ExprIdGen::new(),
        }
    }

    pub(crate) fn mk_expr(&mut self, kind: ExprKind, span: Span) -> Expr {
        Expr {
            id: self.ids.next_id(),
            span,
            kind,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Consumes the current token if it matches any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error(message.to_string()))
    }

    /// Builds a [`ParseError`] for the current token and emits a matching
    /// diagnostic; does not advance or unwind by itself.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.peek().clone();
        let found = if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            token.lexeme.clone()
        };
        let err = ParseError::ExpectedToken {
            expected: message.into(),
            found,
            line: token.line,
        };
        self.report(&err, DiagnosticCode::E_PARSE_EXPECTED_TOKEN);
        err
    }

    pub(crate) fn report(&self, err: &ParseError, code: DiagnosticCode) {
        let span = Span::new(0, 0, err.line());
        DiagnosticBuilder::error(err.to_string())
            .span(span)
            .code(code)
            .emit(self.handler);
    }

    /// Advances past the token that caused an error until a likely
    /// statement boundary: just past a `;`, or at one of the keywords
    /// listed in spec §4.2.
    pub(crate) fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Function
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
