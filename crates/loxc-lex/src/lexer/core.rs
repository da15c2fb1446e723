//! Core lexer: the scan loop and its token dispatch table.

use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scans Lox source text into a token stream.
///
/// One `next_token()` call consumes `[token_start, cursor.position())` and
/// returns exactly one token (never zero — whitespace and comments are
/// skipped before `token_start` is recorded, so every call that isn't at
/// end of file commits to emitting something).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
    token_start: usize,
    token_start_line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Scans the whole source into a token vector ending in `Eof`.
    ///
    /// Lexing never aborts early: each bad character is reported and
    /// skipped so later diagnostics can still surface (spec §7's
    /// accumulating propagation policy for the lexer and parser).
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Some(token) => {
                    let is_eof = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                // Bad character: already reported, nothing to emit for it.
                None => continue,
            }
        }
        tokens
    }

    /// Scans and returns the next token, or `None` if the character under
    /// the cursor was invalid (reported as a diagnostic, then skipped).
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return Some(self.make_token(TokenKind::Eof));
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        Some(match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '%' => self.make_token(TokenKind::Percent),
            '/' => self.make_token(TokenKind::Slash),
            '!' | '=' | '<' | '>' => self.lex_operator(c),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                self.report_error(LexError::UnexpectedCharacter {
                    ch: c,
                    line: self.token_start_line,
                });
                return None;
            }
        })
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice(self.token_start, self.cursor.position())
    }

    pub(crate) fn line(&self) -> u32 {
        self.token_start_line
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), None, self.token_start_line)
    }

    pub(crate) fn report_error(&self, error: LexError) {
        let code = match error {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
        };
        let span = Span::new(self.token_start, self.cursor.position(), self.token_start_line);
        DiagnosticBuilder::error(error.to_string())
            .span(span)
            .code(code)
            .emit(self.handler);
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
