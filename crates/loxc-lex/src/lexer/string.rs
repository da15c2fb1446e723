//! String literals: `"..."`, no escape processing, may span lines.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Token {
        while self.cursor().current_char() != '"' && !self.cursor().is_at_end() {
            self.cursor().advance();
        }

        if self.cursor().is_at_end() {
            self.report_error(LexError::UnterminatedString { line: self.line() });
            return self.make_token(TokenKind::String);
        }

        // Closing quote.
        self.cursor().advance();

        let lexeme = self.lexeme();
        let value = lexeme[1..lexeme.len() - 1].to_string();
        Token::new(TokenKind::String, lexeme, Some(Literal::Str(value)), self.line())
    }
}
