//! Identifiers and keywords: `[A-Za-z_][A-Za-z0-9_]*`.

use super::core::{is_ident_continue, Lexer};
use crate::token::{keyword_kind, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor().current_char()) {
            self.cursor().advance();
        }

        let lexeme = self.lexeme();
        let kind = keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;
    use loxc_util::Handler;

    #[test]
    fn plain_identifier() {
        let handler = Handler::new();
        let tokens = Lexer::new("counter", &handler).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "counter");
    }

    #[test]
    fn keyword_wins_over_identifier() {
        let handler = Handler::new();
        let tokens = Lexer::new("class", &handler).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Class);
    }

    #[test]
    fn underscores_and_digits_allowed_after_first_char() {
        let handler = Handler::new();
        let tokens = Lexer::new("_foo_2", &handler).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "_foo_2");
    }
}
