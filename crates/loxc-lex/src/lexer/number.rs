//! Number literals: one or more digits, optional fractional part.

use super::core::Lexer;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Token {
        while self.cursor().current_char().is_ascii_digit() {
            self.cursor().advance();
        }

        if self.cursor().current_char() == '.' && self.cursor().peek_char(1).is_ascii_digit() {
            self.cursor().advance(); // consume '.'
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor().advance();
            }
        }

        let lexeme = self.lexeme();
        let value: f64 = lexeme.parse().expect("lexer only scans valid digit runs");
        Token::new(TokenKind::Number, lexeme, Some(Literal::Number(value)), self.line())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Literal, TokenKind};
    use loxc_util::Handler;

    fn number_value(src: &str) -> f64 {
        let handler = Handler::new();
        let tokens = Lexer::new(src, &handler).scan_tokens();
        match &tokens[0].literal {
            Some(Literal::Number(n)) => *n,
            other => panic!("expected number literal, got {other:?}"),
        }
    }

    #[test]
    fn integer_literal() {
        assert_eq!(number_value("123"), 123.0);
    }

    #[test]
    fn decimal_literal() {
        assert_eq!(number_value("3.14"), 3.14);
    }

    #[test]
    fn trailing_dot_with_no_following_digit_is_not_consumed() {
        let handler = Handler::new();
        let tokens = Lexer::new("123.", &handler).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }
}
