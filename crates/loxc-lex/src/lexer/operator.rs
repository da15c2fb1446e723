//! One- and two-character operators: `! != = == < <= > >=`.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_operator(&mut self, first: char) -> Token {
        let kind = match first {
            '!' => self.one_or_two('=', TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.one_or_two('=', TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.one_or_two('=', TokenKind::Less, TokenKind::LessEqual),
            '>' => self.one_or_two('=', TokenKind::Greater, TokenKind::GreaterEqual),
            _ => unreachable!("lex_operator only called for ! = < >"),
        };
        self.make_token(kind)
    }

    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) -> TokenKind {
        if self.cursor().match_char(second) {
            two
        } else {
            one
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;
    use loxc_util::Handler;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(src, &handler)
            .scan_tokens()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn one_and_two_char_forms() {
        assert_eq!(
            kinds("! != = == < <= > >="),
            vec![
                TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::EqualEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }
}
