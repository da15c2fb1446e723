//! loxc-lex - source text to token stream (spec §4.1).

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_kind, Literal, Token, TokenKind};

#[cfg(test)]
mod proptests {
    use super::*;
    use loxc_util::Handler;
    use proptest::prelude::*;

    /// Round-trip property from spec §8: lexing the concatenation of
    /// lexemes with a space between them yields tokens equivalent (modulo
    /// line numbers) to the original, for sequences built only from
    /// single-line-safe tokens (no strings, which may embed newlines).
    fn ident() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_map(|s| s)
    }

    fn safe_token() -> impl Strategy<Value = String> {
        prop_oneof![
            ident(),
            (0u32..10_000).prop_map(|n| n.to_string()),
            Just("+".to_string()),
            Just("-".to_string()),
            Just("*".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just(";".to_string()),
            Just("==".to_string()),
            Just("!=".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn lexeme_concat_round_trips_kinds(tokens in prop::collection::vec(safe_token(), 0..16)) {
            let source = tokens.join(" ");
            let handler = Handler::new();
            let scanned = Lexer::new(&source, &handler).scan_tokens();
            prop_assert!(!handler.has_errors());
            let lexemes: Vec<&str> = scanned
                .iter()
                .filter(|t| t.kind != TokenKind::Eof)
                .map(|t| t.lexeme.as_str())
                .collect();
            prop_assert_eq!(lexemes, tokens.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        }
    }
}
