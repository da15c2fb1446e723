//! Whitespace and comment skipping.
//!
//! Runs before every token is scanned; none of it produces tokens, so it
//! is kept out of `core`'s dispatch table entirely.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor().current_char() {
                ' ' | '\r' | '\t' | '\n' => {
                    self.cursor().advance();
                }
                '/' if self.cursor().peek_char(1) == '/' => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.cursor().current_char() != '\n' && !self.cursor().is_at_end() {
            self.cursor().advance();
        }
    }
}
