//! Block string lexing.
//!
//! A block string runs from `"""` to the next `"""`. Line terminators are
//! allowed inside and advance the line counter; dedentation of the contents
//! is left to consumers of the token.

use crate::chars::{is_disallowed_control, is_line_terminator};
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

const TRIPLE_QUOTE: &str = "\"\"\"";

impl<'a> Lexer<'a> {
    /// Lexes a `"""..."""` block string.
    ///
    /// The closing check runs before escape handling at every position, and
    /// a run of more than three quotes closes on the first three.
    pub(super) fn lex_block_string(&mut self) -> Token {
        self.cursor.advance_n(TRIPLE_QUOTE.len());

        loop {
            if self.cursor.is_at_end() {
                return self.report_error(LexError::UnterminatedBlockString);
            }
            if self.cursor.starts_with(TRIPLE_QUOTE) {
                self.cursor.advance_n(TRIPLE_QUOTE.len());
                return self.make_token(TokenKind::BlockString);
            }

            match self.cursor.current_char() {
                '\\' => {
                    if let Err(err) = self.scan_escape() {
                        return self.report_error(err);
                    }
                },
                c if is_line_terminator(c) || c == '\t' => self.cursor.advance(),
                c if is_disallowed_control(c) => {
                    return self.report_error(LexError::ControlCharacter(c));
                },
                _ => self.cursor.advance(),
            }
        }
    }
}
