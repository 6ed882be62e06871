//! Punctuator lexing.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single-character punctuator.
    pub(super) fn lex_punctuator(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Lexes `...`.
    ///
    /// A short run of dots becomes one `Invalid` covering just those dots;
    /// whatever follows is left for the next token.
    pub(super) fn lex_spread(&mut self) -> Token {
        for _ in 0..3 {
            if !self.cursor.match_char('.') {
                return self.report_error(LexError::IncompleteSpread);
            }
        }
        self.make_token(TokenKind::Spread)
    }
}
