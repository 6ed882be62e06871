//! Number literal lexing.
//!
//! This module handles lexing of `IntValue` and `FloatValue`:
//!
//! ```text
//! -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
//! ```
//!
//! The literal may not be followed directly by a name character or `.`.

use crate::chars::{is_digit, is_name_continue, is_name_start};
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Returns
    ///
    /// `Int` or `Float` with the exact source text, or `Invalid`. A malformed
    /// literal swallows the rest of its name/dot run so `0123` or `1.2.3`
    /// produce a single `Invalid`.
    pub(super) fn lex_number(&mut self) -> Token {
        match self.scan_number() {
            Ok(kind) => self.make_token(kind),
            Err(err) => {
                self.cursor.eat_while(|c| is_name_continue(c) || c == '.');
                self.report_error(err)
            },
        }
    }

    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        let mut kind = TokenKind::Int;

        self.cursor.match_char('-');

        if self.cursor.match_char('0') {
            if is_digit(self.cursor.current_char()) {
                return Err(LexError::LeadingZero);
            }
        } else if self.scan_digits() == 0 {
            return Err(LexError::MissingIntegerDigit);
        }

        if self.cursor.match_char('.') {
            kind = TokenKind::Float;
            if self.scan_digits() == 0 {
                return Err(LexError::MissingFractionDigit);
            }
        }

        if self.cursor.match_char('e') || self.cursor.match_char('E') {
            kind = TokenKind::Float;
            if !self.cursor.match_char('+') {
                self.cursor.match_char('-');
            }
            if self.scan_digits() == 0 {
                return Err(LexError::MissingExponentDigit);
            }
        }

        if !self.cursor.is_at_end() {
            let next = self.cursor.current_char();
            if is_name_start(next) || next == '.' {
                return Err(LexError::InvalidNumberSuffix(next));
            }
        }

        Ok(kind)
    }

    /// Consumes a run of digits, returning how many there were.
    fn scan_digits(&mut self) -> usize {
        self.cursor.eat_while(is_digit)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{lex_kinds, lex_one};
    use crate::{Lexer, LexError, TokenKind};
    use gqlc_util::{Handler, Source};

    fn first_error(body: &str) -> Option<String> {
        let source = Source::new("test", body);
        let mut handler = Handler::new();
        let _: Vec<_> = Lexer::new(&source, &mut handler).collect();
        handler.diagnostics().first().map(|d| d.message.clone())
    }

    #[test]
    fn test_ints() {
        for input in ["0", "-0", "4", "-4", "9876543210", "-9"] {
            let token = lex_one(input);
            assert_eq!((token.kind, token.value.as_str()), (TokenKind::Int, input));
        }
    }

    #[test]
    fn test_floats() {
        for input in ["4.123", "-4.123", "0.123", "123e4", "123E4", "123e-4", "123e+4", "-1.123e4", "-1.123E-4", "1e50", "1.0e-50"] {
            let token = lex_one(input);
            assert_eq!((token.kind, token.value.as_str()), (TokenKind::Float, input));
        }
    }

    #[test]
    fn test_invalid_numbers_are_single_tokens() {
        for input in ["00", "0123", "01.23", "1.", "1.e1", "1.A", "-A", "1.0e", "1.0eA", "1e+", "1.2.3", "1e10e5", "1a", "0xF1", "1_000", "-"] {
            let token = lex_one(input);
            assert_eq!(token.kind, TokenKind::Invalid, "input {:?}", input);
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(first_error("01"), Some(LexError::LeadingZero.to_string()));
        assert_eq!(first_error("-x"), Some(LexError::MissingIntegerDigit.to_string()));
        assert_eq!(first_error("1."), Some(LexError::MissingFractionDigit.to_string()));
        assert_eq!(first_error("1e"), Some(LexError::MissingExponentDigit.to_string()));
        assert_eq!(first_error("12b"), Some(LexError::InvalidNumberSuffix('b').to_string()));
        assert_eq!(first_error("1.2."), Some(LexError::InvalidNumberSuffix('.').to_string()));
    }

    #[test]
    fn test_number_followed_by_punctuator() {
        assert_eq!(
            lex_kinds("1)"),
            vec![
                (TokenKind::Int, "1".to_string()),
                (TokenKind::ParenR, String::new()),
            ]
        );
        assert_eq!(
            lex_kinds("-1.5,2"),
            vec![
                (TokenKind::Float, "-1.5".to_string()),
                (TokenKind::Int, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_number_leaves_following_tokens() {
        let kinds = lex_kinds("0123 next");
        assert_eq!(kinds.len(), 2);
        assert_eq!(kinds[0].0, TokenKind::Invalid);
        assert_eq!(kinds[1], (TokenKind::Name, "next".to_string()));
    }
}
