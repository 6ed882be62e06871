//! String literal lexing.
//!
//! Strings are validated, not decoded: the token value is the raw source text
//! between and including the quotes. Escape validation is shared with block
//! strings through [`Lexer::scan_escape`].

use crate::chars::{is_disallowed_control, is_hex_digit, is_line_terminator, is_simple_escape};
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"..."` string.
    ///
    /// The character that causes a violation is not consumed, so a line
    /// terminator inside an unterminated string still counts as a new line.
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                return self.report_error(LexError::UnterminatedString);
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::String);
                },
                '\\' => {
                    if let Err(err) = self.scan_escape() {
                        return self.report_error(err);
                    }
                },
                c if is_line_terminator(c) => {
                    return self.report_error(LexError::LineTerminatorInString);
                },
                c if is_disallowed_control(c) => {
                    return self.report_error(LexError::ControlCharacter(c));
                },
                _ => self.cursor.advance(),
            }
        }
    }

    /// Validates an escape sequence starting at the current `\`.
    ///
    /// On success the backslash and the escape are consumed. A backslash at
    /// the very end of input is consumed and accepted; the caller then reports
    /// the missing closing quote. On failure the offending character is left
    /// in place.
    pub(super) fn scan_escape(&mut self) -> Result<(), LexError> {
        self.cursor.advance(); // backslash
        if self.cursor.is_at_end() {
            return Ok(());
        }

        let c = self.cursor.current_char();
        if is_simple_escape(c) {
            self.cursor.advance();
            return Ok(());
        }
        if c != 'u' {
            return Err(LexError::InvalidEscape(c));
        }

        self.cursor.advance();
        for _ in 0..4 {
            if self.cursor.is_at_end() || !is_hex_digit(self.cursor.current_char()) {
                return Err(LexError::InvalidUnicodeEscape);
            }
            self.cursor.advance();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{lex, lex_kinds, lex_one};
    use crate::{Lexer, LexError, TokenKind};
    use gqlc_util::{Handler, Source};

    fn errors(body: &str) -> Vec<String> {
        let source = Source::new("test", body);
        let mut handler = Handler::new();
        let _: Vec<_> = Lexer::new(&source, &mut handler).collect();
        handler.take_diagnostics().into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_valid_strings() {
        for input in [
            r#""""#,
            r#""simple""#,
            r#"" white space ""#,
            r#""quote \"""#,
            r#""escaped \n\r\b\t\f""#,
            r#""slashes \\ \/""#,
            r#""unicode ሴ噸邫췯""#,
            "\"tab\tinside\"",
            "\"non-ascii é 漢字 😀\"",
        ] {
            let token = lex_one(input);
            assert_eq!(token.kind, TokenKind::String, "input {:?}", input);
            assert_eq!(token.value, input);
        }
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(lex_one("\"").kind, TokenKind::Invalid);
        assert_eq!(lex_one("\"no end").kind, TokenKind::Invalid);
        assert_eq!(errors("\"no end"), vec![LexError::UnterminatedString.to_string()]);
        assert_eq!(errors("\"ends in escape\\"), vec![LexError::UnterminatedString.to_string()]);
    }

    #[test]
    fn test_line_terminator_not_consumed() {
        let tokens = lex("\"multi\nline\"");
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].kind, TokenKind::Name);
        assert_eq!(tokens[1].position.line, 2);
        assert_eq!(errors("\"a\rb\""), vec![
            LexError::LineTerminatorInString.to_string(),
            LexError::UnterminatedString.to_string(),
        ]);
    }

    #[test]
    fn test_control_character() {
        assert_eq!(
            errors("\"bad \u{0007} bell\"")[0],
            LexError::ControlCharacter('\u{0007}').to_string()
        );
        assert_eq!(
            errors("\"null \u{0000}\"")[0],
            LexError::ControlCharacter('\u{0000}').to_string()
        );
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(errors(r#""bad \z esc""#)[0], LexError::InvalidEscape('z').to_string());
        assert_eq!(errors(r#""bad \x esc""#)[0], LexError::InvalidEscape('x').to_string());
        for input in [r#""\u000g""#, r#""\u000""#, r#""bad \u1 esc""#, r#""bad \uXXXF esc""#, "\"\\u"] {
            assert_eq!(
                errors(input)[0],
                LexError::InvalidUnicodeEscape.to_string(),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_escape_offender_starts_next_token() {
        let kinds = lex_kinds(r#""\x""#);
        assert_eq!(kinds[0], (TokenKind::Invalid, String::new()));
        assert_eq!(kinds[1], (TokenKind::Name, "x".to_string()));
    }
}
