//! Comment lexing.

use crate::chars::is_disallowed_control;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `#` comment.
    ///
    /// Runs up to, not including, the next line terminator or other control
    /// character (tab excepted). Never fails.
    pub(super) fn lex_comment(&mut self) -> Token {
        self.cursor.advance(); // '#'
        self.cursor.eat_while(|c| !is_disallowed_control(c));
        self.make_token(TokenKind::Comment)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{lex, lex_kinds};
    use crate::{Position, TokenKind};

    #[test]
    fn test_comment_then_name() {
        let tokens = lex("# hello\nquery");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].value, "# hello");
        assert_eq!(tokens[1].value, "query");
        assert_eq!(tokens[1].position, Position::new(2, 1, 8));
    }

    #[test]
    fn test_comment_forms() {
        assert_eq!(lex_kinds("#"), vec![(TokenKind::Comment, "#".to_string())]);
        assert_eq!(
            lex_kinds("#\tcomment \"quoted\" {braces}"),
            vec![(TokenKind::Comment, "#\tcomment \"quoted\" {braces}".to_string())]
        );
        assert_eq!(
            lex_kinds("#a\r\n#b"),
            vec![
                (TokenKind::Comment, "#a".to_string()),
                (TokenKind::Comment, "#b".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_stops_at_control_character() {
        let kinds = lex_kinds("# stop\u{0007}here");
        assert_eq!(kinds[0], (TokenKind::Comment, "# stop".to_string()));
        assert_eq!(kinds[1].0, TokenKind::Invalid);
        assert_eq!(kinds[2], (TokenKind::Name, "here".to_string()));
    }

    #[test]
    fn test_trailing_comment() {
        let kinds = lex_kinds("{ a } # done");
        assert_eq!(kinds.last(), Some(&(TokenKind::Comment, "# done".to_string())));
    }
}
