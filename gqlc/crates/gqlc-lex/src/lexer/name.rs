//! Name lexing.

use crate::chars::is_name_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a name: `[_A-Za-z][_A-Za-z0-9]*`.
    ///
    /// The dispatcher has already checked the first character.
    pub(super) fn lex_name(&mut self) -> Token {
        self.cursor.eat_while(is_name_continue);
        self.make_token(TokenKind::Name)
    }
}
