//! Ignored tokens.
//!
//! White space, insignificant commas, the byte order mark and line
//! terminators separate tokens but never produce one.

use crate::chars::is_ignored;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a run of ignored characters.
    ///
    /// Line counting happens in the cursor, so `\r\n` advances the line once.
    /// Comments are not ignored here; they are tokens of their own.
    pub(super) fn skip_ignored(&mut self) {
        self.cursor.eat_while(is_ignored);
    }
}
