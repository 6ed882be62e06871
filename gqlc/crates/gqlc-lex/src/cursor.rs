//! Character cursor for traversing GraphQL source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through a document's characters. It handles UTF-8
//! correctly and tracks line/column information for token positions.
//!
//! Line counting follows the GraphQL line terminator rules: `\n` and a lone
//! `\r` each start a new line, and `\r\n` counts as a single terminator.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use gqlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("{ hero }");
///
/// assert_eq!(cursor.current_char(), '{');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source. A literal
    /// NUL in the input is indistinguishable from the sentinel, so callers
    /// that care check [`Cursor::is_at_end`] first.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// assert_eq!(Cursor::new("").current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns true if the remaining input starts with `prefix`.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\"\"\"block\"\"\"");
    /// assert!(cursor.starts_with("\"\"\""));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let c = match self.remaining().chars().next() {
            Some(c) => c,
            None => return,
        };
        self.position += c.len_utf8();

        match c {
            '\n' => self.new_line(),
            // `\r\n` ends one line; the `\n` does the counting
            '\r' if self.current_byte() != Some(b'\n') => self.new_line(),
            _ => self.column += 1,
        }
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Advances the cursor by the given number of characters.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("...name");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'n');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Stops at the end of input. Returns the number of characters consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the current character as an ASCII byte, or None if not ASCII
    /// or at end.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 128 => Some(b),
            _ => None,
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("e+");
    /// assert!(cursor.match_char('e'));
    /// assert!(!cursor.match_char('e'));
    /// assert_eq!(cursor.current_char(), '+');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\r\nb");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use gqlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("query Q");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "query");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
