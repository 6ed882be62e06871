//! Token definitions for the GraphQL lexer.
//!
//! A [`Token`] is a plain value: its kind, an owned copy of the source text
//! it covers, and the [`Position`] of its first character. Tokens never
//! borrow from the lexer or the source.

use std::fmt;

/// Classification of a lexical token.
///
/// # Example
///
/// ```
/// use gqlc_lex::TokenKind;
///
/// assert_eq!(TokenKind::Spread.to_string(), "...");
/// assert_eq!(TokenKind::BlockString.to_string(), "BlockString");
/// assert!(TokenKind::Pipe.is_punctuator());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Repeats on every call after the first.
    Eof,
    /// Malformed input. Always covers at least one character.
    Invalid,
    /// `[_A-Za-z][_A-Za-z0-9]*`
    Name,
    /// Integer literal such as `-12`
    Int,
    /// Float literal such as `1.5e-3`
    Float,
    /// `"..."` string, quotes included
    String,
    /// `"""..."""` block string, quotes included
    BlockString,
    /// `#` comment up to the end of the line
    Comment,

    // Punctuators
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `&`
    Amp,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `|`
    Pipe,
}

impl TokenKind {
    /// Returns true for the fixed-text punctuator kinds.
    pub fn is_punctuator(self) -> bool {
        self.punctuator_text().is_some()
    }

    /// Returns the source text of a punctuator kind.
    pub fn punctuator_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::Amp => "&",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::BraceR => "}",
            TokenKind::Pipe => "|",
            _ => return None,
        };
        Some(text)
    }

    /// Maps a single punctuator character to its kind.
    ///
    /// `.` has no single-character kind; it only appears in `...`.
    pub fn from_punctuator(c: char) -> Option<TokenKind> {
        let kind = match c {
            '!' => TokenKind::Bang,
            '$' => TokenKind::Dollar,
            '&' => TokenKind::Amp,
            '(' => TokenKind::ParenL,
            ')' => TokenKind::ParenR,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            '@' => TokenKind::At,
            '[' => TokenKind::BracketL,
            ']' => TokenKind::BracketR,
            '{' => TokenKind::BraceL,
            '}' => TokenKind::BraceR,
            '|' => TokenKind::Pipe,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Invalid => "Invalid",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
            punctuator => punctuator.punctuator_text().unwrap_or_default(),
        };
        f.write_str(name)
    }
}

/// Location of a token's first character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Byte offset into the source body (0-based)
    pub start: usize,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32, start: usize) -> Self {
        Self {
            line,
            column,
            start,
        }
    }
}

/// A lexical token.
///
/// # Example
///
/// ```
/// use gqlc_lex::{Position, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Name, "hero", Position::new(1, 3, 2));
/// assert_eq!(token.to_string(), "Name \"hero\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Exact source text; empty for punctuators and EOF
    pub value: String,
    /// Where the token starts
    pub position: Position,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token marks malformed input.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    /// The text this token covers in the source.
    ///
    /// Punctuators carry no value, so their fixed text is returned instead.
    pub fn text(&self) -> &str {
        self.kind.punctuator_text().unwrap_or(&self.value)
    }
}

/// Debug rendering used in test output and logs: the kind, then the quoted
/// value when there is one.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.value)
        }
    }
}
