//! Error types for the gqlc-lex crate.
//!
//! Lexical violations never surface as `Err`: the lexer turns each
//! [`LexError`] into a diagnostic plus an `Invalid` token. [`ConfigError`] is
//! the only error a caller handles directly.

use std::path::PathBuf;

use gqlc_util::diagnostic::{
    DiagnosticCode, E_LEXER_CONTROL_CHAR, E_LEXER_INCOMPLETE_SPREAD, E_LEXER_INVALID_ESCAPE,
    E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_BLOCK_STRING,
    E_LEXER_UNTERMINATED_STRING,
};
use thiserror::Error;

/// A lexical violation.
///
/// # Example
///
/// ```
/// use gqlc_lex::error::LexError;
///
/// let err = LexError::InvalidNumberSuffix('x');
/// assert_eq!(err.code().as_str(), "E0103");
/// assert_eq!(err.to_string(), "Invalid number, expected digit but got: \"x\".");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LexError {
    /// Character that cannot start any token
    #[error("Unexpected character: {0:?}.")]
    UnexpectedCharacter(char),

    /// `.` or `..` without the rest of `...`
    #[error("Unexpected \".\", a spread must be written as \"...\".")]
    IncompleteSpread,

    /// `-` not followed by a digit
    #[error("Invalid number, expected digit after \"-\".")]
    MissingIntegerDigit,

    /// `0` followed by another digit
    #[error("Invalid number, unexpected digit after 0.")]
    LeadingZero,

    /// `.` not followed by a digit
    #[error("Invalid number, expected digit after \".\".")]
    MissingFractionDigit,

    /// `e`/`E` (and optional sign) not followed by a digit
    #[error("Invalid number, expected digit in exponent.")]
    MissingExponentDigit,

    /// Literal directly followed by a name character or `.`
    #[error("Invalid number, expected digit but got: \"{0}\".")]
    InvalidNumberSuffix(char),

    /// End of input inside a string
    #[error("Unterminated string.")]
    UnterminatedString,

    /// Raw line terminator inside a string
    #[error("Unterminated string, strings cannot span lines.")]
    LineTerminatorInString,

    /// `\` followed by an unknown escape character
    #[error("Invalid character escape sequence: \"\\{0}\".")]
    InvalidEscape(char),

    /// `\u` not followed by four hex digits
    #[error("Invalid Unicode escape sequence, expected four hex digits after \"\\u\".")]
    InvalidUnicodeEscape,

    /// Raw control character inside a string
    #[error("Invalid character within string: U+{:04X}.", codepoint(.0))]
    ControlCharacter(char),

    /// End of input inside a block string
    #[error("Unterminated block string.")]
    UnterminatedBlockString,
}

fn codepoint(c: &char) -> u32 {
    u32::from(*c)
}

impl LexError {
    /// The diagnostic code reported for this violation.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => E_LEXER_UNEXPECTED_CHAR,
            LexError::IncompleteSpread => E_LEXER_INCOMPLETE_SPREAD,
            LexError::MissingIntegerDigit
            | LexError::LeadingZero
            | LexError::MissingFractionDigit
            | LexError::MissingExponentDigit
            | LexError::InvalidNumberSuffix(_) => E_LEXER_INVALID_NUMBER,
            LexError::UnterminatedString | LexError::LineTerminatorInString => {
                E_LEXER_UNTERMINATED_STRING
            },
            LexError::InvalidEscape(_) | LexError::InvalidUnicodeEscape => E_LEXER_INVALID_ESCAPE,
            LexError::ControlCharacter(_) => E_LEXER_CONTROL_CHAR,
            LexError::UnterminatedBlockString => E_LEXER_UNTERMINATED_BLOCK_STRING,
        }
    }

    /// A short suggestion attached to the diagnostic, if any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::IncompleteSpread => Some("write `...` to spread a fragment"),
            LexError::LeadingZero => Some("remove the leading zero"),
            LexError::LineTerminatorInString => {
                Some("use a block string (\"\"\"...\"\"\") for text spanning lines")
            },
            LexError::InvalidUnicodeEscape => Some("write Unicode escapes as `\\uXXXX`"),
            _ => None,
        }
    }
}

/// Error loading a [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
