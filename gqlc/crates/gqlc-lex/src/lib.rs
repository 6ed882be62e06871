//! gqlc-lex - Lexical Analyzer for GraphQL
//!
//! This crate turns GraphQL source text into a stream of positioned tokens
//! for a downstream parser. It validates the lexical grammar but does not
//! interpret token contents: escapes stay escaped, numbers stay text, and
//! block strings are not dedented.
//!
//! # Example Usage
//!
//! ```
//! use gqlc_util::{Handler, Source};
//! use gqlc_lex::{Lexer, TokenKind};
//!
//! let source = Source::new("hero.graphql", "query Hero($id: ID!) { hero(id: $id) { name } }");
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(&source, &mut handler);
//!
//! let first = lexer.next_token();
//! assert_eq!(first.kind, TokenKind::Name);
//! assert_eq!(first.value, "query");
//!
//! // Or iterate: the iterator stops before EOF
//! let rest: Vec<_> = lexer.collect();
//! assert_eq!(rest.len(), 20);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, positions and tokens
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes of the lexical grammar
//! - [`config`] - Lexer configuration
//! - [`error`] - Lexical and configuration errors
//!
//! # Token Categories
//!
//! ## Names
//!
//! `[_A-Za-z][_A-Za-z0-9]*`. Keywords such as `query` or `true` are plain
//! names; GraphQL keywords are contextual.
//!
//! ## Literals
//!
//! - **Int**: `0`, `-12`
//! - **Float**: `1.5`, `1e10`, `-2.5E-3`
//! - **String**: `"hello\n"` (value keeps the quotes and escapes)
//! - **BlockString**: `"""multi-line"""`
//!
//! ## Punctuators
//!
//! `! $ & ( ) ... : = @ [ ] { } |`
//!
//! ## Comments
//!
//! `# to end of line`, emitted as tokens unless disabled in [`LexerConfig`].
//!
//! ## Ignored
//!
//! White space, commas, the byte order mark and line terminators.
//!
//! # Errors
//!
//! Malformed input yields an `Invalid` token and a coded diagnostic in the
//! [`Handler`](gqlc_util::Handler). Every `Invalid` consumes at least one
//! character, so a caller that keeps pulling tokens always reaches `Eof`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError};
pub use lexer::Lexer;
pub use token::{Position, Token, TokenKind};

use gqlc_util::{Handler, Source};

/// Lexes a whole document with the default configuration.
///
/// The returned tokens end with the `Eof` token. Diagnostics for any
/// `Invalid` tokens are in the returned handler.
///
/// # Example
///
/// ```
/// use gqlc_util::Source;
/// use gqlc_lex::{tokenize, TokenKind};
///
/// let (tokens, handler) = tokenize(&Source::new("q", "{ a }"));
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::BraceL, TokenKind::Name, TokenKind::BraceR, TokenKind::Eof]);
/// assert!(!handler.has_errors());
/// ```
pub fn tokenize(source: &Source) -> (Vec<Token>, Handler) {
    let mut handler = Handler::new();
    let mut tokens = Vec::new();
    {
        let mut lexer = Lexer::new(source, &mut handler);
        loop {
            let token = lexer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
    }
    (tokens, handler)
}
