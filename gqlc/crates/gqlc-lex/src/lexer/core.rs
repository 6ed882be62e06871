//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatcher and the
//! helpers every scanner uses to finish a token.

use gqlc_util::diagnostic::{DiagnosticBuilder, SourceSnippet};
use gqlc_util::{Handler, Source, Span};
use tracing::{debug, trace};

use crate::chars::{is_digit, is_name_start};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Position, Token, TokenKind};

/// Lexer for GraphQL documents.
///
/// The lexer turns a [`Source`] into a stream of [`Token`]s, one per call to
/// [`Lexer::next_token`]. Malformed input becomes an `Invalid` token plus a
/// diagnostic in the caller's [`Handler`]; scanning can always continue.
///
/// # Example
///
/// ```
/// use gqlc_util::{Handler, Source};
/// use gqlc_lex::{Lexer, TokenKind};
///
/// let source = Source::new("query.graphql", "{ hero }");
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new(&source, &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::BraceL);
/// let hero = lexer.next_token();
/// assert_eq!((hero.kind, hero.value.as_str()), (TokenKind::Name, "hero"));
/// assert_eq!(hero.position.start, 2);
/// ```
pub struct Lexer<'a> {
    /// The document being lexed.
    source: &'a Source,

    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Behavior switches.
    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a Source, handler: &'a mut Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a new lexer with an explicit configuration.
    pub fn with_config(source: &'a Source, handler: &'a mut Handler, config: LexerConfig) -> Self {
        Self {
            source,
            cursor: Cursor::new(source.body()),
            handler,
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips ignored tokens, then dispatches on the first significant
    /// character. At the end of input this returns an `Eof` token, and keeps
    /// returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_ignored();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            let token = self.scan_token();
            if token.kind == TokenKind::Comment && !self.config.emit_comments {
                continue;
            }

            trace!(
                kind = %token.kind,
                line = token.position.line,
                column = token.position.column,
                start = token.position.start,
                "token"
            );
            return token;
        }
    }

    /// Dispatches on the current character.
    fn scan_token(&mut self) -> Token {
        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        match self.cursor.current_char() {
            '.' => self.lex_spread(),
            '"' if self.cursor.starts_with("\"\"\"") => self.lex_block_string(),
            '"' => self.lex_string(),
            '#' => self.lex_comment(),
            c if is_name_start(c) => self.lex_name(),
            c if c == '-' || is_digit(c) => self.lex_number(),
            c => match TokenKind::from_punctuator(c) {
                Some(kind) => self.lex_punctuator(kind),
                None => {
                    self.cursor.advance();
                    self.report_error(LexError::UnexpectedCharacter(c))
                },
            },
        }
    }

    /// Finishes the current token as `kind`.
    ///
    /// The value is the text consumed since the token start, except for
    /// punctuators and `Eof`, which carry none.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        let value = if kind.is_punctuator() || kind == TokenKind::Eof {
            ""
        } else {
            self.cursor.slice_from(self.token_start)
        };
        Token::new(kind, value, self.token_position())
    }

    /// Reports a lexical error and finishes the current token as `Invalid`.
    ///
    /// The diagnostic spans everything consumed since the token start.
    pub(super) fn report_error(&mut self, err: LexError) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        let message = err.to_string();

        let mut builder = DiagnosticBuilder::error(message.as_str())
            .code(err.code())
            .span(span)
            .origin(self.source.name());
        if let Some(snippet) = SourceSnippet::from_span(self.source, span) {
            builder = builder.snippet(snippet);
        }
        if let Some(help) = err.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);

        debug!(
            code = %err.code(),
            line = span.line,
            column = span.column,
            "{}",
            message
        );

        let value = if self.config.invalid_messages {
            message
        } else {
            String::new()
        };
        Token::new(TokenKind::Invalid, value, self.token_position())
    }

    fn token_position(&self) -> Position {
        Position::new(self.token_start_line, self.token_start_column, self.token_start)
    }

    /// Returns the current line number (1-based).
    ///
    /// After a token is returned this is the line the next token starts
    /// scanning from.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset where the most recent token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the document being lexed.
    pub fn source(&self) -> &'a Source {
        self.source
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

/// Yields every token before `Eof`, then `None` forever.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
