//! Diagnostic module - Error reporting infrastructure.
//!
//! Phases never abort on bad input. They build a [`Diagnostic`], hand it to
//! the [`Handler`] they were given, and keep going, so a single run reports
//! every problem in a document.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::{Handler, Span};
//! use gqlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '?'.")
//!     .code(DiagnosticCode::E0101)
//!     .span(Span::new(6, 7, 1, 7))
//!     .origin("query.graphql")
//!     .emit(&mut handler);
//!
//! let diag = &handler.diagnostics()[0];
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E0101]: Unexpected character '?'.\n --> query.graphql:1:7"
//! );
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use codes::{
    E_LEXER_CONTROL_CHAR, E_LEXER_INCOMPLETE_SPREAD, E_LEXER_INVALID_ESCAPE,
    E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_BLOCK_STRING,
    E_LEXER_UNTERMINATED_STRING,
};

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Help), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A problem that makes the document invalid
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Name of the source the span points into
    pub origin: Option<String>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            origin: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Renders as `level[code]: message` followed by a ` --> origin:line:column`
/// location line, then any snippets, notes and helps.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }

        if self.span != Span::DUMMY {
            let origin = self.origin.as_deref().unwrap_or("<input>");
            write!(f, "\n --> {}:{}:{}", origin, self.span.line, self.span.column)?;
        }

        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = {}: {}", Level::Note, note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = {}: {}", Level::Help, help)?;
        }

        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use gqlc_util::{Diagnostic, Handler, Span};
///
/// let mut handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unterminated string.", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.take_diagnostics().len(), 1);
/// assert!(!handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-built diagnostic
    ///
    /// Never aborts: every diagnostic is kept, whatever its level.
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return all collected diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_diagnostic_builders() {
        let diag = Diagnostic::error("bad", Span::DUMMY)
            .with_code(DiagnosticCode::E0105)
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E0105));
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_display_without_location() {
        let diag = Diagnostic::error("odd", Span::DUMMY);
        assert_eq!(diag.to_string(), "error: odd");
    }

    #[test]
    fn test_display_defaults_origin() {
        let diag = Diagnostic::error("Unterminated string.", Span::new(4, 9, 2, 3))
            .with_code(DiagnosticCode::E0104);
        assert_eq!(
            diag.to_string(),
            "error[E0104]: Unterminated string.\n --> <input>:2:3"
        );
    }

    #[test]
    fn test_display_includes_snippet_and_help() {
        let diag = Diagnostic::error("Invalid number.", Span::new(0, 2, 1, 1))
            .with_snippet(SourceSnippet::new("01", 1, 1, 3, None::<String>))
            .with_help("remove the leading zero");
        let text = diag.to_string();
        assert!(text.contains("  1 | 01"));
        assert!(text.contains("^^"));
        assert!(text.ends_with("  = help: remove the leading zero"));
    }

    #[test]
    fn test_handler_counts() {
        let mut handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::new(Level::Note, "n", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_take_and_clear() {
        let mut handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("a", Span::DUMMY));
        let taken = handler.take_diagnostics();
        assert_eq!(taken[0].message, "a");
        assert!(handler.diagnostics().is_empty());

        handler.emit_diagnostic(Diagnostic::error("b", Span::DUMMY));
        handler.clear();
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_keeps_every_error() {
        let mut handler = Handler::default();
        for i in 0..100 {
            handler.emit_diagnostic(Diagnostic::error(format!("e{}", i), Span::DUMMY));
        }
        assert_eq!(handler.error_count(), 100);
        assert_eq!(handler.diagnostics()[99].message, "e99");
    }
}
