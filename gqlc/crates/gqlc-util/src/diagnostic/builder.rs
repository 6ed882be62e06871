//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::{Source, Span};

/// A source line excerpt for display in diagnostics
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("{ hero(id: 01) }", 1, 12, 14, Some("leading zero"));
/// assert!(snippet.format().contains("^^ leading zero"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based)
    /// * `label` - Optional label to display under the highlighted range
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for `span` from the line of `source` it starts on
    ///
    /// A span running past the end of its first line is highlighted up to the
    /// line end. Returns `None` if the span's line does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::{Source, Span};
    /// use gqlc_util::diagnostic::SourceSnippet;
    ///
    /// let source = Source::new("q.graphql", "query {\n  name(x: 1.)\n}");
    /// let snippet = SourceSnippet::from_span(&source, Span::new(18, 20, 2, 11)).unwrap();
    /// assert_eq!(snippet.line, "  name(x: 1.)");
    /// assert_eq!((snippet.start_column, snippet.end_column), (11, 13));
    /// ```
    pub fn from_span(source: &Source, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let line = source.line_at(line_number)?;
        let line_start = source.line_start(line_number - 1)?;
        let line_end = line_start + line.len();

        let start = span.start.min(line_end);
        let end = span.end.min(line_end).max(start);
        let highlighted = source
            .extract_range(start, end)
            .map(|text| text.chars().count())
            .unwrap_or(0);
        let start_column = span.column as usize;

        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: start_column + highlighted,
            label: None,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a caret (^) underline beneath the
    /// highlighted columns.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gqlc_util::{Span, Handler};
/// use gqlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E0104)
///     .span(Span::new(0, 4, 1, 1))
///     .origin("query.graphql")
///     .emit(&mut handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    origin: Option<String>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            origin: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the name of the source the diagnostic refers to
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            origin: self.origin,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
