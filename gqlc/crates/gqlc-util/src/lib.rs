//! gqlc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared types for every phase of the gqlc GraphQL front end:
//!
//! - [`Source`]: a named, immutable GraphQL document with a precomputed line
//!   table for offset-to-position mapping.
//! - [`Span`]: a byte range plus the line/column of its first character.
//! - [`diagnostic`]: severity levels, coded diagnostics, source snippets and
//!   the [`Handler`] that collects them.
//!
//! LINE TERMINATORS:
//! -----------------
//! GraphQL recognizes `\n`, `\r` and `\r\n` as line terminators. Every type
//! here that reasons about lines counts `\r\n` as one terminator, matching the
//! lexer's position tracking.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::{Handler, Source, Span};
//! use gqlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
//!
//! let source = Source::new("ops.graphql", "{\r\n  user(id: 00)\r\n}");
//! let span = Span::new(14, 16, 2, 12);
//!
//! let mut handler = Handler::new();
//! let mut builder = DiagnosticBuilder::error("Invalid number, unexpected digit after 0: \"0\".")
//!     .code(DiagnosticCode::E0103)
//!     .span(span)
//!     .origin(source.name());
//! if let Some(snippet) = SourceSnippet::from_span(&source, span) {
//!     builder = builder.snippet(snippet);
//! }
//! builder.emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].snippets[0].line, "  user(id: 00)");
//! ```

pub mod diagnostic;
pub mod error;
pub mod source;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use source::Source;
pub use span::Span;
