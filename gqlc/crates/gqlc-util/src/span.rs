//! Span module - byte ranges into a [`Source`](crate::Source) body.
//!
//! A [`Span`] pairs a half-open byte range with the human-readable line and
//! column of its first character, so diagnostics can point at source text
//! without re-scanning the body.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//! assert!(!span.is_empty());
//! ```

/// Source location span
///
/// A `Span` represents a range in source text, identified by:
/// - Byte offsets (start inclusive, end exclusive)
/// - Line and column of `start` (both 1-based, column counted in codepoints)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
