//! GraphQL source documents.
//!
//! A [`Source`] is the immutable input of every later phase: the document
//! body plus the name it is reported under. Line start offsets are computed
//! once at construction so diagnostics can pull out the offending line for
//! snippets.
//!
//! Line terminators follow the GraphQL definition: `\n`, `\r`, and `\r\n`
//! each end exactly one line.

use std::fmt;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A named, immutable GraphQL document
///
/// Cloning a `Source` is cheap: the body and line table are shared.
///
/// # Examples
///
/// ```
/// use gqlc_util::Source;
///
/// let source = Source::new("schema.graphqls", "type Query {\n  me: User\n}");
/// assert_eq!(source.name(), "schema.graphqls");
/// assert_eq!(source.line_count(), 3);
/// assert_eq!(source.line_at(2), Some("  me: User"));
/// ```
#[derive(Clone)]
pub struct Source {
    /// Name used when reporting diagnostics (path or display name)
    name: String,
    /// Document text
    body: Arc<str>,
    /// Byte offset where each line starts
    line_starts: Arc<[usize]>,
}

impl Source {
    /// Create a new source document
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier used in diagnostics
    /// * `body` - The GraphQL text
    pub fn new(name: impl Into<String>, body: impl Into<Arc<str>>) -> Self {
        let body = body.into();
        let line_starts = Self::line_starts(&body);
        Self {
            name: name.into(),
            body,
            line_starts,
        }
    }

    /// Compute line start offsets, treating `\r\n` as a single terminator
    fn line_starts(body: &str) -> Arc<[usize]> {
        let bytes = body.as_bytes();
        let mut line_starts = vec![0];

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                },
                _ => {},
            }
            i += 1;
        }

        line_starts.into()
    }

    /// Get the source name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the document text
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Length of the body in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get the total number of lines
    ///
    /// An empty body still has one (empty) line.
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::Source;
    ///
    /// assert_eq!(Source::new("a", "").line_count(), 1);
    /// assert_eq!(Source::new("b", "x\r\ny\rz\n").line_count(), 4);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.body.len());

        Some(self.body[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring of the body with bounds checking
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset (inclusive)
    /// * `end` - End byte offset (exclusive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::Source;
    ///
    /// let source = Source::new("q", "{ hero }");
    /// assert_eq!(source.extract_range(2, 6).unwrap(), "hero");
    /// assert!(source.extract_range(6, 2).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidRange { start, end });
        }
        if end > self.body.len() {
            return Err(SourceError::OutOfBounds {
                len: self.body.len(),
                start,
                end,
            });
        }
        if !self.body.is_char_boundary(start) || !self.body.is_char_boundary(end) {
            return Err(SourceError::NotCharBoundary { start, end });
        }

        Ok(&self.body[start..end])
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("name", &self.name)
            .field("len", &self.body.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    static_assertions::assert_impl_all!(Source: Send, Sync, Clone);

    fn count_terminators(body: &str) -> usize {
        body.replace("\r\n", "\n").matches(['\n', '\r']).count()
    }

    #[test]
    fn test_line_starts_normalize_crlf() {
        let source = Source::new("s", "a\r\nb\rc\nd");
        assert_eq!(source.line_count(), 4);
        assert_eq!(source.line_start(1), Some(3));
        assert_eq!(source.line_start(2), Some(5));
        assert_eq!(source.line_start(3), Some(7));
    }

    #[test]
    fn test_line_at_trims_terminators() {
        let source = Source::new("s", "first\r\nsecond\rthird");
        assert_eq!(source.line_at(1), Some("first"));
        assert_eq!(source.line_at(2), Some("second"));
        assert_eq!(source.line_at(3), Some("third"));
        assert_eq!(source.line_at(0), None);
        assert_eq!(source.line_at(4), None);
    }

    #[test]
    fn test_extract_range_rejects_split_codepoint() {
        let source = Source::new("s", "\"é\"");
        assert!(matches!(
            source.extract_range(1, 2),
            Err(SourceError::NotCharBoundary { .. })
        ));
        assert_eq!(source.extract_range(1, 3).unwrap(), "é");
    }

    #[test]
    fn test_debug_hides_body() {
        let source = Source::new("secret.graphql", "query { password }");
        let debug = format!("{:?}", source);
        assert!(debug.contains("secret.graphql"));
        assert!(!debug.contains("password"));
    }

    #[quickcheck]
    fn prop_line_count_matches_terminators(body: String) -> bool {
        Source::new("prop", body.as_str()).line_count() == 1 + count_terminators(&body)
    }

    #[quickcheck]
    fn prop_line_starts_are_sorted_and_in_bounds(body: String) -> bool {
        let source = Source::new("prop", body.as_str());
        let starts: Vec<usize> = (0..source.line_count())
            .filter_map(|line| source.line_start(line))
            .collect();
        starts.windows(2).all(|w| w[0] < w[1]) && starts.iter().all(|&s| s <= body.len())
    }
}
