//! Core error types for gqlc-util crate

use thiserror::Error;

/// Error type for source document lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid byte range
    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },

    /// Range out of bounds for the document body
    #[error("Range out of bounds: source has {len} bytes, range is {start}..{end}")]
    OutOfBounds { len: usize, start: usize, end: usize },

    /// Range splits a multi-byte character
    #[error("Range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },

}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
