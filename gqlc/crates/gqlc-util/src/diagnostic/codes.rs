//! Diagnostic codes for categorizing lexical errors.
//!
//! Every lexical violation maps onto one stable code so tooling can match on
//! the category without parsing the message text.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0103;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 103);
//! assert_eq!(code.as_str(), "E0103");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`, e.g. `E0101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 12);
    /// assert_eq!(code.as_str(), "W0012");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E0101-E0199)
    // =========================================================================

    /// E0101: Character that cannot start any token
    pub const E0101: Self = Self::new("E", 101);
    /// E0102: `.` or `..` not followed by enough dots to form `...`
    pub const E0102: Self = Self::new("E", 102);
    /// E0103: Malformed Int or Float literal
    pub const E0103: Self = Self::new("E", 103);
    /// E0104: String not closed before end of line or input
    pub const E0104: Self = Self::new("E", 104);
    /// E0105: Invalid escape sequence in a string
    pub const E0105: Self = Self::new("E", 105);
    /// E0106: Control character inside a string
    pub const E0106: Self = Self::new("E", 106);
    /// E0107: Block string not closed before end of input
    pub const E0107: Self = Self::new("E", 107);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E0101;
pub const E_LEXER_INCOMPLETE_SPREAD: DiagnosticCode = DiagnosticCode::E0102;
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::E0103;
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::E0104;
pub const E_LEXER_INVALID_ESCAPE: DiagnosticCode = DiagnosticCode::E0105;
pub const E_LEXER_CONTROL_CHAR: DiagnosticCode = DiagnosticCode::E0106;
pub const E_LEXER_UNTERMINATED_BLOCK_STRING: DiagnosticCode = DiagnosticCode::E0107;
