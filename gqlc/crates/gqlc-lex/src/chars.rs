//! Character classes of the GraphQL lexical grammar.
//!
//! Every predicate here works on a single `char` and is ASCII-only where the
//! grammar is ASCII-only: GraphQL names are `[_A-Za-z][_A-Za-z0-9]*`, so
//! `é` is not a name character even though it is alphabetic.

/// Byte order mark, ignored anywhere outside strings.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character can start a name (`NameStart`).
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_name_start;
///
/// assert!(is_name_start('a'));
/// assert!(is_name_start('_'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('α'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue a name (`NameContinue`).
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_name_continue;
///
/// assert!(is_name_continue('Z'));
/// assert!(is_name_continue('9'));
/// assert!(!is_name_continue('-'));
/// ```
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal `Digit`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a hexadecimal digit, as used by `\uXXXX`.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_hex_digit;
///
/// assert!(is_hex_digit('f'));
/// assert!(is_hex_digit('A'));
/// assert!(!is_hex_digit('g'));
/// ```
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a character is a `LineTerminator` (`\n` or `\r`).
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character is insignificant between tokens.
///
/// Covers white space, the insignificant comma, the BOM and line terminators.
///
/// # Example
///
/// ```
/// use gqlc_lex::chars::is_ignored;
///
/// assert!(is_ignored(','));
/// assert!(is_ignored('\u{FEFF}'));
/// assert!(is_ignored('\r'));
/// assert!(!is_ignored('#'));
/// ```
#[inline]
pub fn is_ignored(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',' | BOM) || is_line_terminator(c)
}

/// Checks if a character is a control character that may not appear raw in
/// a string or comment: anything below U+0020 other than tab.
///
/// Line terminators are included; callers that allow them check first.
#[inline]
pub fn is_disallowed_control(c: char) -> bool {
    c < '\u{0020}' && c != '\t'
}

/// Checks if a character is one of the single-character escapes allowed
/// after `\` in a string.
#[inline]
pub fn is_simple_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_classes_are_ascii_only() {
        for c in ['é', 'ß', 'α', '٣'] {
            assert!(!is_name_start(c));
            assert!(!is_name_continue(c));
        }
    }

    #[test]
    fn test_digits_are_not_name_start() {
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_name_start(c));
            assert!(is_name_continue(c));
        }
    }

    #[test]
    fn test_ignored_set() {
        assert!(" \t,\n\r\u{FEFF}".chars().all(is_ignored));
        assert!(!is_ignored('\u{00A0}'));
        assert!(!is_ignored('\u{000B}'));
    }

    #[test]
    fn test_disallowed_control() {
        assert!(is_disallowed_control('\u{0000}'));
        assert!(is_disallowed_control('\u{001F}'));
        assert!(is_disallowed_control('\n'));
        assert!(!is_disallowed_control('\t'));
        assert!(!is_disallowed_control(' '));
    }

    #[test]
    fn test_simple_escapes() {
        assert!("\"\\/bfnrt".chars().all(is_simple_escape));
        assert!(!is_simple_escape('u'));
        assert!(!is_simple_escape('x'));
    }
}
