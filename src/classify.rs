//! Code-point predicates used by the repair parser.
//!
//! These are deliberately plain `fn(char) -> bool` so the string parser can
//! pick a quote-equivalence class at entry and carry it around as a function
//! pointer.

#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Characters that terminate a number or keyword token.
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ',' | ':' | '[' | ']' | '/' | '{' | '}' | '(' | ')' | '\n' | '+'
    )
}

/// The stricter delimiter set used while recovering an unterminated string.
#[inline]
pub(crate) fn is_unquoted_string_delimiter(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '/' | '{' | '}' | '\n' | '+')
}

/// Does this character begin a JSON value (after repair)?
#[inline]
pub(crate) fn starts_value(c: char) -> bool {
    is_quote(c)
        || matches!(c, '[' | '{' | '-' | '_' | '$')
        || c.is_ascii_alphanumeric()
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

#[inline]
pub(crate) fn is_double_quote(c: char) -> bool {
    c == '"'
}

#[inline]
pub(crate) fn is_double_quote_like(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

#[inline]
pub(crate) fn is_single_quote(c: char) -> bool {
    c == '\''
}

#[inline]
pub(crate) fn is_single_quote_like(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{60}' | '\u{B4}')
}

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Whitespace minus LF, for the look-ahead after a speculative string close.
#[inline]
pub(crate) fn is_whitespace_except_newline(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Unicode space look-alikes that get normalized to an ASCII space.
#[inline]
pub(crate) fn is_special_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

#[inline]
pub(crate) fn is_control_character(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\u{8}' | '\u{C}')
}

/// JSON string bodies accept everything from U+0020 upwards.
#[inline]
pub(crate) fn is_valid_string_character(c: char) -> bool {
    c >= '\u{20}'
}

#[inline]
pub(crate) fn is_function_name_char_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_function_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Characters allowed to extend a detected URL inside string recovery.
#[inline]
pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '-'
                | '.'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
        )
}

/// `true` when `segment` is exactly the scheme-and-slashes prefix of a URL.
#[inline]
pub(crate) fn is_url_start(segment: &str) -> bool {
    segment == "http://" || segment == "https://"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_classes_are_disjoint_except_nothing() {
        for c in ['"', '\u{201C}', '\u{201D}'] {
            assert!(is_double_quote_like(c));
            assert!(!is_single_quote_like(c));
        }
        for c in ['\'', '\u{2018}', '\u{2019}', '`', '\u{B4}'] {
            assert!(is_single_quote_like(c));
            assert!(!is_double_quote_like(c));
        }
    }

    #[test]
    fn special_whitespace_covers_the_unicode_space_block() {
        assert!(is_special_whitespace('\u{A0}'));
        assert!(is_special_whitespace('\u{2003}'));
        assert!(is_special_whitespace('\u{3000}'));
        assert!(!is_special_whitespace(' '));
        assert!(!is_special_whitespace('\u{200B}'));
    }

    #[test]
    fn delimiters_match_the_token_terminator_set() {
        for c in [',', ':', '[', ']', '/', '{', '}', '(', ')', '\n', '+'] {
            assert!(is_delimiter(c));
        }
        assert!(!is_delimiter(' '));
        assert!(!is_delimiter(';'));
        // ':' and '(' / ')' terminate tokens but not recovered strings
        assert!(!is_unquoted_string_delimiter(':'));
        assert!(!is_unquoted_string_delimiter('('));
        assert!(is_unquoted_string_delimiter('\n'));
    }
}
