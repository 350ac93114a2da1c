//! Suffix edits on the output buffer.
//!
//! The repair parser appends almost everywhere; the exceptions are the two
//! primitives below plus a plain `truncate` for checkpoint rollback. They
//! operate on `String` directly so the string parser can reuse them on its
//! local working buffer.

use crate::classify::is_whitespace;

/// Insert `insert` before any trailing ASCII whitespace of `buf`.
///
/// `{"a": 1\n` + `,` becomes `{"a": 1,\n`, keeping pretty-printing intact.
pub(crate) fn insert_before_last_whitespace(buf: &mut String, insert: &str) {
    let mut index = buf.len();
    while index > 0 {
        let Some(prev) = buf[..index].chars().next_back() else {
            break;
        };
        if !is_whitespace(prev) {
            break;
        }
        index -= prev.len_utf8();
    }
    buf.insert_str(index, insert);
}

/// Remove the last occurrence of `strip` from `buf`. With `strip_remaining`
/// everything after it is dropped as well.
pub(crate) fn strip_last_occurrence(buf: &mut String, strip: char, strip_remaining: bool) {
    if let Some(index) = buf.rfind(strip) {
        if strip_remaining {
            buf.truncate(index);
        } else {
            buf.remove(index);
        }
    }
}

/// Does `buf` end with a comma or newline, ignoring trailing spaces, tabs
/// and carriage returns? Drives NDJSON detection at the document root.
pub(crate) fn ends_with_comma_or_newline(buf: &str) -> bool {
    let trimmed = buf.trim_end_matches([' ', '\t', '\r']);
    trimmed.ends_with(',') || trimmed.ends_with('\n')
}

/// Append `lit` to `buf` as a double-quoted JSON string, escaping where the
/// grammar requires it. Runs of safe characters are copied in one slice.
pub(crate) fn push_json_string(buf: &mut String, lit: &str) {
    buf.push('"');
    let mut start = 0usize;
    for (i, ch) in lit.char_indices() {
        let escape: Option<&str> = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{8}' => Some("\\b"),
            '\u{C}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            c if (c as u32) < 0x20 => None,
            _ => continue,
        };
        if i > start {
            buf.push_str(&lit[start..i]);
        }
        match escape {
            Some(esc) => buf.push_str(esc),
            None => {
                buf.push_str(&format!("\\u{:04x}", ch as u32));
            }
        }
        start = i + ch.len_utf8();
    }
    if start < lit.len() {
        buf.push_str(&lit[start..]);
    }
    buf.push('"');
}
