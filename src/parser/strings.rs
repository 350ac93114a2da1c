//! The backtracking string parser.
//!
//! This is the only production that retries. A pass is parameterized by
//! `stop_at_delimiter` (close at the first unquoted-string delimiter) and
//! `stop_at_index` (close at a position scheduled by a previous pass). The
//! first pass runs with neither; look-ahead and look-behind around a
//! speculative end quote decide whether to accept it, retry with a different
//! termination policy, or escape the quote in place. At most three passes
//! run per string.

use super::Parser;
use crate::classify::{
    is_control_character, is_delimiter, is_digit, is_double_quote, is_double_quote_like,
    is_hex_digit, is_quote, is_single_quote, is_single_quote_like, is_unquoted_string_delimiter,
    is_url_char, is_url_start, is_valid_string_character,
};
use crate::emit::{insert_before_last_whitespace, strip_last_occurrence};
use crate::error::{RepairError, RepairErrorKind};

impl<'i> Parser<'i> {
    pub(super) fn parse_string(
        &mut self,
        stop_at_delimiter: bool,
        stop_at_index: Option<usize>,
    ) -> Result<bool, RepairError> {
        let mut skip_escape_chars = false;
        if self.char_at(self.pos) == Some('\\') {
            // a spurious escape before the opening quote, like \"hello\"
            self.log(self.pos, "removed leading escape character");
            self.pos += 1;
            skip_escape_chars = true;
        }

        let Some(open) = self.char_at(self.pos) else {
            return Ok(false);
        };
        if !is_quote(open) {
            return Ok(false);
        }

        // A double quote must be closed by a double quote, a single quote by
        // a single quote. The Unicode look-alikes close anything from their
        // own class; double-quote-like is the fall-back class.
        let is_end_quote: fn(char) -> bool = if is_double_quote(open) {
            is_double_quote
        } else if is_single_quote(open) {
            is_single_quote
        } else if is_single_quote_like(open) {
            is_single_quote_like
        } else {
            is_double_quote_like
        };

        let i_before = self.pos;
        let o_before = self.out.len();
        let mut str_buf = String::from("\"");
        self.pos += open.len_utf8();

        loop {
            let Some(c) = self.char_at(self.pos) else {
                // end of text with no end quote
                let i_prev = self.prev_non_whitespace_index(self.pos);
                if !stop_at_delimiter
                    && i_prev.is_some_and(|i| self.char_at(i).is_some_and(is_delimiter))
                {
                    // the text ends with a delimiter, like ["hello]: the
                    // missing quote belongs before it, so reparse and stop
                    // at the first delimiter
                    self.pos = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true, None);
                }

                self.log(self.pos, "inserted missing end quote");
                insert_before_last_whitespace(&mut str_buf, "\"");
                self.out.push_str(&str_buf);
                return Ok(true);
            };

            if stop_at_index == Some(self.pos) {
                // close position scheduled by the previous pass
                self.log(self.pos, "inserted missing end quote");
                insert_before_last_whitespace(&mut str_buf, "\"");
                self.out.push_str(&str_buf);
                return Ok(true);
            }

            if is_end_quote(c) {
                // speculative close: look around to verify it
                let i_quote = self.pos;
                let o_quote = str_buf.len();
                str_buf.push('"');
                self.pos += c.len_utf8();
                self.out.push_str(&str_buf);

                // skip whitespace except newlines: a newline after the quote
                // is a delimiter in its own right and must stay visible
                self.parse_whitespace_and_skip_comments(false);

                let next = self.char_at(self.pos);
                if stop_at_delimiter
                    || next.is_none()
                    || next.is_some_and(|n| is_delimiter(n) || is_quote(n) || is_digit(n))
                {
                    // followed by the end of the text, a delimiter, or the
                    // next value: a genuine end quote
                    self.parse_concatenated_string()?;
                    return Ok(true);
                }

                let i_prev = self.prev_non_whitespace_index(i_quote);
                let prev = i_prev.and_then(|i| self.char_at(i));

                if prev == Some(',') {
                    // a comma right before the quote, like {"a":"b,c,"d":"e"}:
                    // the string closes just after that comma; reparse and
                    // stop there
                    self.pos = i_before;
                    self.out.truncate(o_before);
                    let stop = i_prev.unwrap() + 1;
                    return self.parse_string(false, Some(stop));
                }

                if prev.is_some_and(is_delimiter) {
                    // preceded but not followed by a delimiter: an end quote
                    // went missing earlier; reparse and stop at the first
                    // delimiter
                    self.pos = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true, None);
                }

                // the quote sits inside the string content: escape it and
                // keep going
                self.out.truncate(o_before);
                self.pos = i_quote + c.len_utf8();
                self.log(i_quote, "escaped unescaped quote");
                str_buf.insert(o_quote, '\\');
            } else if stop_at_delimiter && is_unquoted_string_delimiter(c) {
                // missing-end-quote mode: this delimiter ends the string,
                // unless it is the "//" of a URL
                if self.byte_at(self.pos.wrapping_sub(1)) == Some(b':')
                    && self
                        .text
                        .get(i_before + open.len_utf8()..(self.pos + 2).min(self.text.len()))
                        .is_some_and(is_url_start)
                {
                    while let Some(u) = self.char_at(self.pos) {
                        if !is_url_char(u) {
                            break;
                        }
                        str_buf.push(u);
                        self.pos += u.len_utf8();
                    }
                }

                self.log(self.pos, "inserted missing end quote");
                insert_before_last_whitespace(&mut str_buf, "\"");
                self.out.push_str(&str_buf);

                self.parse_concatenated_string()?;
                return Ok(true);
            } else if c == '\\' {
                match self.char_at(self.pos + 1) {
                    Some(esc @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                        str_buf.push('\\');
                        str_buf.push(esc);
                        self.pos += 2;
                    }
                    Some('u') => {
                        let mut j = 2usize;
                        while j < 6 && self.byte_at(self.pos + j).is_some_and(is_hex_digit) {
                            j += 1;
                        }
                        if j == 6 {
                            str_buf.push_str(&self.text[self.pos..self.pos + 6]);
                            self.pos += 6;
                        } else if self.pos + j >= self.text.len() {
                            // truncated escape at the very end of the input:
                            // drop it, the string closes at EOF
                            self.log(self.pos, "removed truncated unicode escape");
                            self.pos = self.text.len();
                        } else {
                            let chars: String =
                                self.text[self.pos..].chars().take(6).collect();
                            return Err(RepairError::new(
                                RepairErrorKind::InvalidUnicodeEscape(chars),
                                self.pos,
                            ));
                        }
                    }
                    Some(other) => {
                        // not a JSON escape: drop the backslash
                        self.log(self.pos, "removed invalid escape character");
                        str_buf.push(other);
                        self.pos += 1 + other.len_utf8();
                    }
                    None => {
                        self.pos = self.text.len();
                    }
                }
            } else {
                if c == '"' && self.byte_at(self.pos.wrapping_sub(1)) != Some(b'\\') {
                    // a bare double quote inside a single-quoted string
                    self.log(self.pos, "escaped unescaped quote");
                    str_buf.push_str("\\\"");
                    self.pos += 1;
                } else if is_control_character(c) {
                    str_buf.push_str(match c {
                        '\n' => "\\n",
                        '\r' => "\\r",
                        '\t' => "\\t",
                        '\u{8}' => "\\b",
                        _ => "\\f",
                    });
                    self.pos += 1;
                } else {
                    if !is_valid_string_character(c) {
                        return Err(RepairError::new(
                            RepairErrorKind::InvalidCharacter(c),
                            self.pos,
                        ));
                    }
                    str_buf.push(c);
                    self.pos += c.len_utf8();
                }
            }

            if skip_escape_chars {
                // the input escapes every character; drop the next backslash
                self.skip_character('\\');
            }
        }
    }

    /// After a string closed: while a `+` follows, merge the next string
    /// literal into it. `"a" + "b"` becomes `"ab"`; a dangling `+` is
    /// dropped.
    pub(super) fn parse_concatenated_string(&mut self) -> Result<bool, RepairError> {
        let mut processed = false;

        self.parse_whitespace_and_skip_comments(true);
        while self.char_at(self.pos) == Some('+') {
            processed = true;
            self.log(self.pos, "merged concatenated string");
            self.pos += 1;
            self.parse_whitespace_and_skip_comments(true);

            // drop the end quote of the first string and everything emitted
            // after it
            strip_last_occurrence(&mut self.out, '"', true);
            let start = self.out.len();

            if self.parse_string(false, None)? {
                // drop the start quote of the second string
                self.out.remove(start);
            } else {
                // nothing after the +: restore the end quote
                insert_before_last_whitespace(&mut self.out, "\"");
            }
        }

        Ok(processed)
    }
}
