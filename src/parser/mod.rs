#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

//! Recursive-descent repair parser.
//!
//! One function per grammatical production. Every production either consumes
//! input and appends to the output buffer (possibly with repair edits) or
//! leaves the cursor alone and reports `false`. No AST is built; the output
//! buffer is the product. Productions that speculate capture
//! `(pos, out.len())` and restore both on failure.

mod array;
mod number;
mod object;
mod strings;

use memchr::memchr;

use crate::classify::{
    is_function_name_char, is_function_name_char_start, is_quote, is_special_whitespace,
    is_unquoted_string_delimiter, is_url_char, is_url_start, is_whitespace,
    is_whitespace_except_newline, starts_value,
};
use crate::emit::{ends_with_comma_or_newline, insert_before_last_whitespace, push_json_string,
    strip_last_occurrence};
use crate::error::{RepairError, RepairErrorKind};
use crate::repair::RepairLogEntry;

/// Collects the repair actions performed during one call.
#[derive(Default)]
pub(crate) struct Logger {
    enabled: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    fn log(&mut self, position: usize, message: &'static str) {
        if self.enabled {
            self.entries.push(RepairLogEntry { position, message });
        }
    }
}

pub(crate) struct Parser<'i> {
    text: &'i str,
    pos: usize,
    out: String,
    logger: Logger,
}

impl<'i> Parser<'i> {
    pub(crate) fn new(text: &'i str, log_enabled: bool) -> Self {
        Self {
            text,
            pos: 0,
            out: String::with_capacity(text.len() + 16),
            logger: Logger::new(log_enabled),
        }
    }

    pub(crate) fn into_output(self) -> String {
        self.out
    }

    pub(crate) fn into_parts(self) -> (String, Vec<RepairLogEntry>) {
        (self.out, self.logger.entries)
    }

    fn log(&mut self, position: usize, message: &'static str) {
        self.logger.log(position, message);
    }

    #[inline]
    fn char_at(&self, index: usize) -> Option<char> {
        self.text.get(index..).and_then(|s| s.chars().next())
    }

    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// Byte index of the last non-whitespace character before `end`.
    fn prev_non_whitespace_index(&self, end: usize) -> Option<usize> {
        self.text[..end]
            .char_indices()
            .rev()
            .find(|&(_, c)| !is_whitespace(c))
            .map(|(i, _)| i)
    }

    /// Consume `c` and copy it into the output.
    fn parse_character(&mut self, c: char) -> bool {
        if self.char_at(self.pos) == Some(c) {
            self.out.push(c);
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `c` without emitting it.
    fn skip_character(&mut self, c: char) -> bool {
        if self.char_at(self.pos) == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Top-level driver
    // ------------------------------------------------------------------

    pub(crate) fn parse_root(&mut self) -> Result<(), RepairError> {
        if self.text.starts_with('\u{FEFF}') {
            self.log(0, "skipped byte order mark");
            self.pos = '\u{FEFF}'.len_utf8();
        }

        self.parse_markdown_code_block(&["```", "[```", "{```"]);

        let processed = self.parse_value()?;
        if !processed {
            return Err(RepairError::new(
                RepairErrorKind::UnexpectedEnd,
                self.text.len(),
            ));
        }

        self.parse_markdown_code_block(&["```", "```]", "```}"]);

        let processed_comma = self.parse_character(',');
        if processed_comma {
            self.parse_whitespace_and_skip_comments(true);
        }

        if self.char_at(self.pos).is_some_and(starts_value)
            && ends_with_comma_or_newline(&self.out)
        {
            // newline-delimited JSON: keep parsing values and wrap them all
            // in an array at the end
            if !processed_comma {
                self.log(self.pos, "inserted missing comma");
                insert_before_last_whitespace(&mut self.out, ",");
            }
            self.parse_newline_delimited_json()?;
        } else if processed_comma {
            // a comma after a lone value: strip it
            self.log(self.pos, "stripped trailing comma");
            strip_last_occurrence(&mut self.out, ',', false);
        }

        // tolerate over-closed documents like {"a":1}}}
        while matches!(self.char_at(self.pos), Some('}' | ']')) {
            self.log(self.pos, "skipped redundant closer");
            self.pos += 1;
            self.parse_whitespace_and_skip_comments(true);
        }

        if self.pos >= self.text.len() {
            return Ok(());
        }
        Err(RepairError::new(
            RepairErrorKind::UnexpectedCharacter(self.char_at(self.pos).unwrap()),
            self.pos,
        ))
    }

    fn parse_newline_delimited_json(&mut self) -> Result<(), RepairError> {
        let mut initial = true;
        loop {
            if !initial {
                if !self.parse_character(',') {
                    insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }
            if !self.parse_value()? {
                break;
            }
        }

        // the separator speculatively added before the last (absent) value
        strip_last_occurrence(&mut self.out, ',', false);

        self.log(self.pos, "wrapped newline delimited values in array");
        let mut wrapped = String::with_capacity(self.out.len() + 4);
        wrapped.push_str("[\n");
        wrapped.push_str(&self.out);
        wrapped.push_str("\n]");
        self.out = wrapped;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    fn parse_value(&mut self) -> Result<bool, RepairError> {
        self.parse_whitespace_and_skip_comments(true);
        let processed = self.parse_object()?
            || self.parse_array()?
            || self.parse_string(false, None)?
            || self.parse_number()
            || self.parse_keywords()
            || self.parse_unquoted_string(false)?
            || self.parse_regex();
        self.parse_whitespace_and_skip_comments(true);
        Ok(processed)
    }

    // ------------------------------------------------------------------
    // Whitespace and comments
    // ------------------------------------------------------------------

    /// Whitespace and comments interleave freely; loop until neither moves
    /// the cursor.
    fn parse_whitespace_and_skip_comments(&mut self, skip_newline: bool) -> bool {
        let start = self.pos;
        self.parse_whitespace(skip_newline);
        loop {
            let mut changed = self.parse_comment();
            if changed {
                changed = self.parse_whitespace(skip_newline);
            }
            if !changed {
                break;
            }
        }
        self.pos > start
    }

    fn parse_whitespace(&mut self, skip_newline: bool) -> bool {
        let is_ws: fn(char) -> bool = if skip_newline {
            is_whitespace
        } else {
            is_whitespace_except_newline
        };
        let start = self.pos;
        let mut whitespace = String::new();
        let mut normalized = false;
        while let Some(c) = self.char_at(self.pos) {
            if is_ws(c) {
                whitespace.push(c);
                self.pos += c.len_utf8();
            } else if is_special_whitespace(c) {
                whitespace.push(' ');
                normalized = true;
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if whitespace.is_empty() {
            return false;
        }
        if normalized {
            self.log(start, "normalized whitespace");
        }
        self.out.push_str(&whitespace);
        true
    }

    /// Line and block comments are dropped entirely; the line terminator is
    /// left for the whitespace pass.
    fn parse_comment(&mut self) -> bool {
        let start = self.pos;
        let rest = self.text[self.pos..].as_bytes();
        if rest.starts_with(b"/*") {
            let mut off = 2usize;
            loop {
                match memchr(b'*', &rest[off..]) {
                    Some(p) => {
                        let idx = off + p;
                        if rest.get(idx + 1) == Some(&b'/') {
                            self.pos += idx + 2;
                            break;
                        }
                        off = idx + 1;
                    }
                    None => {
                        self.pos = self.text.len();
                        break;
                    }
                }
            }
            self.log(start, "skipped block comment");
            return true;
        }
        if rest.starts_with(b"//") {
            match memchr(b'\n', rest) {
                Some(p) => self.pos += p,
                None => self.pos = self.text.len(),
            }
            self.log(start, "skipped line comment");
            return true;
        }
        false
    }

    // ------------------------------------------------------------------
    // Markdown fences
    // ------------------------------------------------------------------

    fn parse_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        if self.skip_markdown_code_block(blocks) {
            if self.char_at(self.pos).is_some_and(is_function_name_char_start) {
                // strip the language specifier like "json"
                while self.char_at(self.pos).is_some_and(is_function_name_char) {
                    self.pos += 1;
                }
            }
            self.parse_whitespace_and_skip_comments(true);
            true
        } else {
            false
        }
    }

    fn skip_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        let i_before = self.pos;
        let o_before = self.out.len();
        self.parse_whitespace_and_skip_comments(true);

        for block in blocks {
            if self.text[self.pos..].starts_with(block) {
                self.log(self.pos, "skipped markdown fence");
                self.pos += block.len();
                return true;
            }
        }

        self.pos = i_before;
        self.out.truncate(o_before);
        false
    }

    // ------------------------------------------------------------------
    // Keywords, unquoted strings, regex literals
    // ------------------------------------------------------------------

    fn parse_keywords(&mut self) -> bool {
        self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
            || self.parse_python_keyword("True", "true")
            || self.parse_python_keyword("False", "false")
            || self.parse_python_keyword("None", "null")
    }

    fn parse_keyword(&mut self, name: &str, value: &str) -> bool {
        if self.text[self.pos..].starts_with(name) {
            self.out.push_str(value);
            self.pos += name.len();
            true
        } else {
            false
        }
    }

    fn parse_python_keyword(&mut self, name: &str, value: &str) -> bool {
        if self.text[self.pos..].starts_with(name) {
            self.log(self.pos, "normalized python keyword");
            self.out.push_str(value);
            self.pos += name.len();
            true
        } else {
            false
        }
    }

    /// Unquoted strings, `undefined`, and function wrappers like
    /// `NumberLong("2")` or `callback({...});` (the wrapper is dropped and
    /// only the inner value kept).
    fn parse_unquoted_string(&mut self, is_key: bool) -> Result<bool, RepairError> {
        let start = self.pos;

        if self.char_at(self.pos).is_some_and(is_function_name_char_start) {
            while self.char_at(self.pos).is_some_and(is_function_name_char) {
                self.pos += 1;
            }

            let mut j = self.pos;
            while let Some(c) = self.char_at(j) {
                if !is_whitespace(c) {
                    break;
                }
                j += c.len_utf8();
            }

            if self.char_at(j) == Some('(') {
                self.log(start, "unwrapped function call");
                self.pos = j + 1;

                self.parse_value()?;

                if self.char_at(self.pos) == Some(')') {
                    self.pos += 1;
                    if self.char_at(self.pos) == Some(';') {
                        self.pos += 1;
                    }
                }
                return Ok(true);
            }
        }

        while let Some(c) = self.char_at(self.pos) {
            if is_unquoted_string_delimiter(c) || is_quote(c) || (is_key && c == ':') {
                break;
            }
            self.pos += c.len_utf8();
        }

        // a URL would otherwise be cut at its "//"
        if self.byte_at(self.pos.wrapping_sub(1)) == Some(b':')
            && self
                .text
                .get(start..(self.pos + 2).min(self.text.len()))
                .is_some_and(is_url_start)
        {
            while let Some(c) = self.char_at(self.pos) {
                if !is_url_char(c) {
                    break;
                }
                self.pos += c.len_utf8();
            }
        }

        if self.pos > start {
            // move back before any trailing whitespace of the run
            while self.pos > start {
                match self.text[..self.pos].chars().next_back() {
                    Some(c) if is_whitespace(c) => self.pos -= c.len_utf8(),
                    _ => break,
                }
            }

            let symbol = &self.text[start..self.pos];
            if symbol == "undefined" {
                self.log(start, "replaced undefined with null");
                self.out.push_str("null");
            } else {
                self.log(start, "quoted unquoted string");
                push_json_string(&mut self.out, symbol);
            }

            if self.char_at(self.pos) == Some('"') {
                // a closing quote without its opening twin: swallow it
                self.pos += 1;
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// A JavaScript regex literal becomes a plain string, slashes included.
    fn parse_regex(&mut self) -> bool {
        if self.char_at(self.pos) != Some('/') {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.char_at(self.pos) {
            if c == '/' && self.byte_at(self.pos - 1) != Some(b'\\') {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.skip_character('/');
        self.log(start, "quoted regex literal");
        push_json_string(&mut self.out, &self.text[start..self.pos]);
        true
    }

    // ------------------------------------------------------------------
    // Shared small productions
    // ------------------------------------------------------------------

    /// `...` placeholders (optionally followed by a comma) inside objects
    /// and arrays are dropped.
    fn skip_ellipsis(&mut self) {
        self.parse_whitespace_and_skip_comments(true);
        if self.text[self.pos..].starts_with("...") {
            self.log(self.pos, "skipped ellipsis");
            self.pos += 3;
            self.parse_whitespace_and_skip_comments(true);
            self.skip_character(',');
        }
    }
}
