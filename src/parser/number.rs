use super::Parser;
use crate::classify::{is_delimiter, is_digit, is_whitespace};

impl<'i> Parser<'i> {
    /// Number production: `-? digit+ (. digit+)? ([eE][+-]? digit+)?` with
    /// two tolerances. A number cut off after `-`, `.` or the exponent
    /// introducer is padded with a `0`; a lexeme that continues past the
    /// grammar (like `1e3x`) resets the cursor so another production can
    /// claim it.
    pub(super) fn parse_number(&mut self) -> bool {
        let start = self.pos;

        if self.char_at(self.pos) == Some('-') {
            self.pos += 1;
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.char_at(self.pos).is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
        }

        // leading zeros are consumed here and, when invalid, quoted below
        while self.char_at(self.pos).is_some_and(is_digit) {
            self.pos += 1;
        }

        if self.char_at(self.pos) == Some('.') {
            self.pos += 1;
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.char_at(self.pos).is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
            while self.char_at(self.pos).is_some_and(is_digit) {
                self.pos += 1;
            }
        }

        if matches!(self.char_at(self.pos), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.char_at(self.pos), Some('-' | '+')) {
                self.pos += 1;
            }
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.char_at(self.pos).is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
            while self.char_at(self.pos).is_some_and(is_digit) {
                self.pos += 1;
            }
        }

        if !self.at_end_of_number() {
            self.pos = start;
            return false;
        }

        if self.pos > start {
            let num = &self.text[start..self.pos];
            // 00789 has no numeric reading; keep the digits as a string
            let digits = num.strip_prefix('-').unwrap_or(num);
            let invalid_leading_zero = digits.len() > 1
                && digits.as_bytes()[0] == b'0'
                && digits.as_bytes()[1].is_ascii_digit();
            if invalid_leading_zero {
                self.log(start, "quoted number with leading zero");
                self.out.push('"');
                self.out.push_str(num);
                self.out.push('"');
            } else {
                self.out.push_str(num);
            }
            return true;
        }
        false
    }

    fn at_end_of_number(&self) -> bool {
        match self.char_at(self.pos) {
            None => true,
            Some(c) => is_delimiter(c) || is_whitespace(c),
        }
    }

    /// `-` → `-0`, `2.` → `2.0`, `1e` → `1e0`, `1e+` → `1e+0`.
    fn repair_number_cut_off(&mut self, start: usize) {
        self.log(start, "padded truncated number");
        self.out.push_str(&self.text[start..self.pos]);
        self.out.push('0');
    }
}
