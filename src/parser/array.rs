use super::Parser;
use crate::emit::{insert_before_last_whitespace, strip_last_occurrence};
use crate::error::RepairError;

impl<'i> Parser<'i> {
    /// Array production. Tolerates leading/trailing/missing commas, ellipses,
    /// and a missing closing bracket.
    pub(super) fn parse_array(&mut self) -> Result<bool, RepairError> {
        if self.char_at(self.pos) != Some('[') {
            return Ok(false);
        }
        self.out.push('[');
        self.pos += 1;
        self.parse_whitespace_and_skip_comments(true);

        // [, 1, 2]
        if self.skip_character(',') {
            self.log(self.pos, "skipped leading comma");
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.pos < self.text.len() && self.char_at(self.pos) != Some(']') {
            if !initial {
                if !self.parse_character(',') {
                    self.log(self.pos, "inserted missing comma");
                    insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            if !self.parse_value()? {
                // trailing comma, or a truncated array
                self.log(self.pos, "stripped trailing comma");
                strip_last_occurrence(&mut self.out, ',', false);
                break;
            }
        }

        if self.char_at(self.pos) == Some(']') {
            self.out.push(']');
            self.pos += 1;
        } else {
            self.log(self.pos, "inserted missing closing bracket");
            insert_before_last_whitespace(&mut self.out, "]");
        }
        Ok(true)
    }
}
