use super::Parser;
use crate::classify::starts_value;
use crate::emit::{insert_before_last_whitespace, strip_last_occurrence};
use crate::error::{RepairError, RepairErrorKind};

impl<'i> Parser<'i> {
    /// Object production. Tolerates leading/trailing/missing commas, missing
    /// colons, unquoted keys, ellipses, and a missing closing brace.
    pub(super) fn parse_object(&mut self) -> Result<bool, RepairError> {
        if self.char_at(self.pos) != Some('{') {
            return Ok(false);
        }
        self.out.push('{');
        self.pos += 1;
        self.parse_whitespace_and_skip_comments(true);

        // {, "a": 1}
        if self.skip_character(',') {
            self.log(self.pos, "skipped leading comma");
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.pos < self.text.len() && self.char_at(self.pos) != Some('}') {
            if !initial {
                if !self.parse_character(',') {
                    self.log(self.pos, "inserted missing comma");
                    insert_before_last_whitespace(&mut self.out, ",");
                }
                self.parse_whitespace_and_skip_comments(true);
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_key =
                self.parse_string(false, None)? || self.parse_unquoted_string(true)?;
            if !processed_key {
                if matches!(self.char_at(self.pos), Some('}' | '{' | ']' | '[') | None) {
                    // trailing comma before the close
                    self.log(self.pos, "stripped trailing comma");
                    strip_last_occurrence(&mut self.out, ',', false);
                } else {
                    return Err(RepairError::new(
                        RepairErrorKind::ObjectKeyExpected,
                        self.pos,
                    ));
                }
                break;
            }

            self.parse_whitespace_and_skip_comments(true);

            let processed_colon = self.parse_character(':');
            let truncated = self.pos >= self.text.len();
            if !processed_colon {
                if self.char_at(self.pos).is_some_and(starts_value) || truncated {
                    self.log(self.pos, "inserted missing colon");
                    insert_before_last_whitespace(&mut self.out, ":");
                } else {
                    return Err(RepairError::new(RepairErrorKind::ColonExpected, self.pos));
                }
            }

            let processed_value = self.parse_value()?;
            if !processed_value {
                if processed_colon || truncated {
                    self.log(self.pos, "inserted missing value null");
                    self.out.push_str("null");
                } else {
                    return Err(RepairError::new(RepairErrorKind::ColonExpected, self.pos));
                }
            }
        }

        if self.char_at(self.pos) == Some('}') {
            self.out.push('}');
            self.pos += 1;
        } else {
            self.log(self.pos, "inserted missing closing brace");
            insert_before_last_whitespace(&mut self.out, "}");
        }
        Ok(true)
    }
}
