use thiserror::Error;

/// What went wrong. Each variant renders the exact user-facing message; the
/// position lives on [`RepairError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RepairErrorKind {
    #[error("Unexpected end of json string")]
    UnexpectedEnd,
    #[error("Unexpected character {}", quoted(.0))]
    UnexpectedCharacter(char),
    #[error("Object key expected")]
    ObjectKeyExpected,
    #[error("Colon expected")]
    ColonExpected,
    #[error("Invalid character {}", quoted(.0))]
    InvalidCharacter(char),
    #[error("Invalid unicode character \"{0}\"")]
    InvalidUnicodeEscape(String),
    /// Downstream parse failure; only produced by the serde integration,
    /// never by the repair engine itself.
    #[error("{0}")]
    Parse(String),
}

/// A repair failure: no plausible reconstruction exists at `position`.
///
/// `position` is the byte index into the input at the time of failure and
/// always lies within `0..=input.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind} at position {position}")]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The message without the position suffix, e.g. `Colon expected`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Render a character the way a JSON string literal would, quotes included.
fn quoted(c: &char) -> String {
    match c {
        '"' => "\"\\\"\"".to_string(),
        '\\' => "\"\\\\\"".to_string(),
        '\u{8}' => "\"\\b\"".to_string(),
        '\u{C}' => "\"\\f\"".to_string(),
        '\n' => "\"\\n\"".to_string(),
        '\r' => "\"\\r\"".to_string(),
        '\t' => "\"\\t\"".to_string(),
        c if (*c as u32) < 0x20 => format!("\"\\u{:04x}\"", *c as u32),
        c => format!("\"{}\"", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_verbatim() {
        let e = RepairError::new(RepairErrorKind::UnexpectedEnd, 12);
        assert_eq!(e.message(), "Unexpected end of json string");
        assert_eq!(e.to_string(), "Unexpected end of json string at position 12");

        let e = RepairError::new(RepairErrorKind::UnexpectedCharacter('x'), 3);
        assert_eq!(e.message(), "Unexpected character \"x\"");

        let e = RepairError::new(RepairErrorKind::InvalidCharacter('\u{1}'), 0);
        assert_eq!(e.message(), "Invalid character \"\\u0001\"");

        let e = RepairError::new(RepairErrorKind::InvalidUnicodeEscape("\\u26\"".into()), 5);
        assert_eq!(e.message(), "Invalid unicode character \"\\u26\"\"");
    }
}
