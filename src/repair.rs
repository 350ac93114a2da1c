use crate::error::RepairError;
use crate::parser::Parser;

/// One repair action performed by the parser.
///
/// `position` is the byte index into the *input* where the repair was
/// decided; `message` is a short static description like
/// `"inserted missing comma"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
}

pub(crate) fn repair_to_string(input: &str) -> Result<String, RepairError> {
    // Already-valid JSON round-trips through the parser byte for byte, so a
    // strict validation pass lets us skip the repair machinery entirely.
    #[cfg(feature = "serde")]
    if serde_json::from_str::<serde::de::IgnoredAny>(input).is_ok() {
        return Ok(input.to_string());
    }

    let mut parser = Parser::new(input, false);
    parser.parse_root()?;
    Ok(parser.into_output())
}

#[cfg(feature = "logging")]
pub(crate) fn repair_to_string_with_log(
    input: &str,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    let mut parser = Parser::new(input, true);
    parser.parse_root()?;
    Ok(parser.into_parts())
}

#[cfg(not(feature = "logging"))]
pub(crate) fn repair_to_string_with_log(
    input: &str,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    // Logging compiled out: same repair, empty log.
    let mut parser = Parser::new(input, false);
    parser.parse_root()?;
    Ok(parser.into_parts())
}
