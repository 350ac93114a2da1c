//! Tolerant JSON repair.
//!
//! [`repair`] consumes text that is *almost* JSON (the kind produced by
//! humans, LLMs and loose JavaScript sources) and returns a syntactically
//! valid JSON document that preserves the apparent intent, or a
//! position-tagged [`RepairError`] when no reasonable repair exists.
//!
//! Repairs include, among others:
//!
//! - single quotes, Unicode quote look-alikes, and missing quotes
//! - unquoted object keys and bare strings
//! - missing, trailing and leading commas; missing colons
//! - missing closing braces/brackets and redundant closers
//! - line and block comments
//! - Markdown code fences around the payload
//! - Python literals (`True`, `False`, `None`) and JavaScript `undefined`
//! - MongoDB/JSONP wrappers like `NumberLong("2")` and `callback({...});`
//! - string concatenation (`"a" + "b"`), regex literals, stray URLs
//! - newline-delimited JSON, wrapped into a single array
//! - truncated documents, ellipses, Unicode space look-alikes
//!
//! The engine is a single-pass recursive-descent parser over one cursor and
//! one output buffer; recursion depth equals the nesting depth of the input,
//! so pathologically deep documents can exhaust the stack.

mod classify;
mod emit;
pub mod error;
mod parser;
mod repair;

pub use error::{RepairError, RepairErrorKind};
pub use repair::RepairLogEntry;

/// Repair a potentially invalid JSON string into a valid JSON string.
///
/// Deterministic and configuration-free: the same input always yields the
/// same output. Input that is already valid JSON is returned unchanged.
///
/// # Examples
///
/// ```
/// let repaired = jsonmend::repair("{name: 'John', age: 30}")?;
/// assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
///
/// Newline-delimited values are collected into an array:
///
/// ```
/// let repaired = jsonmend::repair("{\"a\":1}\n{\"b\":2}")?;
/// assert_eq!(repaired, "[\n{\"a\":1},\n{\"b\":2}\n]");
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
pub fn repair(input: &str) -> Result<String, RepairError> {
    repair::repair_to_string(input)
}

/// Repair like [`repair`] and also return a log of the edits performed.
///
/// When the crate is built without the `logging` feature the log is always
/// empty.
///
/// # Examples
///
/// ```
/// let (repaired, log) = jsonmend::repair_with_log("[1, 2, 3,]")?;
/// assert_eq!(repaired, "[1, 2, 3]");
/// # #[cfg(feature = "logging")]
/// assert!(log.iter().any(|entry| entry.message.contains("comma")));
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
pub fn repair_with_log(input: &str) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    repair::repair_to_string_with_log(input)
}

/// Repair and then parse into a [`serde_json::Value`].
///
/// # Examples
///
/// ```
/// let value = jsonmend::repair_to_value("{valid: True, empty: None}")?;
/// assert_eq!(value["valid"], true);
/// assert!(value["empty"].is_null());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "serde")]
pub fn repair_to_value(input: &str) -> Result<serde_json::Value, RepairError> {
    let repaired = repair(input)?;
    serde_json::from_str(&repaired).map_err(|e| {
        RepairError::new(
            RepairErrorKind::Parse(format!("serde_json parse error: {e}")),
            0,
        )
    })
}

/// Alias for [`repair_to_value`], matching the Python `json.loads`
/// convention.
#[cfg(feature = "serde")]
pub fn loads(input: &str) -> Result<serde_json::Value, RepairError> {
    repair_to_value(input)
}

#[cfg(test)]
mod tests;
