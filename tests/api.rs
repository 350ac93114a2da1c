//! Integration tests over the public surface.

use jsonmend::{RepairErrorKind, repair, repair_with_log};

#[test]
fn repair_end_to_end() {
    let out = repair("{name: 'John', age: 30,}").unwrap();
    assert_eq!(out, "{\"name\": \"John\", \"age\": 30}");
}

#[test]
fn errors_carry_kind_and_position() {
    let err = repair("").unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedEnd);
    assert_eq!(err.position, 0);
    assert_eq!(err.to_string(), "Unexpected end of json string at position 0");
}

#[test]
fn repair_with_log_reports_positions() {
    let (out, log) = repair_with_log("[1, 2,]").unwrap();
    assert_eq!(out, "[1, 2]");
    #[cfg(feature = "logging")]
    assert!(!log.is_empty());
    #[cfg(not(feature = "logging"))]
    assert!(log.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn repair_to_value_parses_result() {
    let value = jsonmend::repair_to_value("{a: 1, b: [True, None]}").unwrap();
    assert_eq!(value["a"], 1);
    assert_eq!(value["b"][0], true);
    assert!(value["b"][1].is_null());

    let value = jsonmend::loads("'plain'").unwrap();
    assert_eq!(value, serde_json::json!("plain"));
}
