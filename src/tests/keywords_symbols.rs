use super::{repair, repair_value};
use serde_json::json;

#[test]
fn json_keywords_pass_through() {
    assert_eq!(repair("[true, false, null]"), "[true, false, null]");
}

#[test]
fn python_keywords_are_lowered() {
    assert_eq!(repair("[True, False, None]"), "[true, false, null]");
}

#[test]
fn undefined_becomes_null() {
    assert_eq!(repair("undefined"), "null");
    assert_eq!(repair("{a: undefined}"), "{\"a\": null}");
}

#[test]
fn bare_strings_are_quoted() {
    assert_eq!(repair("hello"), "\"hello\"");
    assert_eq!(repair("{a: hello world}"), "{\"a\": \"hello world\"}");
}

#[test]
fn missing_start_quote_swallows_end_quote() {
    assert_eq!(repair("{a: abc\"}"), "{\"a\": \"abc\"}");
}

#[test]
fn bare_urls_are_quoted() {
    assert_eq!(
        repair("{\"url\": https://example.com/path?q=1}"),
        "{\"url\": \"https://example.com/path?q=1\"}"
    );
}

#[test]
fn function_wrappers_are_unwrapped() {
    assert_eq!(repair("callback({\"a\":1});"), "{\"a\":1}");
    assert_eq!(repair("NumberLong(2)"), "2");
    // nested wrappers collapse to the innermost value
    assert_eq!(repair("outer(inner(1))"), "1");
}

#[test]
fn regex_literals_become_strings() {
    assert_eq!(repair("/ab+c/"), "\"/ab+c/\"");
    assert_eq!(repair("{\"r\": /ab+c/}"), "{\"r\": \"/ab+c/\"}");
    // an unterminated regex runs to the end of the input
    assert_eq!(repair("{\"r\": /ab"), "{\"r\": \"/ab\"}");
}

#[test]
fn symbols_with_unicode_content() {
    let v = repair_value("{greeting: 你好}");
    assert_eq!(v, json!({"greeting": "你好"}));
}
