//! Cross-cutting properties over a corpus of dirty inputs.

const DIRTY_CORPUS: &[&str] = &[
    "{name: 'John', age: 30}",
    "{\"name\": \"John\", \"age\": 30,}",
    "[1, 2, 3,]",
    "{\"valid\": True, \"invalid\": False, \"empty\": None}",
    "```json\n{\"a\":1}\n```",
    "{\"a\":1}\n{\"b\":2}",
    "{\"a\":\"b,c,\"d\":\"e\"}",
    "[\"hello]",
    "NumberLong(\"2\")",
    "\"hello\" + \"world\"",
    "{a: undefined}",
    "[1 2 3]",
    "{'a':2, b: 'x'}",
    "callback({\"a\":[1,2,]});",
    "{\"url\":\"https://example.com}",
    "[\"hello, \"world\"]",
    "// c\n[1, /*x*/ 2]",
    "{\"a\":\u{00A0}1}",
    "[0123]",
    "-",
    "1e",
    "[2.",
    "{\"a\"",
    "{\"a\":",
    "[[1,2",
    "'\u{2018}quoted\u{2019}'",
    "\u{201C}hi\u{201D}",
    "1\n2\n3",
    "/ab+c/",
    "{greeting: 你好}",
];

const VALID_CORPUS: &[&str] = &[
    "{\"a\":1}",
    "{\"a\": [1, 2.5, -3e2], \"b\": {\"c\": \"d\"}}",
    "[]",
    "{}",
    "\"plain\"",
    "\"esc \\\" \\\\ \\n \\u00e9\"",
    "true",
    "null",
    "-12.5e-3",
    "  {\"a\": 1}\n",
    "[true, false, null]",
];

#[test]
fn repaired_output_is_valid_json() {
    for input in DIRTY_CORPUS {
        let out = crate::repair(input).unwrap();
        serde_json::from_str::<serde_json::Value>(&out)
            .unwrap_or_else(|e| panic!("invalid output for {input:?}: {out:?}: {e}"));
    }
}

#[test]
fn repair_is_idempotent() {
    for input in DIRTY_CORPUS {
        let once = crate::repair(input).unwrap();
        let twice = crate::repair(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn valid_json_passes_through_unchanged() {
    for input in VALID_CORPUS {
        assert_eq!(crate::repair(input).unwrap(), *input);
    }
}

#[test]
fn error_positions_stay_in_bounds() {
    let failing = ["", "   ", ",", "{:1}", "{\"a\" %}", "{\"a\":1}x", "\"a\u{1}\""];
    for input in failing {
        let err = crate::repair(input).unwrap_err();
        assert!(
            err.position <= input.len(),
            "position {} out of bounds for {input:?}",
            err.position
        );
    }
}

#[test]
fn repair_log_reports_edits() {
    let (out, log) = crate::repair_with_log("{a: True, b: undefined,}").unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["a"], true);
    assert!(v["b"].is_null());
    #[cfg(feature = "logging")]
    {
        assert!(log.iter().any(|e| e.message.contains("python")));
        assert!(log.iter().any(|e| e.message.contains("undefined")));
        assert!(log.iter().all(|e| e.position <= 24));
    }
    #[cfg(not(feature = "logging"))]
    assert!(log.is_empty());
}

#[test]
fn clean_input_produces_no_log_entries() {
    let (_, log) = crate::repair_with_log("{\"a\": 1}").unwrap();
    assert!(log.is_empty());
}
