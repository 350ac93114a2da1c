// Topic-based unit test modules.

/// Repair and unwrap; most tests start here.
fn repair(input: &str) -> String {
    crate::repair(input).unwrap()
}

/// Repair and parse the result with a strict JSON parser.
fn repair_value(input: &str) -> serde_json::Value {
    let out = repair(input);
    serde_json::from_str(&out)
        .unwrap_or_else(|e| panic!("output not valid JSON: {out:?}: {e}"))
}

mod keywords_symbols;
mod properties;
