//! Free path resolver tests: index-vs-key rules and error payloads.

use densejson::{resolve, DenseJsonError, Value};
use serde_json::json;

fn sample() -> Value {
    Value::from(json!({"data": [{"name": "Alice"}, {"name": "Bob"}]}))
}

fn path_payload(err: DenseJsonError) -> (String, Value) {
    match err {
        DenseJsonError::Path { remainder, failed_at } => (remainder, failed_at),
        other => panic!("expected a path error, got {}", other),
    }
}

// ============================================================================
// Successful walks
// ============================================================================

#[test]
fn index_then_key() {
    let j = sample();
    assert_eq!(resolve(&j, "data/0/name").unwrap(), &Value::from("Alice"));
    assert_eq!(resolve(&j, "data/1/name").unwrap(), &Value::from("Bob"));
}

#[test]
fn partial_path_lands_on_compound() {
    let j = sample();
    assert_eq!(
        resolve(&j, "data/0").unwrap(),
        &Value::from(json!({"name": "Alice"}))
    );
    assert_eq!(resolve(&j, "data").unwrap(), j.get("data").unwrap());
}

#[test]
fn numeric_segment_against_dict_is_a_key() {
    let j = Value::from(json!({"0": "zero", "07": "padded"}));
    assert_eq!(resolve(&j, "0").unwrap(), &Value::from("zero"));
    assert_eq!(resolve(&j, "07").unwrap(), &Value::from("padded"));
}

#[test]
fn leading_zeros_still_index_lists() {
    let j = Value::from(json!(["a", "b", "c"]));
    assert_eq!(resolve(&j, "01").unwrap(), &Value::from("b"));
}

// ============================================================================
// Failures and their payloads
// ============================================================================

#[test]
fn out_of_range_index_reports_remainder_and_cursor() {
    let j = Value::from(json!({"data": [{"name": "Alice"}]}));
    let (remainder, failed_at) = path_payload(resolve(&j, "data/2/name").unwrap_err());
    assert_eq!(remainder, "2/name");
    assert_eq!(failed_at, Value::from(json!([{"name": "Alice"}])));
}

#[test]
fn non_numeric_segment_against_list_fails_without_coercion() {
    let j = Value::from(json!({"data": [{"name": "Alice"}]}));
    let (remainder, failed_at) = path_payload(resolve(&j, "data/name").unwrap_err());
    assert_eq!(remainder, "name");
    assert_eq!(failed_at, Value::from(json!([{"name": "Alice"}])));
}

#[test]
fn strings_are_not_indexable() {
    let j = sample();
    let (remainder, failed_at) = path_payload(resolve(&j, "data/0/name/0").unwrap_err());
    assert_eq!(remainder, "0");
    assert_eq!(failed_at, Value::from("Alice"));
}

#[test]
fn absent_key_fails_at_that_segment() {
    let j = Value::from(json!({"a": {"b": 1}}));
    let (remainder, failed_at) = path_payload(resolve(&j, "a/x/y").unwrap_err());
    assert_eq!(remainder, "x/y");
    assert_eq!(failed_at, Value::from(json!({"b": 1})));
}

#[test]
fn empty_path_is_an_absent_key_lookup() {
    let j = Value::from(json!({"a": 1}));
    let (remainder, failed_at) = path_payload(resolve(&j, "").unwrap_err());
    assert_eq!(remainder, "");
    assert_eq!(failed_at, j);
}

#[test]
fn oversized_index_is_out_of_range() {
    let j = Value::from(json!([1, 2, 3]));
    let (remainder, _) = path_payload(resolve(&j, "99999999999999999999999").unwrap_err());
    assert_eq!(remainder, "99999999999999999999999");
}

#[test]
fn negative_segment_is_not_an_index() {
    let j = Value::from(json!([1, 2, 3]));
    let (remainder, failed_at) = path_payload(resolve(&j, "-1").unwrap_err());
    assert_eq!(remainder, "-1");
    assert_eq!(failed_at, j);
}

#[test]
fn error_message_includes_remainder_and_value() {
    let j = sample();
    let err = resolve(&j, "data/2/name").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"invalid path '2/name' for remaining value [{"name": "Alice"}, {"name": "Bob"}]"#
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_resolution_is_identical() {
    let j = sample();
    assert_eq!(
        resolve(&j, "data/1/name").unwrap(),
        resolve(&j, "data/1/name").unwrap()
    );

    let first = path_payload(resolve(&j, "data/9").unwrap_err());
    let second = path_payload(resolve(&j, "data/9").unwrap_err());
    assert_eq!(first, second);
}
