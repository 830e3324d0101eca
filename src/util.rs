//! Small helpers for working with lists of dicts.

use crate::model::Value;

/// Reduce a list of dicts to the fields whose keys contain any of the
/// given substring terms. Documents with no matching field are dropped
/// entirely, as is any element that is not a dict.
///
/// ```
/// use densejson::util::only_matching_fields;
/// use densejson::Value;
/// use serde_json::json;
///
/// let docs = match Value::from(json!([
///     {"a": 1, "b": 2, "c": 3},
///     {"b": 3, "c": 4, "d": 5},
///     {"d": 6, "e": 7}
/// ])) {
///     Value::Seq(items) => items,
///     _ => unreachable!(),
/// };
/// let kept = only_matching_fields(&docs, &["b", "c"]);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0], Value::from(json!({"b": 2, "c": 3})));
/// assert_eq!(kept[1], Value::from(json!({"b": 3, "c": 4})));
/// ```
pub fn only_matching_fields(documents: &[Value], terms: &[&str]) -> Vec<Value> {
    let mut result = Vec::new();
    for document in documents {
        let pairs = match document {
            Value::Map(pairs) => pairs,
            _ => continue,
        };
        let matching: Vec<(String, Value)> = pairs
            .iter()
            .filter(|(key, _)| terms.iter().any(|term| key.contains(term)))
            .cloned()
            .collect();
        if !matching.is_empty() {
            result.push(Value::Map(matching));
        }
    }
    result
}
