use crate::error::DenseJsonError;
use crate::model::Value;

/// True when a segment can act as a sequence index: ASCII digits only.
/// `"007"` counts (index 7); `"-1"` and `""` do not.
pub(crate) fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Dive into nested dicts and lists of known structure, like API returns.
///
/// `path` is split on `/`; each segment selects one level. A segment of
/// digits is an index only while the cursor is a list; against a dict it is
/// an ordinary key, even if numeric. This does NOT dive into strings by
/// position, just because strings are indexable like lists, because that is
/// usually not what you want (the [`Accessor`](crate::Accessor) variant
/// does).
///
/// On failure the error carries the unresolved remainder of the path and
/// the value the walk was standing on; nothing else.
///
/// ```
/// use densejson::{resolve, Value};
/// use serde_json::json;
///
/// let j = Value::from(json!({"data": [{"name": "Alice"}, {"name": "Bob"}]}));
/// assert_eq!(resolve(&j, "data/0/name").unwrap(), &Value::from("Alice"));
/// assert_eq!(resolve(&j, "data/1/name").unwrap(), &Value::from("Bob"));
///
/// let err = resolve(&j, "data/2/name").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     r#"invalid path '2/name' for remaining value [{"name": "Alice"}, {"name": "Bob"}]"#
/// );
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<&'a Value, DenseJsonError> {
    let segments: Vec<&str> = path.split('/').collect();
    let mut cursor = root;
    for (i, segment) in segments.iter().enumerate() {
        let next = match cursor {
            Value::Seq(items) if is_index(segment) => {
                segment.parse::<usize>().ok().and_then(|n| items.get(n))
            }
            Value::Map(_) => cursor.get(segment),
            _ => None,
        };
        cursor = match next {
            Some(value) => value,
            None => return Err(DenseJsonError::path(&segments[i..], cursor.clone())),
        };
    }
    Ok(cursor)
}
