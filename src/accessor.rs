use crate::error::DenseJsonError;
use crate::model::Value;
use crate::path::is_index;

/// A read-only façade over a nested list or dict.
///
/// Field lookup works one level deep only: the child comes back as-is, not
/// wrapped in another `Accessor`, so anything deeper goes through
/// [`resolve`](Accessor::resolve).
///
/// ```
/// use densejson::{Accessor, Value};
/// use serde_json::json;
///
/// let obj = Accessor::new(Value::from(json!({"a": 1, "b": {"c": 2}}))).unwrap();
/// assert_eq!(obj.get("a"), Some(&Value::Int(1)));
/// assert_eq!(obj.get("missing"), None);
/// assert_eq!(obj.resolve("b/c").unwrap(), Value::Int(2));
/// ```
#[derive(Debug, Clone)]
pub struct Accessor {
    root: Value,
}

impl Accessor {
    /// Wrap a list or dict. Any scalar root is rejected with a Type error
    /// naming the offending kind.
    ///
    /// ```
    /// use densejson::{Accessor, Value};
    ///
    /// let err = Accessor::new(Value::Int(17)).unwrap_err();
    /// assert_eq!(err.to_string(), "expected list or dict, got 'int'");
    /// ```
    pub fn new(root: Value) -> Result<Self, DenseJsonError> {
        match root {
            Value::Seq(_) | Value::Map(_) => Ok(Self { root }),
            other => Err(DenseJsonError::type_mismatch(&other)),
        }
    }

    /// The wrapped root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Single-level field read: the named key of the root dict, or `None`
    /// when absent (or when the root is a list).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// Walk a slash path from the retained root.
    ///
    /// Same rules as the free [`resolve`](crate::resolve), with one
    /// deliberate extension: a digit segment against a string cursor
    /// selects the character at that position, yielding a new one-character
    /// string. That synthesized value is why this method returns an owned
    /// `Value` where the free function can hand back a borrow.
    ///
    /// ```
    /// use densejson::{Accessor, Value};
    /// use serde_json::json;
    ///
    /// let obj = Accessor::new(Value::from(json!({"name": "Alice"}))).unwrap();
    /// assert_eq!(obj.resolve("name/0").unwrap(), Value::from("A"));
    /// ```
    pub fn resolve(&self, path: &str) -> Result<Value, DenseJsonError> {
        let segments: Vec<&str> = path.split('/').collect();
        let mut cursor = self.root.clone();
        for (i, segment) in segments.iter().enumerate() {
            let next = match &cursor {
                Value::Seq(items) if is_index(segment) => {
                    segment.parse::<usize>().ok().and_then(|n| items.get(n)).cloned()
                }
                Value::Str(text) if is_index(segment) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| text.chars().nth(n))
                    .map(|ch| Value::Str(ch.to_string())),
                Value::Map(_) => cursor.get(segment).cloned(),
                _ => None,
            };
            cursor = match next {
                Some(value) => value,
                None => return Err(DenseJsonError::path(&segments[i..], cursor)),
            };
        }
        Ok(cursor)
    }
}
