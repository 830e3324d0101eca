use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// A nested value: the tree that rendering and path resolution operate on.
///
/// This is a closed sum type, so the classifier and the layout engine can
/// match exhaustively instead of inspecting types at runtime. Mappings keep
/// their pairs in insertion order; keys are expected to be unique.
///
/// The date, datetime and decimal kinds render as their canonical string
/// form, quoted. Reparsing such output yields plain strings, so text
/// round-trips are only lossless for the plain JSON kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating-point number. Non-finite values render as `null`.
    Float(f64),
    /// Text string.
    Str(String),
    /// Calendar date, rendered as `"2010-12-24"`.
    Date(NaiveDate),
    /// Date and time, rendered as `"2010-12-24 07:06:00"`.
    DateTime(NaiveDateTime),
    /// Arbitrary-precision decimal, rendered as a quoted string.
    Decimal(Decimal),
    /// Ordered list of values.
    Seq(Vec<Value>),
    /// Insertion-ordered key/value pairs.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Short name of this value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Decimal(_) => "decimal",
            Value::Seq(_) => "list",
            Value::Map(_) => "dict",
        }
    }

    /// Look up a key in a mapping. Returns `None` for absent keys and for
    /// any non-mapping value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Quote a string as a JSON literal.
pub(crate) fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Compact one-line JSON form, with `", "` and `": "` separators.
///
/// This is also the single-line form the dense renderer emits for values
/// whose children are all atomic.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(n) => write!(f, "{}", n),
                None => f.write_str("null"),
            },
            Value::Str(s) => f.write_str(&quoted(s)),
            Value::Date(d) => f.write_str(&quoted(&d.to_string())),
            Value::DateTime(dt) => f.write_str(&quoted(&dt.to_string())),
            Value::Decimal(d) => f.write_str(&quoted(&d.to_string())),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", quoted(key), value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.naive_utc())
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// Unordered source collections become sequences; the element order in the
/// output is whatever the set's iteration yields.
impl<T: Into<Value>> From<HashSet<T>> for Value {
    fn from(items: HashSet<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(items: BTreeSet<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// Collect key/value pairs into a mapping, keeping insertion order.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
