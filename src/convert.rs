use crate::model::Value;

/// Convert a parsed `serde_json` tree into a [`Value`].
///
/// Numbers that fit `i64` become `Int`; everything else becomes `Float`
/// (a `u64` above `i64::MAX` loses precision on the way). Object key order
/// is preserved, since `serde_json` is built with `preserve_order`.
pub fn from_json(element: serde_json::Value) -> Value {
    match element {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(n) => Value::Int(n),
            None => Value::Float(num.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => {
            Value::Seq(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => {
            Value::Map(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

/// Convert a [`Value`] back into a `serde_json` tree.
///
/// The date, datetime and decimal kinds become plain strings; this is the
/// documented lossy direction. Non-finite floats become `null`, matching
/// what `serde_json` does when serializing `f64`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number((*n).into()),
        Value::Float(x) => match serde_json::Number::from_f64(*x) {
            Some(n) => serde_json::Value::Number(n),
            None => serde_json::Value::Null,
        },
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Date(d) => serde_json::Value::String(d.to_string()),
        Value::DateTime(dt) => serde_json::Value::String(dt.to_string()),
        Value::Decimal(d) => serde_json::Value::String(d.to_string()),
        Value::Seq(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Map(pairs) => serde_json::Value::Object(
            pairs.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

impl From<serde_json::Value> for Value {
    fn from(element: serde_json::Value) -> Self {
        from_json(element)
    }
}
