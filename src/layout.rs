use serde::Serialize;

use crate::buffer::LineBuffer;
use crate::classify::{classify, Classification};
use crate::convert::from_json;
use crate::error::DenseJsonError;
use crate::model::{quoted, Value};
use crate::options::DenseJsonOptions;

/// Rendering refuses to descend past this many nesting levels.
pub(crate) const MAX_RENDER_DEPTH: usize = 256;

/// Renders nested values as JSON text denser than a naive indenter.
///
/// Containers whose children are all atomic collapse onto a single line;
/// everything else expands with one indent unit per nesting level. The
/// output stays parseable by any standard JSON reader as long as the tree
/// holds only plain JSON kinds.
pub struct Renderer {
    pub options: DenseJsonOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self { options: DenseJsonOptions::default() }
    }

    /// Render a value to text. All-or-nothing: on failure no partial
    /// output is returned.
    pub fn render(&self, value: &Value) -> Result<String, DenseJsonError> {
        let mut buff = LineBuffer::new(&self.options);
        self.write_value(value, &mut buff, 0, true, MAX_RENDER_DEPTH)?;
        Ok(buff.into_string())
    }

    /// Serialize any `serde::Serialize` type and render the result.
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use densejson::Renderer;
    ///
    /// #[derive(Serialize)]
    /// struct Player {
    ///     name: String,
    ///     scores: Vec<i32>,
    /// }
    ///
    /// let player = Player { name: "Alice".into(), scores: vec![95, 87, 92] };
    /// let text = Renderer::new().serialize(&player).unwrap();
    /// assert_eq!(text, "{\n    \"name\": \"Alice\",\n    \"scores\": [95, 87, 92]\n}");
    /// ```
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, DenseJsonError> {
        let json = serde_json::to_value(value)?;
        self.render(&from_json(json))
    }

    /// One node of the recursion. `inline` suppresses the leading indent
    /// prefix when the node sits right after its `"key": ` or is the
    /// top-level call target; a standalone list element emits its own.
    fn write_value(
        &self,
        value: &Value,
        buff: &mut LineBuffer,
        level: usize,
        inline: bool,
        remaining_depth: usize,
    ) -> Result<(), DenseJsonError> {
        if remaining_depth == 0 {
            return Err(DenseJsonError::Depth { limit: MAX_RENDER_DEPTH });
        }
        if !inline {
            buff.indent(level);
        }

        let expand = classify(value) == Classification::ExpandableCompound;
        match value {
            Value::Map(pairs) if expand => {
                buff.add("{").end_line();
                for (i, (key, child)) in pairs.iter().enumerate() {
                    buff.indent(level + 1).add(&quoted(key)).add(": ");
                    self.write_value(child, buff, level + 1, true, remaining_depth - 1)?;
                    if i + 1 < pairs.len() {
                        buff.add(",");
                    }
                    buff.end_line();
                }
                buff.indent(level).add("}");
            }
            Value::Seq(items) if expand => {
                buff.add("[").end_line();
                for (i, child) in items.iter().enumerate() {
                    self.write_value(child, buff, level + 1, false, remaining_depth - 1)?;
                    if i + 1 < items.len() {
                        buff.add(",");
                    }
                    buff.end_line();
                }
                buff.indent(level).add("]");
            }
            // Atomic, or a compound of atomics: the one-line form.
            _ => {
                buff.add(&value.to_string());
            }
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a value with default options (4-space indent, LF line endings).
///
/// ```rust
/// use densejson::{render, Value};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": 1, "b": [2, 3], "c": {"d": 4}}));
/// assert_eq!(
///     render(&tree).unwrap(),
///     "{\n    \"a\": 1,\n    \"b\": [2, 3],\n    \"c\": {\"d\": 4}\n}"
/// );
/// ```
pub fn render(value: &Value) -> Result<String, DenseJsonError> {
    Renderer::new().render(value)
}
