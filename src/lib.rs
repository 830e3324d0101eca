//! # DenseJson
//!
//! Dense, human-friendly JSON rendering with slash-path navigation into
//! nested values.
//!
//! DenseJson renders nested data noticeably denser than a naive indenter:
//!
//! - Containers whose immediate children are all atomic collapse onto one
//!   line; everything else expands with one indent unit per nesting level
//! - Dates, datetimes and decimals render as their canonical string form,
//!   quoted, so the output stays valid JSON
//! - A slash path like `"data/0/name"` reads a value out of the tree
//!   without chained indexing, and failures report exactly where the walk
//!   stopped and on what value
//!
//! ## Command-Line Tool
//!
//! This crate includes the `djson` CLI tool for dense-rendering JSON from
//! the terminal:
//!
//! ```sh
//! # Install
//! cargo install densejson
//!
//! # Densely format JSON from stdin
//! echo '{"a":1,"b":[2,3]}' | djson
//!
//! # Pull one value out first
//! djson input.json --path data/0/name
//! ```
//!
//! Run `djson --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use densejson::{render, resolve, Value};
//! use serde_json::json;
//!
//! let tree = Value::from(json!({"a": 1, "b": [2, 3], "c": {"d": 4, "e": [5, 6]}}));
//!
//! println!("{}", render(&tree).unwrap());
//! // {
//! //     "a": 1,
//! //     "b": [2, 3],
//! //     "c": {
//! //         "d": 4,
//! //         "e": [5, 6]
//! //     }
//! // }
//!
//! assert_eq!(resolve(&tree, "c/e/1").unwrap(), &Value::Int(6));
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered directly:
//!
//! ```rust
//! use densejson::Renderer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let output = Renderer::new().serialize(&player).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Customize rendering through [`DenseJsonOptions`]:
//!
//! ```rust
//! use densejson::{Renderer, EolStyle};
//!
//! let mut renderer = Renderer::new();
//! renderer.options.indent_spaces = 2;
//! renderer.options.eol_style = EolStyle::Lf;
//! ```
//!
//! ## Path Access
//!
//! [`Accessor`] wraps a tree for repeated reads. Field lookup works one
//! level deep; slash paths go anywhere:
//!
//! ```rust
//! use densejson::{Accessor, Value};
//! use serde_json::json;
//!
//! let obj = Accessor::new(Value::from(json!({"a": 1, "b": {"c": 2}}))).unwrap();
//! assert_eq!(obj.get("a"), Some(&Value::Int(1)));
//! assert_eq!(obj.resolve("b/c").unwrap(), Value::Int(2));
//! ```

mod accessor;
mod buffer;
mod classify;
mod convert;
pub mod dating;
mod error;
mod layout;
mod model;
mod options;
mod path;
pub mod timer;
pub mod util;

pub use crate::accessor::Accessor;
pub use crate::classify::{classify, is_atomic, Classification};
pub use crate::convert::{from_json, to_json};
pub use crate::error::DenseJsonError;
pub use crate::layout::{render, Renderer};
pub use crate::model::Value;
pub use crate::options::{DenseJsonOptions, EolStyle};
pub use crate::path::resolve;
