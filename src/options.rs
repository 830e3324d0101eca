/// Line ending style for the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolStyle {
    /// Windows-style line endings (`\r\n`).
    Crlf,
    /// Unix-style line endings (`\n`).
    Lf,
}

/// Configuration options for dense rendering.
///
/// Use [`Default::default()`] or [`DenseJsonOptions::recommended()`] for
/// sensible defaults, then modify individual fields as needed.
///
/// # Example
///
/// ```rust
/// use densejson::{DenseJsonOptions, EolStyle};
///
/// let mut options = DenseJsonOptions::default();
/// options.indent_spaces = 2;
/// options.eol_style = EolStyle::Crlf;
/// ```
#[derive(Debug, Clone)]
pub struct DenseJsonOptions {
    /// Number of spaces per indentation level. Ignored if `use_tab_to_indent`
    /// is true. Default: 4.
    pub indent_spaces: usize,

    /// Use tabs instead of spaces for indentation.
    /// Default: false.
    pub use_tab_to_indent: bool,

    /// Line ending style for the output. Default: [`EolStyle::Lf`].
    pub eol_style: EolStyle,
}

impl Default for DenseJsonOptions {
    fn default() -> Self {
        Self {
            indent_spaces: 4,
            use_tab_to_indent: false,
            eol_style: EolStyle::Lf,
        }
    }
}

impl DenseJsonOptions {
    /// Creates a new `DenseJsonOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
