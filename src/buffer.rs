use crate::options::{DenseJsonOptions, EolStyle};

/// Accumulates output pieces line by line, then joins them into the final
/// document. The line being built stays open until `end_line`, so a parent
/// node can append a trailing comma to whatever its child left behind.
#[derive(Debug)]
pub struct LineBuffer {
    line_buff: Vec<String>,
    doc_buff: Vec<String>,
    eol: &'static str,
    indent_strings: Vec<String>,
}

impl LineBuffer {
    pub fn new(opts: &DenseJsonOptions) -> Self {
        let eol = match opts.eol_style {
            EolStyle::Crlf => "\r\n",
            EolStyle::Lf => "\n",
        };
        let unit = if opts.use_tab_to_indent {
            "\t".to_string()
        } else {
            " ".repeat(opts.indent_spaces)
        };
        Self {
            line_buff: Vec::new(),
            doc_buff: Vec::new(),
            eol,
            indent_strings: vec![String::new(), unit],
        }
    }

    pub fn add(&mut self, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.line_buff.push(value.to_string());
        }
        self
    }

    /// Append the indent prefix for the given nesting level. Prefixes are
    /// built once per level and reused.
    pub fn indent(&mut self, level: usize) -> &mut Self {
        if level >= self.indent_strings.len() {
            let unit = self.indent_strings[1].clone();
            for i in self.indent_strings.len()..=level {
                let next = format!("{}{}", self.indent_strings[i - 1], unit);
                self.indent_strings.push(next);
            }
        }
        let prefix = self.indent_strings[level].clone();
        self.add(&prefix)
    }

    pub fn end_line(&mut self) -> &mut Self {
        let mut line = self.line_buff.join("");
        line.push_str(self.eol);
        self.doc_buff.push(line);
        self.line_buff.clear();
        self
    }

    /// Close the final (eol-less) line and join the document.
    pub fn into_string(mut self) -> String {
        if !self.line_buff.is_empty() {
            let line = self.line_buff.join("");
            self.doc_buff.push(line);
        }
        self.doc_buff.join("")
    }
}
