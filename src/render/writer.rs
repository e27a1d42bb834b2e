// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Indent-aware line builder and artifact assembly.

const INDENT: &str = "    ";

/// Line-oriented source builder.
///
/// # Example
///
/// ```
/// use declsynth::render::SourceWriter;
///
/// let mut w = SourceWriter::new();
/// w.open("impl Vm").line("fn f() {}").close();
/// assert_eq!(w.finish(), "impl Vm {\n    fn f() {}\n}\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SourceWriter {
    buf:    String,
    indent: usize
}

impl SourceWriter {
    /// Empty writer at indent level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent. Empty text gives a blank line.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Append a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Append `text {` and indent.
    pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", text.as_ref()));
        self.indent += 1;
        self
    }

    /// Dedent and append `}`.
    pub fn close(&mut self) -> &mut Self {
        self.close_with("}")
    }

    /// Dedent and append a custom closing line such as `});`.
    pub fn close_with(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.line(text)
    }

    /// Append `///` doc lines.
    pub fn doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
        self
    }

    /// Consume the writer and return its text.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Header plus ordered sections.
#[derive(Debug, Default, Clone)]
pub struct ArtifactText {
    header:   Vec<String>,
    sections: Vec<String>
}

impl ArtifactText {
    /// Start an artifact with the given header lines.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            sections: Vec::new()
        }
    }

    /// Append a section. Empty sections are dropped.
    pub fn section(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        let trimmed = text.trim_matches('\n');
        if !trimmed.is_empty() {
            self.sections.push(trimmed.to_string());
        }
        self
    }

    /// Join header and sections with one blank line between each.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.sections.len() + 1);
        if !self.header.is_empty() {
            parts.push(self.header.join("\n"));
        }
        parts.extend(self.sections.iter().cloned());
        let mut out = parts.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_blocks_indent() {
        let mut w = SourceWriter::new();
        w.open("impl A")
            .open("fn f(&self)")
            .line("1")
            .close()
            .blank()
            .line("const X: u8 = 0;")
            .close();
        assert_eq!(
            w.finish(),
            "impl A {\n    fn f(&self) {\n        1\n    }\n\n    const X: u8 = 0;\n}\n"
        );
    }

    #[test]
    fn doc_lines_keep_blank_paragraphs() {
        let mut w = SourceWriter::new();
        w.doc("Summary.\n\nDetails.");
        assert_eq!(w.finish(), "/// Summary.\n///\n/// Details.\n");
    }

    #[test]
    fn close_never_underflows() {
        let mut w = SourceWriter::new();
        w.close().line("x");
        assert_eq!(w.finish(), "}\nx\n");
    }

    #[test]
    fn sections_are_separated_by_one_blank_line() {
        let mut text = ArtifactText::new(vec!["// header".to_string()]);
        text.section("a\n\n").section("").section("\nb\n");
        assert_eq!(text.render(), "// header\n\na\n\nb\n");
    }
}
