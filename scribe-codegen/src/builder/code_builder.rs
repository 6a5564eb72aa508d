//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use scribe_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function main() {")
///     .indent()
///     .line("console.log(\"Hello, world!\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function main() {\n  console.log(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (TS/JS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use scribe_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("if (ready) {", "}", |b: CodeBuilder| {
    ///         b.line("start();")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a JSDoc comment (`/** text */` for single line).
    pub fn jsdoc(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Add a line comment (`// text`).
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(mut self, node: &impl Renderable) -> Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.write_indent();
                self.buffer.push_str(&s);
                self.buffer.push('\n');
            }
            CodeFragment::Blank => {
                self.buffer.push('\n');
            }
            CodeFragment::Raw(s) => {
                self.buffer.push_str(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_indent();
                self.buffer.push_str(&header);
                self.buffer.push('\n');
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.write_indent();
                    self.buffer.push_str(&c);
                    self.buffer.push('\n');
                }
            }
            CodeFragment::Indent(fragments) => {
                self.indent_level += 1;
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.write_indent();
                self.buffer.push_str("/** ");
                self.buffer.push_str(&text);
                self.buffer.push_str(" */\n");
            }
            CodeFragment::LineComment(text) => {
                self.write_indent();
                self.buffer.push_str("// ");
                self.buffer.push_str(&text);
                self.buffer.push('\n');
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function main() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function main() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::typescript()
            .block_with_close("if (ready) {", "}", |b| b.line("start();"))
            .build();

        assert_eq!(code, "if (ready) {\n  start();\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::typescript()
            .line("import \"./polyfill\";")
            .blank()
            .line("main();")
            .build();

        assert_eq!(code, "import \"./polyfill\";\n\nmain();\n");
    }

    #[test]
    fn test_comments() {
        let code = CodeBuilder::typescript()
            .comment("section: models")
            .jsdoc("A user record")
            .line("interface User {}")
            .build();

        assert_eq!(
            code,
            "// section: models\n/** A user record */\ninterface User {}\n"
        );
    }

    #[test]
    fn test_conditional() {
        let exported = CodeBuilder::typescript()
            .when(true, |b| b.raw("export "))
            .line("const x = 1;")
            .build();

        let private = CodeBuilder::typescript()
            .when(false, |b| b.raw("export "))
            .line("const x = 1;")
            .build();

        assert_eq!(exported, "export const x = 1;\n");
        assert_eq!(private, "const x = 1;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .line("enum Color {")
            .indent()
            .each(["Red", "Green", "Blue"], |b, color| {
                b.line(&format!("{},", color))
            })
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n  Red,\n  Green,\n  Blue,\n}\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("entry"),
                    CodeFragment::line("main();"),
                ]
            }
        }

        let code = CodeBuilder::typescript().emit(&SimpleNode).build();
        assert_eq!(code, "// entry\nmain();\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "function main() {".to_string(),
                    body: vec![CodeFragment::Line("run();".to_string())],
                    close: Some("}".to_string()),
                }]
            }
        }

        let code = CodeBuilder::typescript().emit(&BlockNode).build();
        assert_eq!(code, "function main() {\n  run();\n}\n");
    }
}
