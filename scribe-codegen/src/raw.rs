//! Wrap pre-rendered text so it composes with structured fragments.

use crate::builder::{CodeFragment, Renderable};

/// A pre-rendered code fragment that implements Renderable.
///
/// Splits its text into line fragments on render, which keeps already
/// formatted snippets indentation-aware when nested inside blocks.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    #[test]
    fn test_raw_code_single_line() {
        let code = CodeBuilder::typescript()
            .emit(&RawCode::new("const x = 1;"))
            .build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_raw_code_lines() {
        let raw = RawCode::lines(["const a = 1;", "const b = 2;"]);
        let code = CodeBuilder::typescript().emit(&raw).build();
        assert_eq!(code, "const a = 1;\nconst b = 2;\n");
    }
}
