//! Control-flow statement builders.
//!
//! Unlike the declaration builders, statements have required parts. A
//! statement missing one of them fails loudly at render time with an
//! [`Error`](crate::Error) naming the missing piece and the construct kind,
//! never silently producing invalid output.

use scribe_codegen::{CodeBuilder, CodeFragment};

use crate::error::{Error, Result};

/// Builder for `if` / `else if` / `else` chains.
///
/// Condition and at least one `then` line are required.
#[derive(Debug, Clone, Default)]
pub struct IfStatement {
    condition: Option<String>,
    then_body: Vec<CodeFragment>,
    else_ifs: Vec<(String, Vec<CodeFragment>)>,
    else_body: Vec<CodeFragment>,
}

impl IfStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Add a line to the `then` block.
    pub fn then_line(mut self, line: impl Into<String>) -> Self {
        self.then_body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add arbitrary fragments to the `then` block, for nested constructs.
    pub fn then_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.then_body.extend(fragments);
        self
    }

    /// Add an `else if` branch.
    pub fn else_if(
        mut self,
        condition: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let body = lines
            .into_iter()
            .map(|l| CodeFragment::Line(l.into()))
            .collect();
        self.else_ifs.push((condition.into(), body));
        self
    }

    /// Add a line to the `else` block.
    pub fn else_line(mut self, line: impl Into<String>) -> Self {
        self.else_body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        let condition = self
            .condition
            .as_ref()
            .ok_or(Error::missing("if", "condition"))?;
        if self.then_body.is_empty() {
            return Err(Error::missing("if", "then block"));
        }

        let mut fragments = vec![CodeFragment::Block {
            header: format!("if ({}) {{", condition),
            body: self.then_body.clone(),
            close: None,
        }];
        for (condition, body) in &self.else_ifs {
            fragments.push(CodeFragment::Block {
                header: format!("}} else if ({}) {{", condition),
                body: body.clone(),
                close: None,
            });
        }
        if !self.else_body.is_empty() {
            fragments.push(CodeFragment::Block {
                header: "} else {".to_string(),
                body: self.else_body.clone(),
                close: None,
            });
        }
        fragments.push(CodeFragment::Line("}".to_string()));
        Ok(fragments)
    }

    /// Build the statement as a string.
    pub fn build(&self) -> Result<String> {
        build_fragments(self.to_fragments()?)
    }
}

/// One `case` clause in a switch.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub test: String,
    pub body: Vec<CodeFragment>,
    pub fall_through: bool,
}

impl SwitchCase {
    pub fn new(
        test: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            test: test.into(),
            body: lines
                .into_iter()
                .map(|l| CodeFragment::Line(l.into()))
                .collect(),
            fall_through: false,
        }
    }

    /// Omit the trailing `break;`.
    pub fn fall_through(mut self) -> Self {
        self.fall_through = true;
        self
    }
}

/// Builder for `switch` statements. The discriminant is required.
#[derive(Debug, Clone, Default)]
pub struct SwitchStatement {
    discriminant: Option<String>,
    cases: Vec<SwitchCase>,
    default_body: Vec<CodeFragment>,
}

impl SwitchStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discriminant(mut self, expr: impl Into<String>) -> Self {
        self.discriminant = Some(expr.into());
        self
    }

    pub fn case(mut self, case: SwitchCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Add lines to the `default` clause.
    pub fn default_case(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.default_body
            .extend(lines.into_iter().map(|l| CodeFragment::Line(l.into())));
        self
    }

    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        let discriminant = self
            .discriminant
            .as_ref()
            .ok_or(Error::missing("switch", "discriminant"))?;

        let mut body = Vec::new();
        for case in &self.cases {
            body.push(CodeFragment::Line(format!("case {}:", case.test)));
            let mut clause = case.body.clone();
            if !case.fall_through {
                clause.push(CodeFragment::Line("break;".to_string()));
            }
            body.push(CodeFragment::Indent(clause));
        }
        if !self.default_body.is_empty() {
            body.push(CodeFragment::Line("default:".to_string()));
            body.push(CodeFragment::Indent(self.default_body.clone()));
        }

        Ok(vec![CodeFragment::Block {
            header: format!("switch ({}) {{", discriminant),
            body,
            close: Some("}".to_string()),
        }])
    }

    /// Build the statement as a string.
    pub fn build(&self) -> Result<String> {
        build_fragments(self.to_fragments()?)
    }
}

/// Builder for classic `for` loops. Init, condition, and update are
/// optional; the body is required.
#[derive(Debug, Clone, Default)]
pub struct ForStatement {
    init: Option<String>,
    condition: Option<String>,
    update: Option<String>,
    body: Vec<CodeFragment>,
}

impl ForStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(mut self, init: impl Into<String>) -> Self {
        self.init = Some(init.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn update(mut self, update: impl Into<String>) -> Self {
        self.update = Some(update.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        if self.body.is_empty() {
            return Err(Error::missing("for", "body"));
        }

        let header = format!(
            "for ({}; {}; {}) {{",
            self.init.as_deref().unwrap_or(""),
            self.condition.as_deref().unwrap_or(""),
            self.update.as_deref().unwrap_or("")
        );
        Ok(vec![CodeFragment::Block {
            header,
            body: self.body.clone(),
            close: Some("}".to_string()),
        }])
    }

    /// Build the statement as a string.
    pub fn build(&self) -> Result<String> {
        build_fragments(self.to_fragments()?)
    }
}

/// Builder for `while` loops. Condition and body are required.
#[derive(Debug, Clone, Default)]
pub struct WhileStatement {
    condition: Option<String>,
    body: Vec<CodeFragment>,
}

impl WhileStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        let condition = self
            .condition
            .as_ref()
            .ok_or(Error::missing("while", "condition"))?;
        if self.body.is_empty() {
            return Err(Error::missing("while", "body"));
        }

        Ok(vec![CodeFragment::Block {
            header: format!("while ({}) {{", condition),
            body: self.body.clone(),
            close: Some("}".to_string()),
        }])
    }

    /// Build the statement as a string.
    pub fn build(&self) -> Result<String> {
        build_fragments(self.to_fragments()?)
    }
}

/// Builder for `do ... while` loops. Body and condition are required.
#[derive(Debug, Clone, Default)]
pub struct DoWhileStatement {
    condition: Option<String>,
    body: Vec<CodeFragment>,
}

impl DoWhileStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        let condition = self
            .condition
            .as_ref()
            .ok_or(Error::missing("do-while", "condition"))?;
        if self.body.is_empty() {
            return Err(Error::missing("do-while", "body"));
        }

        Ok(vec![CodeFragment::Block {
            header: "do {".to_string(),
            body: self.body.clone(),
            close: Some(format!("}} while ({});", condition)),
        }])
    }

    /// Build the statement as a string.
    pub fn build(&self) -> Result<String> {
        build_fragments(self.to_fragments()?)
    }
}

/// A queued control-flow construct. Rendering is deferred to section
/// generation so that misconfiguration surfaces as a `generate()` error.
#[derive(Debug, Clone)]
pub enum Statement {
    If(IfStatement),
    Switch(SwitchStatement),
    For(ForStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
}

impl Statement {
    /// Render to fragments, validating required parts.
    pub fn to_fragments(&self) -> Result<Vec<CodeFragment>> {
        match self {
            Self::If(s) => s.to_fragments(),
            Self::Switch(s) => s.to_fragments(),
            Self::For(s) => s.to_fragments(),
            Self::While(s) => s.to_fragments(),
            Self::DoWhile(s) => s.to_fragments(),
        }
    }
}

fn build_fragments(fragments: Vec<CodeFragment>) -> Result<String> {
    let mut builder = CodeBuilder::typescript();
    for fragment in fragments {
        builder.apply_fragment(fragment);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_requires_condition() {
        let err = IfStatement::new().then_line("run();").build().unwrap_err();
        assert_eq!(err.to_string(), "condition is required for if statement");
    }

    #[test]
    fn test_if_requires_then_block() {
        let err = IfStatement::new().condition("ready").build().unwrap_err();
        assert_eq!(err.to_string(), "then block is required for if statement");
    }

    #[test]
    fn test_if_else_chain() {
        let code = IfStatement::new()
            .condition("x > 0")
            .then_line("return x;")
            .else_if("x < 0", ["return -x;"])
            .else_line("return 0;")
            .build()
            .unwrap();
        assert_eq!(
            code,
            "if (x > 0) {\n  return x;\n} else if (x < 0) {\n  return -x;\n} else {\n  return 0;\n}\n"
        );
    }

    #[test]
    fn test_switch_requires_discriminant() {
        let err = SwitchStatement::new().build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "discriminant is required for switch statement"
        );
    }

    #[test]
    fn test_switch_with_cases_and_default() {
        let code = SwitchStatement::new()
            .discriminant("kind")
            .case(SwitchCase::new("\"a\"", ["handleA();"]))
            .case(SwitchCase::new("\"b\"", ["handleB();"]).fall_through())
            .default_case(["handleRest();"])
            .build()
            .unwrap();
        assert!(code.starts_with("switch (kind) {\n"));
        assert!(code.contains("case \"a\":\n    handleA();\n    break;\n"));
        assert!(code.contains("case \"b\":\n    handleB();\n"));
        assert!(!code.contains("handleB();\n    break;"));
        assert!(code.contains("default:\n    handleRest();\n"));
    }

    #[test]
    fn test_for_requires_body() {
        let err = ForStatement::new().condition("i < 10").build().unwrap_err();
        assert_eq!(err.to_string(), "body is required for for statement");
    }

    #[test]
    fn test_for_with_optional_clauses() {
        let code = ForStatement::new()
            .init("let i = 0")
            .condition("i < items.length")
            .update("i++")
            .body_line("visit(items[i]);")
            .build()
            .unwrap();
        assert_eq!(
            code,
            "for (let i = 0; i < items.length; i++) {\n  visit(items[i]);\n}\n"
        );
    }

    #[test]
    fn test_bare_for() {
        let code = ForStatement::new().body_line("tick();").build().unwrap();
        assert_eq!(code, "for (; ; ) {\n  tick();\n}\n");
    }

    #[test]
    fn test_while() {
        let code = WhileStatement::new()
            .condition("queue.length > 0")
            .body_line("drain();")
            .build()
            .unwrap();
        assert_eq!(code, "while (queue.length > 0) {\n  drain();\n}\n");
    }

    #[test]
    fn test_while_requires_condition_and_body() {
        let err = WhileStatement::new().body_line("x();").build().unwrap_err();
        assert_eq!(err.to_string(), "condition is required for while statement");

        let err = WhileStatement::new().condition("x").build().unwrap_err();
        assert_eq!(err.to_string(), "body is required for while statement");
    }

    #[test]
    fn test_do_while() {
        let code = DoWhileStatement::new()
            .condition("retry < 3")
            .body_line("attempt();")
            .build()
            .unwrap();
        assert_eq!(code, "do {\n  attempt();\n} while (retry < 3);\n");
    }

    #[test]
    fn test_nested_statement() {
        let inner = IfStatement::new()
            .condition("item.ready")
            .then_line("emit(item);")
            .to_fragments()
            .unwrap();
        let code = WhileStatement::new()
            .condition("hasNext()")
            .body_fragments(inner)
            .build()
            .unwrap();
        assert_eq!(
            code,
            "while (hasNext()) {\n  if (item.ready) {\n    emit(item);\n  }\n}\n"
        );
    }
}
