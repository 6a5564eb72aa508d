//! TypeScript enum builder.

use scribe_codegen::{CodeBuilder, CodeFragment, Renderable, naming};

use crate::expr::TsExpr;

/// How enum member keys are formatted on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumKeyFormat {
    /// Keys render exactly as declared.
    #[default]
    Preserve,
    /// Keys render in PascalCase.
    PascalCase,
    /// Keys render in CONSTANT_CASE.
    ConstantCase,
}

impl EnumKeyFormat {
    fn apply(&self, key: &str) -> String {
        match self {
            Self::Preserve => key.to_string(),
            Self::PascalCase => naming::to_pascal_case(key),
            Self::ConstantCase => naming::to_constant_case(key),
        }
    }
}

/// One enum member, with an optional initializer.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub key: String,
    pub value: Option<TsExpr>,
}

/// Builder for TypeScript enums.
#[derive(Debug, Clone)]
pub struct TsEnum {
    name: String,
    doc: Option<String>,
    members: Vec<EnumMember>,
    key_format: EnumKeyFormat,
    const_enum: bool,
    exported: bool,
}

impl TsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
            key_format: EnumKeyFormat::default(),
            const_enum: false,
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a member without an initializer.
    pub fn member(mut self, key: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            key: key.into(),
            value: None,
        });
        self
    }

    /// Add a member with a string initializer.
    pub fn member_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            key: key.into(),
            value: Some(TsExpr::string(value)),
        });
        self
    }

    /// Add a member with an arbitrary initializer expression.
    pub fn member_expr(mut self, key: impl Into<String>, value: TsExpr) -> Self {
        self.members.push(EnumMember {
            key: key.into(),
            value: Some(value),
        });
        self
    }

    /// Format member keys on render.
    pub fn key_format(mut self, format: EnumKeyFormat) -> Self {
        self.key_format = format;
        self
    }

    /// Emit as a `const enum`.
    pub fn const_enum(mut self) -> Self {
        self.const_enum = true;
        self
    }

    /// Make this enum private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        self.members
            .iter()
            .map(|member| {
                let key = self.key_format.apply(&member.key);
                match &member.value {
                    Some(value) => CodeFragment::Line(format!("{} = {},", key, value)),
                    None => CodeFragment::Line(format!("{},", key)),
                }
            })
            .collect()
    }
}

impl Renderable for TsEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let const_kw = if self.const_enum { "const " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}{}enum {} {{}}",
                export, const_kw, self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{}{}enum {} {{", export, const_kw, self.name),
                body: self.members_to_fragments(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}
