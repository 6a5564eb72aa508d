//! TypeScript type alias and union builders.

use scribe_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        )));

        fragments
    }
}

/// Builder for TypeScript union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
    exported: bool,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "{}type {} = {};",
            export,
            self.name,
            self.variants.join(" | ")
        )));

        fragments
    }
}
