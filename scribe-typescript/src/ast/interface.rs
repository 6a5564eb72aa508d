//! TypeScript interface builder.

use scribe_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    extends: Vec<String>,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            extends: Vec::new(),
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a base interface to the extends clause.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let extends = if self.extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", self.extends.join(", "))
        };
        format!("{}interface {}{}", export, self.name, extends)
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .flat_map(|field| {
                let mut fragments = Vec::new();
                if let Some(doc) = &field.doc {
                    fragments.push(CodeFragment::JsDoc(doc.clone()));
                }
                let readonly = if field.readonly { "readonly " } else { "" };
                let optional = if field.optional { "?" } else { "" };
                fragments.push(CodeFragment::Line(format!(
                    "{}{}{}: {};",
                    readonly, field.name, optional, field.ty
                )));
                fragments
            })
            .collect()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{} {{", self.header()),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}
