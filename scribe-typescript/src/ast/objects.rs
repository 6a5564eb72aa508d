//! TypeScript/JavaScript object literal builder.

use scribe_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::expr::TsExpr;

/// A property in an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted). The content may itself be a
    /// code snippet; the usage scanner looks inside quoted values.
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A structured expression.
    Expr(TsExpr),
    /// An array of structured expressions.
    Array(Vec<TsExpr>),
    /// A nested object.
    Object(JsObject),
    /// An arrow function body.
    ArrowFn(ArrowFn),
}

impl Property {
    /// Create a property with a string value (will be quoted).
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        }
    }

    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a property with a structured expression value.
    pub fn expr(key: impl Into<String>, value: TsExpr) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Expr(value),
        }
    }

    /// Create a property with an array value.
    pub fn array(key: impl Into<String>, items: impl IntoIterator<Item = TsExpr>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Array(items.into_iter().collect()),
        }
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }

    /// Create a property with an arrow function value.
    pub fn arrow_fn(key: impl Into<String>, value: ArrowFn) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::ArrowFn(value),
        }
    }

    /// Create a shorthand property where key equals the variable name.
    pub fn shorthand(name: impl Into<String>) -> Self {
        let n = name.into();
        Self {
            key: n.clone(),
            value: PropertyValue::Raw(n),
        }
    }
}

/// An arrow function for use as a property value.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    pub params: String,
    pub is_async: bool,
    pub body: Vec<String>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            is_async: false,
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn body_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for line in lines {
            self.body.push(line.into());
        }
        self
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::string(key, value));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a property with a structured expression value.
    pub fn expr(mut self, key: impl Into<String>, value: TsExpr) -> Self {
        self.properties.push(Property::expr(key, value));
        self
    }

    /// Add a property with an array value.
    pub fn array(mut self, key: impl Into<String>, items: impl IntoIterator<Item = TsExpr>) -> Self {
        self.properties.push(Property::array(key, items));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::object(key, value));
        self
    }

    /// Add an arrow function property.
    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties.push(Property::arrow_fn(key, value));
        self
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property::shorthand(name));
        self
    }

    /// Conditionally add a string property using an Option.
    pub fn string_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    /// Conditionally add a raw property using an Option.
    pub fn raw_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.raw(key, v),
            None => self,
        }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Fragments for a `const name = { ... };` declaration.
    pub fn declaration(&self, name: &str, exported: bool) -> Vec<CodeFragment> {
        let export = if exported { "export " } else { "" };

        if self.properties.is_empty() {
            return vec![CodeFragment::Line(format!(
                "{}const {} = {{}};",
                export, name
            ))];
        }

        vec![CodeFragment::Block {
            header: format!("{}const {} = {{", export, name),
            body: self.properties_to_fragments(),
            close: Some("};".to_string()),
        }]
    }

    /// Build the object literal as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::String(s) => {
                    CodeFragment::Line(format!("{}: \"{}\",", prop.key, s))
                }
                PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", prop.key, s)),
                PropertyValue::Expr(expr) => {
                    CodeFragment::Line(format!("{}: {},", prop.key, expr))
                }
                PropertyValue::Array(items) => {
                    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                    CodeFragment::Line(format!("{}: [{}],", prop.key, parts.join(", ")))
                }
                PropertyValue::Object(obj) => CodeFragment::Block {
                    header: format!("{}: {{", prop.key),
                    body: obj.properties_to_fragments(),
                    close: Some("},".to_string()),
                },
                PropertyValue::ArrowFn(func) => {
                    let async_kw = if func.is_async { "async " } else { "" };
                    let body: Vec<CodeFragment> = func
                        .body
                        .iter()
                        .map(|line| CodeFragment::Line(line.clone()))
                        .collect();
                    CodeFragment::Block {
                        header: format!("{}: {}({}) => {{", prop.key, async_kw, func.params),
                        body,
                        close: Some("},".to_string()),
                    }
                }
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
