//! Top-level generator owning multiple sections.

use eyre::Result;
use indexmap::IndexMap;

use crate::section::{Section, SectionOptions};

/// Global metadata merged into one document-level header comment.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    generator: Option<String>,
    timestamp: Option<String>,
    project: Option<String>,
    extra: IndexMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the tool producing the output.
    pub fn generator(mut self, name: impl Into<String>) -> Self {
        self.generator = Some(name.into());
        self
    }

    /// Generation timestamp, supplied by the caller so output stays
    /// reproducible.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Project label.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Arbitrary extra key/value pair, rendered as an `@key value` tag.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.generator.is_none()
            && self.timestamp.is_none()
            && self.project.is_none()
            && self.extra.is_empty()
    }

    fn header(&self) -> String {
        let mut out = String::from("/**\n");
        if let Some(generator) = &self.generator {
            out.push_str(&format!(" * Generated by {}.\n", generator));
        }
        if let Some(project) = &self.project {
            out.push_str(&format!(" * Project: {}\n", project));
        }
        if let Some(timestamp) = &self.timestamp {
            out.push_str(&format!(" * Generated at: {}\n", timestamp));
        }
        for (key, value) in &self.extra {
            out.push_str(&format!(" * @{} {}\n", key, value));
        }
        out.push_str(" */\n");
        out
    }
}

/// Generator-wide configuration.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Options applied to every section unless overridden at registration.
    pub section_defaults: SectionOptions,
    /// Global metadata for the document header comment.
    pub metadata: Metadata,
}

/// Owns an ordered collection of sections and concatenates their output.
///
/// Sections render independently: each runs its own scan-then-reconcile
/// pass with its own usage tracker, so an identifier referenced only in one
/// section never marks an import used in another.
///
/// # Example
///
/// ```
/// use scribe_typescript::{Generator, GeneratorOptions, Metadata};
///
/// let options = GeneratorOptions {
///     metadata: Metadata::new().generator("scribe").project("demo"),
///     ..Default::default()
/// };
/// let output = Generator::with_options(options)
///     .section("Models", |s| {
///         s.interface("User", |i| i.field("id", "string"))
///     })
///     .generate()
///     .unwrap();
/// assert!(output.starts_with("/**\n * Generated by scribe.\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
    sections: Vec<Section>,
}

impl Generator {
    /// Create a generator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with explicit options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
        }
    }

    /// Register a named section configured through the callback. The
    /// section starts from the generator's default section options.
    pub fn section(mut self, name: impl Into<String>, f: impl FnOnce(Section) -> Section) -> Self {
        let section = Section::with_options(name, self.options.section_defaults.clone());
        self.sections.push(f(section));
        self
    }

    /// Register a section with explicit options, overriding the defaults.
    pub fn section_with(
        mut self,
        name: impl Into<String>,
        options: SectionOptions,
        f: impl FnOnce(Section) -> Section,
    ) -> Self {
        self.sections.push(f(Section::with_options(name, options)));
        self
    }

    /// Render the full document.
    ///
    /// Sections are ordered by their explicit order index (stable, so ties
    /// keep insertion order), joined with blank lines, and preceded by a
    /// document header comment when any global metadata is configured.
    /// Idempotent: repeated calls on an unmodified generator yield
    /// byte-identical output, and a single failing section halts the whole
    /// document.
    pub fn generate(&self) -> Result<String> {
        let mut order: Vec<usize> = (0..self.sections.len()).collect();
        order.sort_by_key(|&i| self.sections[i].options().order);

        let mut parts = Vec::with_capacity(self.sections.len() + 1);
        if !self.options.metadata.is_empty() {
            parts.push(self.options.metadata.header());
        }
        for i in order {
            parts.push(self.sections[i].generate()?);
        }
        Ok(parts.join("\n"))
    }
}
