//! Named sections of generated output.
//!
//! A section owns an ordered collection of heterogeneous items: import
//! registries plus declarations and statements. Import text depends on a
//! usage scan of everything else in the section, so `generate()` runs two
//! phases: render and scan every non-import item into a fresh
//! [`UsageTracker`], and only then reconcile and render the imports. Imports
//! appear first in the output but are the last thing finalized.

use indexmap::IndexMap;
use scribe_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{
    DoWhileStatement, ForStatement, IfStatement, Interface, JsObject, Statement,
    SwitchStatement, TsEnum, TypeAlias, Union, WhileStatement,
};
use crate::error::Result;
use crate::import::ImportRegistry;
use crate::usage::UsageTracker;

/// Comment style for section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocStyle {
    /// Line comments (`// ...`).
    #[default]
    Line,
    /// A JSDoc block (`/** ... */`).
    JsDoc,
}

/// Blank-line density between non-import items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// No blank line between items.
    Compact,
    /// One blank line between items.
    #[default]
    Loose,
}

/// Per-section formatting and metadata options.
#[derive(Debug, Clone)]
pub struct SectionOptions {
    /// Free-form description rendered in the header comment.
    pub description: Option<String>,
    /// Header comment style.
    pub doc_style: DocStyle,
    /// Emit a trailing `// #endregion <name>` marker.
    pub end_marker: bool,
    /// Whether declarations default to `export`.
    pub export_all: bool,
    /// Blank-line density between items.
    pub spacing: Spacing,
    /// Sort non-import items by display name (ordinal). Imports are never
    /// sorted; they always render in declaration order, ahead of content.
    pub sort_items: bool,
    /// Explicit ordering index used by the generator (ties broken by
    /// insertion order).
    pub order: i32,
    /// Free-form key/value pairs rendered as `@key value` tag lines in the
    /// header comment, in insertion order.
    pub metadata: IndexMap<String, String>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            description: None,
            doc_style: DocStyle::default(),
            end_marker: false,
            export_all: true,
            spacing: Spacing::default(),
            sort_items: false,
            order: 0,
            metadata: IndexMap::new(),
        }
    }
}

/// The kind tag of a queued item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Interface,
    TypeAlias,
    Union,
    Enum,
    Object,
    Raw,
    If,
    Switch,
    For,
    While,
    DoWhile,
    Import,
}

/// One thing a section will emit.
///
/// Only import items defer rendering past declaration time: they hold a
/// still-mutable registry whose text depends on the scan of sibling items.
/// Every other kind has deterministic content the moment it is added.
#[derive(Debug, Clone)]
pub struct CodeItem {
    kind: ItemKind,
    name: String,
    content: ItemContent,
}

#[derive(Debug, Clone)]
enum ItemContent {
    Fragments(Vec<CodeFragment>),
    Text(String),
    Statement(Statement),
    Import(ImportRegistry),
}

impl CodeItem {
    /// The kind tag.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The display name, used for optional alphabetic sorting.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named, ordered collection of code items with formatting options.
///
/// # Example
///
/// ```
/// use scribe_typescript::Section;
///
/// let section = Section::new("Models")
///     .imports("./validation", |i| i.named("validate"))
///     .interface("User", |i| i.field("id", "string"))
///     .object("checks", |o| o.string("user", "validate(user)"));
///
/// let output = section.generate().unwrap();
/// assert!(output.contains("import { validate } from \"./validation\";"));
/// ```
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    options: SectionOptions,
    items: Vec<CodeItem>,
}

impl Section {
    /// Create a section with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, SectionOptions::default())
    }

    /// Create a section with explicit options.
    pub fn with_options(name: impl Into<String>, options: SectionOptions) -> Self {
        Self {
            name: name.into(),
            options,
            items: Vec::new(),
        }
    }

    /// The section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section options.
    pub fn options(&self) -> &SectionOptions {
        &self.options
    }

    /// The queued items, in declaration order.
    pub fn items(&self) -> &[CodeItem] {
        &self.items
    }

    /// Set the section description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.options.description = Some(description.into());
        self
    }

    /// Add a metadata tag rendered as `@key value` in the header comment.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.metadata.insert(key.into(), value.into());
        self
    }

    /// Add an interface declaration.
    pub fn interface(self, name: impl Into<String>, f: impl FnOnce(Interface) -> Interface) -> Self {
        let name = name.into();
        let builder = self.seed_export(Interface::new(&name), Interface::private);
        let fragments = f(builder).to_fragments();
        self.push(ItemKind::Interface, name, ItemContent::Fragments(fragments))
    }

    /// Add a type alias declaration.
    pub fn type_alias(
        self,
        name: impl Into<String>,
        ty: impl Into<String>,
        f: impl FnOnce(TypeAlias) -> TypeAlias,
    ) -> Self {
        let name = name.into();
        let builder = self.seed_export(TypeAlias::new(&name, ty), TypeAlias::private);
        let fragments = f(builder).to_fragments();
        self.push(ItemKind::TypeAlias, name, ItemContent::Fragments(fragments))
    }

    /// Add a union type declaration.
    pub fn union(self, name: impl Into<String>, f: impl FnOnce(Union) -> Union) -> Self {
        let name = name.into();
        let builder = self.seed_export(Union::new(&name), Union::private);
        let fragments = f(builder).to_fragments();
        self.push(ItemKind::Union, name, ItemContent::Fragments(fragments))
    }

    /// Add an enum declaration.
    pub fn enum_(self, name: impl Into<String>, f: impl FnOnce(TsEnum) -> TsEnum) -> Self {
        let name = name.into();
        let builder = self.seed_export(TsEnum::new(&name), TsEnum::private);
        let fragments = f(builder).to_fragments();
        self.push(ItemKind::Enum, name, ItemContent::Fragments(fragments))
    }

    /// Add an object literal declaration (`const <name> = { ... };`).
    pub fn object(self, name: impl Into<String>, f: impl FnOnce(JsObject) -> JsObject) -> Self {
        let name = name.into();
        let exported = self.options.export_all;
        let fragments = f(JsObject::new()).declaration(&name, exported);
        self.push(ItemKind::Object, name, ItemContent::Fragments(fragments))
    }

    /// Add a pre-rendered code snippet.
    pub fn raw(self, name: impl Into<String>, code: impl Into<String>) -> Self {
        let mut code = code.into();
        if !code.ends_with('\n') {
            code.push('\n');
        }
        self.push(ItemKind::Raw, name.into(), ItemContent::Text(code))
    }

    /// Declare imports from a module. The registry renders during
    /// `generate()`, after every other item has been scanned for usage.
    pub fn imports(
        self,
        module: impl Into<String>,
        f: impl FnOnce(ImportRegistry) -> ImportRegistry,
    ) -> Self {
        let module = module.into();
        let registry = f(ImportRegistry::new(&module));
        self.push(ItemKind::Import, module, ItemContent::Import(registry))
    }

    /// Add an if statement. Validation happens at `generate()` time.
    pub fn if_(self, f: impl FnOnce(IfStatement) -> IfStatement) -> Self {
        let statement = Statement::If(f(IfStatement::new()));
        self.push(ItemKind::If, "if", ItemContent::Statement(statement))
    }

    /// Add a switch statement. Validation happens at `generate()` time.
    pub fn switch(self, f: impl FnOnce(SwitchStatement) -> SwitchStatement) -> Self {
        let statement = Statement::Switch(f(SwitchStatement::new()));
        self.push(ItemKind::Switch, "switch", ItemContent::Statement(statement))
    }

    /// Add a for loop. Validation happens at `generate()` time.
    pub fn for_(self, f: impl FnOnce(ForStatement) -> ForStatement) -> Self {
        let statement = Statement::For(f(ForStatement::new()));
        self.push(ItemKind::For, "for", ItemContent::Statement(statement))
    }

    /// Add a while loop. Validation happens at `generate()` time.
    pub fn while_(self, f: impl FnOnce(WhileStatement) -> WhileStatement) -> Self {
        let statement = Statement::While(f(WhileStatement::new()));
        self.push(ItemKind::While, "while", ItemContent::Statement(statement))
    }

    /// Add a do-while loop. Validation happens at `generate()` time.
    pub fn do_while(self, f: impl FnOnce(DoWhileStatement) -> DoWhileStatement) -> Self {
        let statement = Statement::DoWhile(f(DoWhileStatement::new()));
        self.push(ItemKind::DoWhile, "do-while", ItemContent::Statement(statement))
    }

    /// Render the section.
    ///
    /// Deterministic and side-effect free: every call constructs its own
    /// [`UsageTracker`] and reconciles clones of the import registries, so
    /// repeated calls yield identical output.
    pub fn generate(&self) -> Result<String> {
        let mut import_items: Vec<&ImportRegistry> = Vec::new();
        let mut content_items: Vec<&CodeItem> = Vec::new();
        for item in &self.items {
            match &item.content {
                ItemContent::Import(registry) => import_items.push(registry),
                _ => content_items.push(item),
            }
        }

        if self.options.sort_items {
            content_items.sort_by(|a, b| a.name.cmp(&b.name));
        }

        // Scan phase: every non-import item renders and feeds the tracker
        // before any import is finalized. Structured items are scanned
        // fragment by fragment so comment text never marks usage.
        let mut tracker = UsageTracker::new();
        let mut rendered = Vec::with_capacity(content_items.len());
        for item in &content_items {
            let text = match &item.content {
                ItemContent::Fragments(fragments) => {
                    tracker.scan_fragments(fragments);
                    print_fragments(fragments)
                }
                ItemContent::Text(text) => {
                    tracker.scan_text(text);
                    text.clone()
                }
                ItemContent::Statement(statement) => {
                    let fragments = statement.to_fragments()?;
                    tracker.scan_fragments(&fragments);
                    print_fragments(&fragments)
                }
                ItemContent::Import(_) => unreachable!("imports are partitioned out"),
            };
            rendered.push(text);
        }

        // Import finalization: reconcile against the complete scan, drop
        // registries that render to nothing.
        let mut import_lines = Vec::new();
        for registry in import_items {
            let mut registry = registry.clone();
            registry.reconcile(&tracker);
            let text = registry.render();
            if !text.is_empty() {
                import_lines.push(text);
            }
        }

        let mut out = self.header_comment();
        if !import_lines.is_empty() {
            out.push_str(&import_lines.join("\n"));
            out.push('\n');
            if !rendered.is_empty() {
                out.push('\n');
            }
        }
        for (i, text) in rendered.iter().enumerate() {
            if i > 0 && self.options.spacing == Spacing::Loose {
                out.push('\n');
            }
            out.push_str(text);
        }
        if self.options.end_marker {
            out.push_str("// #endregion ");
            out.push_str(&self.name);
            out.push('\n');
        }
        Ok(out)
    }

    fn header_comment(&self) -> String {
        let mut lines = vec![self.name.clone()];
        if let Some(description) = &self.options.description {
            lines.push(description.clone());
        }
        for (key, value) in &self.options.metadata {
            lines.push(format!("@{} {}", key, value));
        }

        match self.options.doc_style {
            DocStyle::Line => {
                let mut builder = CodeBuilder::typescript().comment(&format!("#region {}", self.name));
                for line in &lines[1..] {
                    builder = builder.comment(line);
                }
                builder.build()
            }
            DocStyle::JsDoc => {
                let mut out = String::from("/**\n");
                for line in &lines {
                    out.push_str(" * ");
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(" */\n");
                out
            }
        }
    }

    fn seed_export<T>(&self, builder: T, private: impl FnOnce(T) -> T) -> T {
        if self.options.export_all {
            builder
        } else {
            private(builder)
        }
    }

    fn push(mut self, kind: ItemKind, name: impl Into<String>, content: ItemContent) -> Self {
        self.items.push(CodeItem {
            kind,
            name: name.into(),
            content,
        });
        self
    }
}

fn print_fragments(fragments: &[CodeFragment]) -> String {
    let mut builder = CodeBuilder::typescript();
    for fragment in fragments {
        builder.apply_fragment(fragment.clone());
    }
    builder.build()
}
