//! TypeScript source emitter with automatic import-usage detection.
//!
//! Callers build declarations into named [`Section`]s and declare desired
//! imports alongside them, without marking usage by hand. On `generate()`,
//! each section renders its non-import content first, scans every rendered
//! fragment through a [`UsageTracker`], then reconciles each
//! [`ImportRegistry`] against the findings and emits only the imports that
//! are actually referenced. A [`Generator`] orders sections and prepends a
//! document header from global metadata.
//!
//! # Example
//!
//! ```
//! use scribe_typescript::Generator;
//!
//! let output = Generator::new()
//!     .section("Models", |s| {
//!         s.imports("./validation", |i| i.named("validate").named("sanitize"))
//!             .interface("User", |i| i.field("id", "string"))
//!             .object("checks", |o| o.string("user", "validate(user)"))
//!     })
//!     .generate()
//!     .unwrap();
//!
//! // `sanitize` is never referenced, so it is not emitted.
//! assert!(output.contains("import { validate } from \"./validation\";"));
//! assert!(!output.contains("sanitize"));
//! ```
//!
//! Usage detection is heuristic over free-form text (exact over structured
//! expressions) and deliberately over-inclusive; `mark_used` on the import
//! builder is the escape hatch for anything the scanner cannot see.

mod error;
mod expr;
mod generator;
mod import;
mod section;
mod usage;

pub mod ast;

pub use ast::{
    ArrowFn, DoWhileStatement, EnumKeyFormat, ForStatement, IfStatement, Interface,
    InterfaceField, JsObject, Property, PropertyValue, Statement, SwitchCase, SwitchStatement,
    TsEnum, TypeAlias, Union, WhileStatement,
};
pub use error::{Error, Result};
pub use expr::TsExpr;
pub use generator::{Generator, GeneratorOptions, Metadata};
pub use import::{ImportBinding, ImportRegistry};
pub use section::{CodeItem, DocStyle, ItemKind, Section, SectionOptions, Spacing};
pub use usage::UsageTracker;
