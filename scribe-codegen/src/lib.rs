//! Code emission primitives for the scribe TypeScript generator.
//!
//! This crate provides the language-level building blocks consumed by
//! `scribe-typescript`:
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`RawCode`] - Wrap pre-rendered text so it composes with fragments
//! - [`Indent`] - Indentation configuration
//!
//! Case-conversion helpers for enum key formatting live in [`naming`].

pub mod builder;
pub mod naming;

mod raw;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use raw::RawCode;
