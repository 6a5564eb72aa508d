//! TypeScript declaration and statement builders.
//!
//! These provide a fluent API for constructing TypeScript syntax. Each
//! builder produces code fragments that a section can print and scan.

mod enums;
mod interface;
mod objects;
mod statements;
mod types;

pub use enums::{EnumKeyFormat, EnumMember, TsEnum};
pub use interface::{Interface, InterfaceField};
pub use objects::{ArrowFn, JsObject, Property, PropertyValue};
pub use statements::{
    DoWhileStatement, ForStatement, IfStatement, Statement, SwitchCase, SwitchStatement,
    WhileStatement,
};
pub use types::{TypeAlias, Union};
