//! Import declarations with usage reconciliation.
//!
//! An [`ImportRegistry`] is a per-module ledger of requested bindings. The
//! registry does not render at declaration time: its final text depends on a
//! usage scan of the rest of the section, so the section finalizes it in a
//! separate phase via [`ImportRegistry::reconcile`] followed by
//! [`ImportRegistry::render`]. Rendering to empty text is a valid terminal
//! state, not an error.

use crate::usage::UsageTracker;

/// One requested named binding from a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// The exported name being imported.
    pub source_name: String,
    /// The identifier that will exist in scope (differs when aliased).
    pub local_name: String,
    /// Set explicitly by the caller or by reconciliation.
    pub used: bool,
}

/// A default or namespace binding slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    name: String,
    used: bool,
}

/// Ledger of requested bindings for one module specifier.
///
/// # Example
///
/// ```
/// use scribe_typescript::{ImportRegistry, UsageTracker};
///
/// let mut registry = ImportRegistry::new("react")
///     .named("useState")
///     .named("useContext");
///
/// let mut tracker = UsageTracker::new();
/// tracker.scan_text(r#"const state = { init: "useState(0)" };"#);
///
/// registry.reconcile(&tracker);
/// assert_eq!(registry.render(), "import { useState } from \"react\";");
/// ```
#[derive(Debug, Clone)]
pub struct ImportRegistry {
    module: String,
    named: Vec<ImportBinding>,
    default: Option<Slot>,
    namespace: Option<Slot>,
    include_unused: bool,
    type_only: bool,
}

impl ImportRegistry {
    /// Create an empty registry for the given module specifier.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            named: Vec::new(),
            default: None,
            namespace: None,
            include_unused: false,
            type_only: false,
        }
    }

    /// The module specifier this registry imports from.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Request a named binding. Duplicate requests are no-ops.
    pub fn named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let local = name.clone();
        self.push_named(name, local)
    }

    /// Request a named binding under an alias (`name as alias`).
    pub fn named_as(self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.push_named(name.into(), alias.into())
    }

    /// Request several named bindings at once.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for name in names {
            self = self.named(name);
        }
        self
    }

    /// Request the default binding. A second request silently replaces the
    /// first (last write wins).
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(Slot {
            name: name.into(),
            used: false,
        });
        self
    }

    /// Request the namespace binding (`* as name`). A second request
    /// silently replaces the first (last write wins).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(Slot {
            name: name.into(),
            used: false,
        });
        self
    }

    /// Render every declared binding regardless of detected usage.
    pub fn include_unused(mut self) -> Self {
        self.include_unused = true;
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Explicitly mark a named binding as used, by local name. Always wins;
    /// reconciliation never revokes an explicit mark. The escape hatch for
    /// usage the heuristic scanner cannot see.
    pub fn mark_used(mut self, name: &str) -> Self {
        for binding in &mut self.named {
            if binding.local_name == name {
                binding.used = true;
            }
        }
        self
    }

    /// Explicitly mark the default binding as used.
    pub fn mark_default_used(mut self) -> Self {
        if let Some(slot) = &mut self.default {
            slot.used = true;
        }
        self
    }

    /// Explicitly mark the namespace binding as used.
    pub fn mark_namespace_used(mut self) -> Self {
        if let Some(slot) = &mut self.namespace {
            slot.used = true;
        }
        self
    }

    /// Resolve every still-unmarked binding against the tracker's findings.
    ///
    /// Bindings already marked used stay used; reconciliation only ever
    /// flips flags from false to true.
    pub fn reconcile(&mut self, tracker: &UsageTracker) {
        for binding in &mut self.named {
            if !binding.used {
                binding.used = tracker.is_used(&binding.local_name);
            }
        }
        if let Some(slot) = &mut self.default {
            if !slot.used {
                slot.used = tracker.is_used(&slot.name);
            }
        }
        if let Some(slot) = &mut self.namespace {
            if !slot.used {
                slot.used = tracker.is_used(&slot.name);
            }
        }
    }

    /// Render the import statement, or an empty string when the filtered
    /// binding set is empty.
    ///
    /// Clause order: default or namespace first (namespace takes precedence
    /// if both were somehow populated, since the two cannot share a clause),
    /// then the named group in declaration order.
    pub fn render(&self) -> String {
        let named: Vec<String> = self
            .named
            .iter()
            .filter(|b| b.used || self.include_unused)
            .map(|b| {
                if b.source_name == b.local_name {
                    b.local_name.clone()
                } else {
                    format!("{} as {}", b.source_name, b.local_name)
                }
            })
            .collect();

        let namespace = self
            .namespace
            .as_ref()
            .filter(|slot| slot.used || self.include_unused)
            .map(|slot| format!("* as {}", slot.name));
        let head = namespace.or_else(|| {
            self.default
                .as_ref()
                .filter(|slot| slot.used || self.include_unused)
                .map(|slot| slot.name.clone())
        });

        let mut clauses = Vec::new();
        if let Some(head) = head {
            clauses.push(head);
        }
        if !named.is_empty() {
            clauses.push(format!("{{ {} }}", named.join(", ")));
        }
        if clauses.is_empty() {
            return String::new();
        }

        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{} from \"{}\";",
            type_kw,
            clauses.join(", "),
            self.module
        )
    }

    fn push_named(mut self, source_name: String, local_name: String) -> Self {
        let exists = self
            .named
            .iter()
            .any(|b| b.source_name == source_name && b.local_name == local_name);
        if !exists {
            self.named.push(ImportBinding {
                source_name,
                local_name,
                used: false,
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(text: &str) -> UsageTracker {
        let mut tracker = UsageTracker::new();
        tracker.scan_text(text);
        tracker
    }

    #[test]
    fn test_unused_registry_renders_empty() {
        let mut registry = ImportRegistry::new("unused-module").named_all(["a", "b"]);
        registry.reconcile(&UsageTracker::new());
        assert_eq!(registry.render(), "");
    }

    #[test]
    fn test_reconcile_keeps_only_used_named() {
        let mut registry =
            ImportRegistry::new("react").named_all(["useState", "useEffect", "useContext"]);
        registry.reconcile(&tracker_with(r#"value: "useState(0)", effect: "useEffect(0)""#));
        assert_eq!(
            registry.render(),
            "import { useState, useEffect } from \"react\";"
        );
    }

    #[test]
    fn test_explicit_marks_win_over_empty_tracker() {
        let mut registry = ImportRegistry::new("styled-components")
            .default("styled")
            .named("css")
            .named("keyframes")
            .mark_default_used()
            .mark_used("css");
        registry.reconcile(&UsageTracker::new());
        assert_eq!(
            registry.render(),
            "import styled, { css } from \"styled-components\";"
        );
    }

    #[test]
    fn test_include_unused_renders_everything() {
        let registry = ImportRegistry::new("./types")
            .named_all(["User", "Role"])
            .include_unused();
        assert_eq!(
            registry.render(),
            "import { User, Role } from \"./types\";"
        );
    }

    #[test]
    fn test_aliased_binding_reconciles_on_local_name() {
        let mut registry = ImportRegistry::new("./db").named_as("connect", "dbConnect");
        registry.reconcile(&tracker_with(r#"init: "dbConnect()""#));
        assert_eq!(
            registry.render(),
            "import { connect as dbConnect } from \"./db\";"
        );
    }

    #[test]
    fn test_duplicate_named_requests_are_noops() {
        let registry = ImportRegistry::new("./a")
            .named("x")
            .named("x")
            .include_unused();
        assert_eq!(registry.render(), "import { x } from \"./a\";");
    }

    #[test]
    fn test_duplicate_default_last_write_wins() {
        let registry = ImportRegistry::new("./a")
            .default("first")
            .default("second")
            .include_unused();
        assert_eq!(registry.render(), "import second from \"./a\";");
    }

    #[test]
    fn test_namespace_takes_precedence_over_default() {
        let registry = ImportRegistry::new("./a")
            .default("def")
            .namespace("ns")
            .include_unused();
        assert_eq!(registry.render(), "import * as ns from \"./a\";");
    }

    #[test]
    fn test_type_only() {
        let registry = ImportRegistry::new("./types")
            .named("Config")
            .mark_used("Config");
        let registry = registry.type_only();
        assert_eq!(
            registry.render(),
            "import type { Config } from \"./types\";"
        );
    }

    #[test]
    fn test_named_order_is_declaration_order() {
        let registry = ImportRegistry::new("./m")
            .named("zeta")
            .named("alpha")
            .include_unused();
        assert_eq!(registry.render(), "import { zeta, alpha } from \"./m\";");
    }

    #[test]
    fn test_namespace_reconciles_on_name() {
        let mut registry = ImportRegistry::new("node:path").namespace("path");
        registry.reconcile(&tracker_with(r#"joiner: "path.join(a, b)""#));
        assert_eq!(registry.render(), "import * as path from \"node:path\";");
    }
}
