//! Identifier usage tracking for import reconciliation.
//!
//! A [`UsageTracker`] accumulates every identifier that appears to be
//! referenced in a section's non-import content. Structured expressions are
//! walked exactly; free-form text is scanned with deliberately permissive
//! regex heuristics. Over-matching is the accepted failure mode: keeping an
//! extra import is cheap, dropping a needed one breaks the generated code,
//! so every rule here biases toward over-inclusion.
//!
//! One tracker instance belongs to one section generation pass. It is
//! constructed inside `generate()`, fed every non-import fragment, consulted
//! during import reconciliation, and discarded.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scribe_codegen::CodeFragment;

use crate::expr::TsExpr;

/// Capitalized identifiers, treated as candidate type/class references.
static RE_CAPITALIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z0-9_]*").unwrap());

/// Type annotation position: `: Identifier`.
static RE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Keyword-introduced references: `extends T`, `implements T`, `typeof T`, `keyof T`.
static RE_KEYWORD_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:extends|implements|typeof|keyof)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Quoted string literals (double, single, or backtick).
static RE_STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"\\]*)"|'([^'\\]*)'|`([^`\\]*)`"#).unwrap());

/// Function-call syntax inside literal content: `identifier(`.
static RE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());

/// Any identifier-like token.
static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap());

/// Control-flow and declaration keywords that must never be mistaken for
/// imported bindings when scanning code embedded in string literals.
const STOPLIST: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "true",
    "false",
    "null",
    "undefined",
];

fn is_stoplisted(token: &str) -> bool {
    STOPLIST.contains(&token)
}

/// Accumulates the set of identifiers referenced by scanned content.
///
/// The set grows monotonically during the scan phase and is only read during
/// reconciliation. Scanning never fails: malformed input simply contributes
/// nothing.
#[derive(Debug, Default)]
pub struct UsageTracker {
    names: BTreeSet<String>,
}

impl UsageTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a free-form code fragment with the heuristic rule set.
    ///
    /// Rules applied to the whole fragment: capitalized identifiers,
    /// `: T` annotations, and `extends`/`implements`/`typeof`/`keyof`
    /// references. Every quoted literal's inner content additionally goes
    /// through the literal-content rules, recursively, so code snippets
    /// stored as string values still register their callees and identifiers.
    pub fn scan_text(&mut self, fragment: &str) {
        for m in RE_CAPITALIZED.find_iter(fragment) {
            self.add(m.as_str());
        }
        for caps in RE_ANNOTATION.captures_iter(fragment) {
            self.add(&caps[1]);
        }
        for caps in RE_KEYWORD_REF.captures_iter(fragment) {
            self.add(&caps[1]);
        }
        for caps in RE_STRING_LITERAL.captures_iter(fragment) {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            self.scan_literal_content(inner);
        }
    }

    /// Scan a structured expression with an exact tree walk.
    ///
    /// Qualified names contribute every component, not just the leaf. The
    /// walk is exhaustive over child nodes regardless of variant, since any
    /// node may embed arbitrary expressions.
    pub fn scan_expr(&mut self, expr: &TsExpr) {
        match expr {
            TsExpr::Ident(name) => self.add(name),
            TsExpr::String(s) => self.scan_literal_content(s),
            TsExpr::Raw(s) => self.scan_text(s),
            TsExpr::Int(_) | TsExpr::Float(_) | TsExpr::Bool(_) => {}
            TsExpr::Null | TsExpr::Undefined => {}
            TsExpr::TypeRef { name, args } => {
                for part in name.split('.') {
                    self.add(part);
                }
                for arg in args {
                    self.scan_expr(arg);
                }
            }
            TsExpr::Qualified(parts) => {
                for part in parts {
                    self.add(part);
                }
            }
            TsExpr::Member { object, property } => {
                self.add(property);
                self.scan_expr(object);
            }
            TsExpr::Call { callee, args } => {
                self.scan_expr(callee);
                for arg in args {
                    self.scan_expr(arg);
                }
            }
            TsExpr::Array(items) => {
                for item in items {
                    self.scan_expr(item);
                }
            }
        }
    }

    /// Scan a tree of code fragments, applying the text heuristics to every
    /// code-bearing payload. Comment fragments are skipped.
    pub fn scan_fragments(&mut self, fragments: &[CodeFragment]) {
        for fragment in fragments {
            match fragment {
                CodeFragment::Line(s) | CodeFragment::Raw(s) => self.scan_text(s),
                CodeFragment::Blank => {}
                CodeFragment::Block {
                    header,
                    body,
                    close,
                } => {
                    self.scan_text(header);
                    self.scan_fragments(body);
                    if let Some(close) = close {
                        self.scan_text(close);
                    }
                }
                CodeFragment::Indent(inner) | CodeFragment::Sequence(inner) => {
                    self.scan_fragments(inner);
                }
                CodeFragment::JsDoc(_) | CodeFragment::LineComment(_) => {}
            }
        }
    }

    /// Whether the given identifier was seen by any scan.
    pub fn is_used(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Snapshot of every identifier seen so far.
    pub fn used_names(&self) -> BTreeSet<String> {
        self.names.clone()
    }

    /// Clear the accumulated set.
    pub fn reset(&mut self) {
        self.names.clear();
    }

    /// Rules for code embedded in string-literal content: function-call
    /// callees plus every identifier token outside the keyword stoplist.
    /// Literals nested inside the content are scanned recursively.
    fn scan_literal_content(&mut self, content: &str) {
        for caps in RE_CALL.captures_iter(content) {
            let callee = &caps[1];
            if !is_stoplisted(callee) {
                self.add(callee);
            }
        }
        for m in RE_TOKEN.find_iter(content) {
            if !is_stoplisted(m.as_str()) {
                self.add(m.as_str());
            }
        }
        for caps in RE_STRING_LITERAL.captures_iter(content) {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            if !inner.is_empty() {
                self.scan_literal_content(inner);
            }
        }
    }

    fn add(&mut self, name: &str) {
        if !name.is_empty() {
            self.names.insert(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_identifiers() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("const user: User = new UserFactory().create();");
        assert!(tracker.is_used("User"));
        assert!(tracker.is_used("UserFactory"));
    }

    #[test]
    fn test_annotation_idiom_catches_lowercase_types() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("function f(x: widget) {}");
        assert!(tracker.is_used("widget"));
    }

    #[test]
    fn test_keyword_references() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("class A extends base implements printable {}");
        tracker.scan_text("type K = keyof config; const t = typeof registry;");
        assert!(tracker.is_used("base"));
        assert!(tracker.is_used("printable"));
        assert!(tracker.is_used("config"));
        assert!(tracker.is_used("registry"));
    }

    #[test]
    fn test_stoplist_correctness() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text(r#"handler: "if (x) { doThing(); }""#);
        assert!(tracker.is_used("doThing"));
        assert!(!tracker.is_used("if"));
    }

    #[test]
    fn test_literal_content_tokens_and_callees() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text(r#"value: "useState(0)" "#);
        assert!(tracker.is_used("useState"));
    }

    #[test]
    fn test_nested_literal_content() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text(r#"snippet: "const s = 'format(value)';""#);
        assert!(tracker.is_used("format"));
        assert!(tracker.is_used("value"));
        assert!(!tracker.is_used("const"));
    }

    #[test]
    fn test_qualified_name_marks_every_component() {
        let mut tracker = UsageTracker::new();
        tracker.scan_expr(&TsExpr::qualified(["Foo", "Bar"]));
        assert!(tracker.is_used("Foo"));
        assert!(tracker.is_used("Bar"));
    }

    #[test]
    fn test_expr_call_and_member_walk() {
        let mut tracker = UsageTracker::new();
        let expr = TsExpr::call(
            TsExpr::member(TsExpr::ident("api"), "fetchUser"),
            vec![TsExpr::type_ref_with("Map", vec![TsExpr::type_ref("User")])],
        );
        tracker.scan_expr(&expr);
        assert!(tracker.is_used("api"));
        assert!(tracker.is_used("fetchUser"));
        assert!(tracker.is_used("Map"));
        assert!(tracker.is_used("User"));
    }

    #[test]
    fn test_dotted_type_ref_marks_every_component() {
        let mut tracker = UsageTracker::new();
        tracker.scan_expr(&TsExpr::type_ref("Foo.Bar"));
        assert!(tracker.is_used("Foo"));
        assert!(tracker.is_used("Bar"));
    }

    #[test]
    fn test_fragment_walk_skips_comments() {
        let mut tracker = UsageTracker::new();
        tracker.scan_fragments(&[
            CodeFragment::comment("mentions NotARealType"),
            CodeFragment::block(
                "if (flags.verbose) {",
                vec![CodeFragment::line("Logger.debug(flags);")],
                Some("}".to_string()),
            ),
        ]);
        assert!(tracker.is_used("Logger"));
        assert!(!tracker.is_used("NotARealType"));
    }

    #[test]
    fn test_malformed_input_finds_nothing() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("%%% ((( ,,, \"\" 123 ???");
        assert!(tracker.used_names().is_empty());
    }

    #[test]
    fn test_used_names_is_a_snapshot() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("Widget");
        let mut snapshot = tracker.used_names();
        snapshot.clear();
        assert!(tracker.is_used("Widget"));
    }

    #[test]
    fn test_reset() {
        let mut tracker = UsageTracker::new();
        tracker.scan_text("Widget");
        tracker.reset();
        assert!(!tracker.is_used("Widget"));
    }
}
