//! End-to-end tests for generated TypeScript output.
//!
//! These exercise the full pipeline: builders into sections, the usage scan,
//! import reconciliation, and final document assembly. Run
//! `cargo insta review` to update snapshots when making intentional changes.

use scribe_typescript::{
    Generator, GeneratorOptions, Metadata, Section, SectionOptions, TsExpr,
};

#[test]
fn test_react_hooks_scenario() {
    let options = GeneratorOptions {
        metadata: Metadata::new().generator("scribe").project("demo"),
        ..Default::default()
    };
    let output = Generator::with_options(options)
        .section("Models", |s| {
            s.imports("react", |i| {
                i.named_all(["useState", "useEffect", "useContext"])
            })
            .object("hooks", |o| {
                o.string("state", "useState(0)")
                    .string("effect", "useEffect(() => {})")
            })
        })
        .generate()
        .unwrap();

    insta::assert_snapshot!(output, @r#"
    /**
     * Generated by scribe.
     * Project: demo
     */

    // #region Models
    import { useState, useEffect } from "react";

    export const hooks = {
      state: "useState(0)",
      effect: "useEffect(() => {})",
    };
    "#);
}

#[test]
fn test_mixed_section_snapshot() {
    let output = Section::new("Orders")
        .description("Order views.")
        .imports("./types", |i| i.named("User").named("Order"))
        .interface("OrderView", |i| {
            i.field("user", "User").field("order", "Order")
        })
        .enum_("Status", |e| {
            e.member_string("active", "active")
                .key_format(scribe_typescript::EnumKeyFormat::ConstantCase)
        })
        .if_(|s| s.condition("order.total > 0").then_line("ship(order);"))
        .generate()
        .unwrap();

    insta::assert_snapshot!(output, @r#"
    // #region Orders
    // Order views.
    import { User, Order } from "./types";

    export interface OrderView {
      user: User;
      order: Order;
    }

    export enum Status {
      ACTIVE = "active",
    }

    if (order.total > 0) {
      ship(order);
    }
    "#);
}

#[test]
fn test_styled_components_explicit_marks() {
    let output = Section::new("Styles")
        .imports("styled-components", |i| {
            i.default("styled")
                .named("css")
                .named("keyframes")
                .mark_default_used()
                .mark_used("css")
        })
        .generate()
        .unwrap();

    assert!(output.contains("import styled, { css } from \"styled-components\";"));
    assert!(!output.contains("keyframes"));
}

#[test]
fn test_unused_module_contributes_zero_lines() {
    let output = Section::new("S")
        .imports("unused-module", |i| i.named_all(["helper", "other"]))
        .raw("body", "const total = 1 + 2;")
        .generate()
        .unwrap();

    assert!(!output.contains("unused-module"));
    assert!(!output.contains("import"));
    // No stray blank import line: body follows the header directly.
    assert!(output.starts_with("// #region S\nconst total = 1 + 2;\n"));
}

#[test]
fn test_two_sections_user_import() {
    let output = Generator::new()
        .section("A", |s| {
            s.imports("./types", |i| i.named("User"))
                .raw("unrelated", "const n = 1;")
        })
        .section("B", |s| {
            s.imports("./types", |i| i.named("User"))
                .raw("decl", "const u: User = load();")
        })
        .generate()
        .unwrap();

    // Section A's import is dropped, section B's is kept.
    assert_eq!(
        output.matches("import { User } from \"./types\";").count(),
        1
    );
    assert!(output.find("import { User }").unwrap() > output.find("// #region B").unwrap());
}

#[test]
fn test_full_document_idempotence() {
    let generator = Generator::with_options(GeneratorOptions {
        metadata: Metadata::new()
            .generator("scribe")
            .timestamp("2026-01-01T00:00:00Z"),
        ..Default::default()
    })
    .section("A", |s| {
        s.imports("./types", |i| i.named("Config"))
            .type_alias("Env", "\"dev\" | \"prod\"", |t| t)
            .raw("load", "const config: Config = read();")
    })
    .section("B", |s| {
        s.while_(|w| w.condition("pending()").body_line("flush();"))
    });

    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_include_unused_renders_with_empty_tracker() {
    let output = Section::new("S")
        .imports("./side-effects", |i| {
            i.named_all(["registerA", "registerB"]).include_unused()
        })
        .generate()
        .unwrap();

    assert!(output.contains("import { registerA, registerB } from \"./side-effects\";"));
}

#[test]
fn test_stoplist_through_full_pipeline() {
    let output = Section::new("S")
        .imports("./handlers", |i| i.named_all(["doThing", "if"]))
        .object("config", |o| o.string("handler", "if (x) { doThing(); }"))
        .generate()
        .unwrap();

    assert!(output.contains("import { doThing } from \"./handlers\";"));
    assert!(!output.contains("{ doThing, if }"));
}

#[test]
fn test_explicit_mark_beats_invisible_usage() {
    // Nothing in the section references `polyfill` in a way the scanner can
    // see; the explicit mark is the escape hatch.
    let output = Section::new("S")
        .imports("./runtime", |i| i.named("polyfill").mark_used("polyfill"))
        .raw("body", "const n = 1;")
        .generate()
        .unwrap();

    assert!(output.contains("import { polyfill } from \"./runtime\";"));
}

#[test]
fn test_import_declared_before_late_content() {
    // Declaration order of imports relative to content must not matter:
    // scanning covers all non-import items before any import renders.
    let output = Section::new("S")
        .imports("./types", |i| i.named("User"))
        .raw("late", "const u: User = load();")
        .generate()
        .unwrap();

    assert!(output.contains("import { User } from \"./types\";"));
}

#[test]
fn test_structured_expr_usage_detected() {
    let output = Section::new("S")
        .imports("./registry", |i| i.named("Widgets"))
        .object("setup", |o| {
            o.expr("factory", TsExpr::qualified(["Widgets", "create"]))
        })
        .generate()
        .unwrap();

    assert!(output.contains("import { Widgets } from \"./registry\";"));
    assert!(output.contains("factory: Widgets.create,"));
}

#[test]
fn test_sorted_section_keeps_imports_first() {
    let options = SectionOptions {
        sort_items: true,
        ..Default::default()
    };
    let output = Section::with_options("S", options)
        .type_alias("Zebra", "string", |t| t)
        .imports("./a", |i| i.named("ay").include_unused())
        .type_alias("Aardvark", "number", |t| t)
        .generate()
        .unwrap();

    let import_pos = output.find("import { ay }").unwrap();
    let aardvark = output.find("type Aardvark").unwrap();
    let zebra = output.find("type Zebra").unwrap();
    assert!(import_pos < aardvark);
    assert!(aardvark < zebra);
}

#[test]
fn test_misconfigured_construct_fails_the_document() {
    let result = Generator::new()
        .section("Good", |s| s.raw("a", "const a = 1;"))
        .section("Bad", |s| s.if_(|i| i.then_line("run();")))
        .generate();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("condition is required for if statement"));
}
