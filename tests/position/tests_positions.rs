#![allow(clippy::unwrap_used)]

//! Source positions of doc comments and comment nodes.

use std::fs;

use doclet::{AdapterError, Context, Documented, POS_FAILED, ProgramBuilder, SourcePosition};

use crate::helpers::{fixtures, init_tracing};

#[test]
fn test_comment_position_in_inline_unit() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);
    let outer = cx.class(f.outer).unwrap();

    let position = outer.position();
    assert_eq!(position, SourcePosition::new("Outer.java", 3, 1));
    assert_eq!(position.to_string(), "Outer.java:3:1");
    assert_eq!(outer.position(), position);
}

#[test]
fn test_tag_position() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);
    let outer = cx.class(f.outer).unwrap();

    let since = &outer.tags_of_kind("since")[0];
    assert_eq!(since.position(), SourcePosition::new("Outer.java", 5, 4));

    let body = &outer.inline_tags()[0];
    assert_eq!(body.position(), SourcePosition::new("Outer.java", 4, 4));
}

#[test]
fn test_comment_position_in_file_unit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Outer.java");
    fs::write(&path, fixtures::OUTER_UNIT).unwrap();

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit_file("Outer.java", &path);
    let outer = b
        .class(package, "Outer")
        .public()
        .unit(unit)
        .doc(fixtures::OUTER_COMMENT)
        .finish();
    let cx = Context::new(b.build());
    let outer = cx.class(outer).unwrap();

    assert_eq!(outer.position(), SourcePosition::new("Outer.java", 3, 1));
    assert_eq!(
        outer.tags()[0].position(),
        SourcePosition::new("Outer.java", 5, 4)
    );
}

#[test]
fn test_crlf_line_endings() {
    let source = fixtures::OUTER_UNIT.replace('\n', "\r\n");
    let comment = fixtures::OUTER_COMMENT.replace('\n', "\r\n");

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit("Outer.java", &source);
    let outer = b
        .class(package, "Outer")
        .public()
        .unit(unit)
        .doc(&comment)
        .finish();
    let cx = Context::new(b.build());

    assert_eq!(
        cx.class(outer).unwrap().position(),
        SourcePosition::new("Outer.java", 3, 1)
    );
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit(
        "A.java",
        "package com.example;\n/* é */ /** Né. {@code x} */\nclass A {}\n",
    );
    let a = b
        .class(package, "A")
        .unit(unit)
        .doc("/** Né. {@code x} */")
        .finish();
    let cx = Context::new(b.build());
    let a = cx.class(a).unwrap();

    assert_eq!(a.position(), SourcePosition::new("A.java", 2, 9));
    let code = &a.inline_tags()[1];
    assert_eq!(code.kind(), "@code");
    assert_eq!(code.position(), SourcePosition::new("A.java", 2, 17));
}

#[test]
fn test_loaded_unit_resolves_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Outer.java");
    fs::write(&path, fixtures::OUTER_UNIT).unwrap();

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.load_unit("Outer.java", &path).unwrap();
    fs::remove_file(&path).unwrap();
    let outer = b
        .class(package, "Outer")
        .public()
        .unit(unit)
        .doc(fixtures::OUTER_COMMENT)
        .finish();
    let cx = Context::new(b.build());

    assert_eq!(
        cx.class(outer).unwrap().position(),
        SourcePosition::new("Outer.java", 3, 1)
    );
}

#[test]
fn test_loading_missing_unit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut b = ProgramBuilder::new();

    let err = b.load_unit("Gone.java", dir.path().join("Gone.java")).unwrap_err();
    assert!(matches!(err, AdapterError::Io(_)));
    assert!(err.to_string().starts_with("IO error: "));
}

#[test]
fn test_offset_past_end_of_unit() {
    init_tracing();
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit("Outer.java", fixtures::OUTER_UNIT);
    let outer = b
        .class(package, "Outer")
        .public()
        .unit(unit)
        .doc_at(fixtures::OUTER_COMMENT, 10_000)
        .finish();
    let cx = Context::new(b.build());

    let position = cx.class(outer).unwrap().position();
    assert_eq!(position, SourcePosition::new("Outer.java", POS_FAILED, 0));
    assert_eq!(position.to_string(), "Outer.java:-300");
}

#[test]
fn test_unreadable_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("Gone.java");

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit_file("Gone.java", &missing);
    let known = b
        .class(package, "Known")
        .public()
        .unit(unit)
        .doc_at("/** Known. */", 0)
        .finish();
    let searched = b
        .class(package, "Searched")
        .public()
        .unit(unit)
        .doc("/** Searched. */")
        .finish();
    let cx = Context::new(b.build());

    assert_eq!(
        cx.class(known).unwrap().position(),
        SourcePosition::new("Gone.java", POS_FAILED, 0)
    );
    assert_eq!(
        cx.class(searched).unwrap().position(),
        SourcePosition::new("Gone.java", -1, 0)
    );
}

#[test]
fn test_unknown_without_unit_or_comment() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);

    let inner = cx.class(f.inner).unwrap().position();
    assert!(inner.is_unknown());
    assert_eq!(inner.to_string(), ".:-1");

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit("Bare.java", "package com.example;\nclass Bare {}\n");
    let bare = b.class(package, "Bare").unit(unit).finish();
    let cx = Context::new(b.build());
    assert!(cx.class(bare).unwrap().position().is_unknown());
}
