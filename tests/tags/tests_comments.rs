#![allow(clippy::unwrap_used)]

//! Comment bodies, inline tags and the first sentence.

use doclet::{Context, Documented, ProgramBuilder};

use crate::helpers::fixtures;

const PARSE_DOC: &str = "/**
 * Parses the {@code input} quickly. See {@linkplain java.lang.String strings} too.
 * @param input the text
 * @return the parsed value
 */";

fn texts(tags: &[doclet::Tag<'_>]) -> Vec<String> {
    tags.iter().map(|t| t.text().to_string()).collect()
}

fn parse_program() -> (doclet::Program, doclet::ElementId) {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let string = b.named_type("java.lang.String").unwrap();
    let parser = b.class(package, "Parser").public().finish();
    let parse = b
        .method(parser, "parse")
        .public()
        .returns(string)
        .doc(PARSE_DOC)
        .finish();
    b.parameter(parse, "input", string).finish();
    (b.build(), parse)
}

#[test]
fn test_comment_text_is_the_trimmed_body() {
    let (program, parse) = parse_program();
    let cx = Context::new(program);
    let parse = cx.method(parse).unwrap();

    assert_eq!(
        parse.comment_text(),
        "Parses the {@code input} quickly. See {@linkplain java.lang.String strings} too."
    );
}

#[test]
fn test_raw_comment_text_keeps_block_tags() {
    let (program, parse) = parse_program();
    let cx = Context::new(program);
    let parse = cx.method(parse).unwrap();

    assert_eq!(
        parse.raw_comment_text(),
        "Parses the {@code input} quickly. See {@linkplain java.lang.String strings} too.\n\n\
         @param input the text\n\
         @return the parsed value"
    );
}

#[test]
fn test_inline_tags_alternate_text_and_tags() {
    let (program, parse) = parse_program();
    let cx = Context::new(program);
    let parse = cx.method(parse).unwrap();

    let inline = parse.inline_tags();
    let names: Vec<&str> = inline.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["@text", "@code", "@text", "@linkplain", "@text"]);
    let kinds: Vec<&str> = inline.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, ["@text", "@code", "@text", "@see", "@text"]);
    assert_eq!(
        texts(&inline),
        [
            "Parses the ",
            "{@code input}",
            " quickly. See ",
            "{@linkplain java.lang.String strings}",
            " too.",
        ]
    );
    assert!(inline[1].inline_tags().is_empty());
    assert_eq!(parse.inline_tags(), inline);
}

#[test]
fn test_first_sentence_stops_at_period() {
    let (program, parse) = parse_program();
    let cx = Context::new(program);
    let parse = cx.method(parse).unwrap();

    let first = parse.first_sentence_tags();
    assert_eq!(texts(&first), ["Parses the ", "{@code input}", " quickly."]);

    let inline = parse.inline_tags();
    assert_eq!(first[0], inline[0]);
    assert_eq!(first[1], inline[1]);
    assert_ne!(first[2], inline[2]);
}

#[test]
fn test_single_sentence_body() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let marker = cx.annotation_type(f.marker).unwrap();

    assert_eq!(marker.comment_text(), "Marks things.");
    assert_eq!(texts(&marker.first_sentence_tags()), ["Marks things."]);
    assert_eq!(marker.first_sentence_tags(), marker.inline_tags());
    assert!(marker.tags().is_empty());
}

#[test]
fn test_undocumented_element() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let get = cx.method(f.get).unwrap();

    assert_eq!(get.comment_text(), "");
    assert_eq!(get.raw_comment_text(), "");
    assert!(get.tags().is_empty());
    assert!(get.inline_tags().is_empty());
    assert!(get.first_sentence_tags().is_empty());
    assert!(get.see_tags().is_empty());
}

#[test]
fn test_tags_only_comment() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);
    let outer = cx.class(f.outer).unwrap();

    assert_eq!(outer.comment_text(), "Outer docs.");
    assert_eq!(outer.raw_comment_text(), "Outer docs.\n\n@since 1.0");
    assert_eq!(outer.tags_of_kind("since")[0].text(), "@since 1.0");

    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let only = b
        .class(package, "Only")
        .public()
        .doc("/**\n * @author someone\n */")
        .finish();
    let cx = Context::new(b.build());
    let only = cx.class(only).unwrap();
    assert_eq!(only.comment_text(), "");
    assert_eq!(only.raw_comment_text(), "@author someone");
}
