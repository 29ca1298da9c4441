//! Golden content-type tags. The composite ranking order is a contract.

use folio_content::sections::section_types;
use folio_content::{Node, kind};

use crate::common::*;

fn types_of(children: Vec<Node>) -> Vec<String> {
    section_types(&mut Node::section(children))
}

#[test]
fn test_golden_single_paragraph() {
    assert_eq!(
        types_of(vec![para("hello")]),
        ["has-text", "nb-text-1", "is-only-text"]
    );
}

#[test]
fn test_golden_heading_then_paragraph() {
    assert_eq!(
        types_of(vec![heading("T"), para("p")]),
        [
            "has-text",
            "has-heading",
            "nb-text-1",
            "nb-heading-1",
            "is-heading-text",
            "is-heading"
        ]
    );
}

#[test]
fn test_golden_three_types_ranked() {
    let children = vec![
        Node::paragraph(vec![
            text("a"),
            Node::image("1.png", ""),
            Node::image("2.png", ""),
        ]),
        Node::paragraph(vec![Node::image("3.png", "")]),
        heading("h"),
        Node::new(kind::CODE),
    ];
    assert_eq!(
        types_of(children),
        [
            "has-code",
            "has-heading",
            "has-image",
            "has-text",
            "nb-code-1",
            "nb-heading-1",
            "nb-image-3",
            "nb-text-1",
            "is-image-code-heading",
            "is-image-code",
            "is-image"
        ]
    );
}

#[test]
fn test_golden_four_types_keeps_top_three() {
    let children = vec![
        para("a"),
        para("b"),
        heading("h"),
        Node::new(kind::BLOCKQUOTE),
        Node::new(kind::CODE),
    ];
    let types = types_of(children);
    assert_eq!(
        &types[types.len() - 3..],
        ["is-text-blockquote-code", "is-text-blockquote", "is-text"]
    );
}

#[test]
fn test_golden_paragraph_with_link_and_blank_text() {
    let children = vec![Node::paragraph(vec![
        text("\n"),
        Node::link("https://example.com", vec![text("x")]),
    ])];
    assert_eq!(
        types_of(children),
        ["has-link", "nb-link-1", "is-only-link"]
    );
}

#[test]
fn test_golden_list_only() {
    let children = vec![list(vec![vec![para("a")], vec![para("b")]])];
    let mut section = Node::section(children);
    let types = section_types(&mut section);
    assert_eq!(types, ["has-list", "nb-list-1", "is-only-list"]);
    assert_eq!(
        section.children[0].types(),
        ["has-text", "nb-text-2", "is-only-text", "is-list"]
    );
}

#[test]
fn test_golden_front_matter_skipped() {
    let children = vec![yaml(serde_json::json!({"a": 1})), para("x")];
    assert_eq!(
        types_of(children),
        ["has-text", "nb-text-1", "is-only-text"]
    );
}
