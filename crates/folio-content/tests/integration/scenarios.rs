//! End-to-end scenarios on hand-built trees.

use folio_content::{IdentityRewriter, kind, process};
use serde_json::json;

use crate::common::*;

#[test]
fn test_front_matter_heading_and_break() {
    let input = root(vec![
        yaml(json!({"a": 1})),
        heading("Title"),
        para("Hello"),
        hr(),
        para("World"),
    ]);
    let content = process(&input, &IdentityRewriter);
    let sections = content.sections();
    assert_eq!(sections.len(), 2);

    let a = sections[0];
    assert_eq!(a.meta.as_ref().unwrap().get("a"), Some(&json!(1)));
    assert_eq!(a.section_title(), "Title");
    assert_eq!(a.section_intro(), "Hello");

    let b = sections[1];
    assert_eq!(b.section_title(), "World");
    assert_eq!(b.section_intro(), "World");

    assert_eq!(content.title, "Title");
    assert_eq!(content.intro, "Hello");
    assert_eq!(content.meta.get("a"), Some(&json!(1)));
    assert!(content.image.is_none());
}

#[test]
fn test_lone_image_paragraph() {
    let input = root(vec![folio_content::Node::paragraph(vec![
        folio_content::Node::image("pic.png", "a picture"),
    ])]);
    let content = process(&input, &IdentityRewriter);

    assert_eq!(content.intro, "");
    assert_eq!(content.title, "");
    assert_eq!(content.mdast.section_title(), "");
    assert_eq!(content.mdast.section_intro(), "");
    assert_eq!(content.image.as_deref(), Some("pic.png"));
}

#[test]
fn test_text_and_list_types() {
    let input = root(vec![para("a"), para("b"), list(vec![vec![para("c")]])]);
    let content = process(&input, &IdentityRewriter);
    let types = &content.meta.types;

    assert!(types.contains(&"has-text".to_string()));
    assert!(types.contains(&"nb-text-2".to_string()));
    assert!(types.contains(&"has-list".to_string()));
    assert!(!types.iter().any(|t| t.starts_with("is-only-")));
    assert_eq!(
        types,
        &[
            "has-list",
            "has-text",
            "nb-list-1",
            "nb-text-2",
            "is-text-list",
            "is-text"
        ]
    );
}

#[test]
fn test_empty_document() {
    let input = root(Vec::new());
    let content = process(&input, &IdentityRewriter);

    assert!(content.mdast.children.is_empty());
    assert_eq!(content.sections().len(), 1);
    assert!(content.sections()[0].is(kind::ROOT));
    assert_eq!(content.title, "");
    assert_eq!(content.intro, "");
    assert!(content.meta.types.is_empty());
    assert!(content.meta.fields.is_empty());
}

#[test]
fn test_only_breaks_falls_back_to_root() {
    let input = root(vec![hr(), hr()]);
    let content = process(&input, &IdentityRewriter);
    assert!(content.mdast.children.is_empty());
    assert!(content.meta.types.is_empty());
}

#[test]
fn test_input_tree_is_reusable() {
    let input = root(vec![heading("T"), para("p"), hr(), para("q")]);
    let snapshot = input.clone();
    let first = process(&input, &IdentityRewriter);
    let second = process(&input, &IdentityRewriter);
    assert_eq!(input, snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_yaml_without_payload_degrades() {
    let input = root(vec![
        folio_content::Node::new(kind::YAML),
        heading("Head"),
    ]);
    let content = process(&input, &IdentityRewriter);
    assert!(content.meta.fields.is_empty());
    assert_eq!(content.title, "Head");
}

#[test]
fn test_later_section_supplies_image_and_title() {
    let input = root(vec![
        para("no heading here"),
        hr(),
        heading("Gallery"),
        folio_content::Node::paragraph(vec![folio_content::Node::image("g.png", "")]),
    ]);
    let content = process(&input, &IdentityRewriter);
    // The first section's intro doubles as its title through the fallback.
    assert_eq!(content.title, "no heading here");
    assert_eq!(content.intro, "no heading here");
    assert_eq!(content.image.as_deref(), Some("g.png"));
}
