//! Property-based tests over generated documents.

use folio_content::sections::{section_types, split_sections};
use folio_content::{IdentityRewriter, Node, kind, process};
use proptest::prelude::*;
use serde_json::json;

use crate::common::*;

fn arb_node() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(|s| para(&s)),
        "[a-z]{1,6}".prop_map(|s| heading(&s)),
        Just(hr()),
        (0u8..4).prop_map(|n| yaml(json!({ "k": n }))),
        Just(Node::paragraph(vec![Node::image("i.png", "")])),
        Just(Node::paragraph(Vec::new())),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(|items| {
            list(items.iter().map(|s| vec![para(s)]).collect())
        }),
        Just(Node::new(kind::CODE)),
    ]
}

fn arb_children() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(arb_node(), 0..12)
}

/// Section contents concatenated, or the root's own children when unwrapped.
fn flattened(out: &Node) -> Vec<Node> {
    out.children
        .iter()
        .flat_map(|n| {
            if n.is(kind::SECTION) {
                n.children.clone()
            } else {
                vec![n.clone()]
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn test_sections_cover_all_non_break_nodes(children in arb_children()) {
        let out = split_sections(&root(children.clone()));
        let expected: Vec<Node> = children
            .into_iter()
            .filter(|n| !n.is(kind::THEMATIC_BREAK))
            .collect();
        prop_assert_eq!(flattened(&out), expected);
    }

    #[test]
    fn test_no_empty_sections(children in arb_children()) {
        let out = split_sections(&root(children));
        for node in out.children.iter().filter(|n| n.is(kind::SECTION)) {
            prop_assert!(!node.children.is_empty());
        }
    }

    #[test]
    fn test_no_dividers_is_unwrapped(children in arb_children()) {
        let children: Vec<Node> = children
            .into_iter()
            .filter(|n| !n.is(kind::THEMATIC_BREAK) && !n.is(kind::YAML))
            .collect();
        let input = root(children);
        prop_assert_eq!(split_sections(&input), input);
    }

    #[test]
    fn test_title_and_intro_both_set_or_both_empty(children in arb_children()) {
        let content = process(&root(children), &IdentityRewriter);
        for section in content.sections() {
            prop_assert_eq!(
                section.section_title().is_empty(),
                section.section_intro().is_empty()
            );
        }
    }

    #[test]
    fn test_type_tags_deterministic(children in arb_children()) {
        let mut section = Node::section(children);
        let first = section_types(&mut section);
        let second = section_types(&mut section);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_type_tags_unique(children in arb_children()) {
        let types = section_types(&mut Node::section(children));
        let mut seen = std::collections::HashSet::new();
        for tag in &types {
            prop_assert!(seen.insert(tag.clone()), "duplicate tag {}", tag);
        }
    }
}
