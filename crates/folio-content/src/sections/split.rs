//! Section splitting.
//!
//! Partitions the top-level children of a document into `section` nodes.
//! Front-matter (`yaml`) blocks and thematic breaks are dividers:
//!
//! ```text
//! [yaml, heading, paragraph, thematicBreak, paragraph]
//!   -> [section[yaml, heading, paragraph], section[paragraph]]
//! ```
//!
//! A `yaml` divider opens the section it starts, so its payload can be merged
//! into that section's meta. A thematic break is a pure separator and is not
//! part of any section. Empty spans are dropped, and a document that ends up
//! with a single section is kept flat.

use std::ops::Range;

use crate::mdast::{Meta, Node, kind, select_all};

/// The two kinds of node that delimit sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divider {
    /// A `yaml` front-matter block; it belongs to the section it opens.
    FrontMatter,
    /// A `thematicBreak`; it belongs to no section.
    Break,
}

impl Divider {
    /// Classify a node, `None` for ordinary content.
    pub fn of(node: &Node) -> Option<Self> {
        if node.is(kind::YAML) {
            Some(Divider::FrontMatter)
        } else if node.is(kind::THEMATIC_BREAK) {
            Some(Divider::Break)
        } else {
            None
        }
    }
}

/// A divider found at a top-level position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub divider: Divider,
    pub position: usize,
}

/// Scan the children once, left to right, for dividers.
pub fn divider_markers(children: &[Node]) -> Vec<Marker> {
    children
        .iter()
        .enumerate()
        .filter_map(|(position, node)| {
            Divider::of(node).map(|divider| Marker { divider, position })
        })
        .collect()
}

/// Compute the child index range of every section.
///
/// The document start and end act as implicit dividers. A span that starts
/// with a thematic break skips it; spans left empty are dropped.
pub fn section_spans(children: &[Node]) -> Vec<Range<usize>> {
    let markers = divider_markers(children);
    let starts = std::iter::once(None).chain(markers.iter().map(Some));
    let ends = markers
        .iter()
        .map(|m| m.position)
        .chain(std::iter::once(children.len()));

    starts
        .zip(ends)
        .filter_map(|(start, end)| {
            let start = match start {
                None => 0,
                Some(Marker {
                    divider: Divider::Break,
                    position,
                }) => position + 1,
                Some(Marker {
                    divider: Divider::FrontMatter,
                    position,
                }) => *position,
            };
            (start < end).then_some(start..end)
        })
        .collect()
}

/// Build a section node from a run of sibling nodes.
///
/// The section's meta merges every `yaml` payload in its subtree, in
/// document order.
pub fn make_section(children: Vec<Node>) -> Node {
    let mut section = Node::section(children);
    section.meta = Some(section_meta(&section));
    section
}

/// Merge all front-matter payloads found anywhere below `node`.
pub fn section_meta(node: &Node) -> Meta {
    Meta::from_payloads(
        select_all(kind::YAML, node)
            .into_iter()
            .filter_map(|yaml| yaml.payload.as_ref()),
    )
}

/// Split the document root into sections, returning a new root.
///
/// The input tree is left untouched. When exactly one section results, its
/// children are placed directly on the root.
pub fn split_sections(root: &Node) -> Node {
    let mut sections: Vec<Node> = section_spans(&root.children)
        .into_iter()
        .map(|span| make_section(root.children[span].to_vec()))
        .collect();

    log::debug!(
        "split {} top-level nodes into {} sections",
        root.children.len(),
        sections.len()
    );

    if sections.len() == 1 && sections[0].is(kind::SECTION) {
        let only = sections.remove(0);
        return root.with_children(only.children);
    }
    root.with_children(sections)
}

// ============================================================================
// Tests
// ============================================================================
