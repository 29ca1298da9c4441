//! Plain-text flattening.

use super::node::Node;

/// Flatten a node to its plain-text content.
///
/// Literal nodes yield their `value`, images their `alt` text, and containers
/// the concatenation of their children. No separators are inserted.
pub fn to_plain_string(node: &Node) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Node, out: &mut String) {
    if let Some(value) = &node.value {
        out.push_str(value);
    } else if let Some(alt) = node.alt.as_deref().filter(|alt| !alt.is_empty()) {
        out.push_str(alt);
    } else {
        for child in &node.children {
            push_text(child, out);
        }
    }
}
