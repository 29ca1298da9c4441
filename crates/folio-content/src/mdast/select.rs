//! Node selection by type.
//!
//! Both functions walk the tree depth-first in document order and consider the
//! tree root itself as a candidate.

use super::node::Node;

/// Return the first node of the given type, if any.
pub fn select<'a>(kind: &str, tree: &'a Node) -> Option<&'a Node> {
    tree.descendants().find(|node| node.is(kind))
}

/// Return every node of the given type, in document order.
pub fn select_all<'a>(kind: &str, tree: &'a Node) -> Vec<&'a Node> {
    tree.descendants().filter(|node| node.is(kind)).collect()
}
