//! Tree builders shared by the integration tests.

#![allow(dead_code)]

use folio_content::{Node, Payload};
use serde_json::Value;

pub fn text(value: &str) -> Node {
    Node::text(value)
}

pub fn para(value: &str) -> Node {
    Node::paragraph(vec![text(value)])
}

pub fn heading(value: &str) -> Node {
    Node::heading(1, vec![text(value)])
}

pub fn hr() -> Node {
    Node::thematic_break()
}

pub fn yaml(value: Value) -> Node {
    let payload: Payload = value.as_object().cloned().unwrap_or_default();
    Node::yaml(payload)
}

pub fn list(items: Vec<Vec<Node>>) -> Node {
    Node::list(false, items.into_iter().map(Node::list_item).collect())
}

pub fn root(children: Vec<Node>) -> Node {
    Node::root(children)
}
