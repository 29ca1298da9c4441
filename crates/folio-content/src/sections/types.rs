//! Content-type tagging.
//!
//! Summarizes what kinds of content a section holds as a list of tags:
//!
//! - `has-<type>` for every type found
//! - `nb-<type>-<count>` with the number of occurrences per type
//! - `is-only-<type>` when a single type was found, otherwise up to three
//!   ranked composites `is-<t1>-<t2>-<t3>`, `is-<t1>-<t2>`, `is-<t1>`
//!
//! Types are counted over a section's direct children. Paragraphs count their
//! inline children instead of themselves (`text`, `image`, `link` ...), lists
//! count as one `list` and carry their own tags computed from their items,
//! and any other node counts as one occurrence of its own type. Every visited
//! node also receives its own `meta.types` list.

use std::cmp::Ordering;

use crate::mdast::{Node, kind};

/// Occurrence counts keyed by type name, in first-seen order.
///
/// The order is observable in the produced tags, so this is a list rather
/// than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCounter {
    entries: Vec<(String, usize)>,
}

impl TypeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `kind`.
    pub fn record(&mut self, kind: &str) {
        self.add(kind, 1);
    }

    fn add(&mut self, kind: &str, count: usize) {
        match self.entries.iter_mut().find(|(name, _)| name == kind) {
            Some((_, n)) => *n += count,
            None => self.entries.push((kind.to_string(), count)),
        }
    }

    /// Occurrences of `kind`, zero if never seen.
    pub fn get(&self, kind: &str) -> usize {
        self.entries
            .iter()
            .find(|(name, _)| name == kind)
            .map_or(0, |(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, n)| (name.as_str(), *n))
    }

    /// Sum `running` into this counter. Keys already present here keep their
    /// position; keys only in `running` follow in `running`'s order.
    pub fn merged_with(mut self, running: &TypeCounter) -> TypeCounter {
        for (name, n) in &running.entries {
            self.add(name, *n);
        }
        self
    }

    /// Build the tag list for these counts.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.iter().map(|(name, _)| format!("has-{name}")).collect();
        tags.extend(self.iter().map(|(name, n)| format!("nb-{name}-{n}")));

        if let [(only, _)] = self.entries.as_slice() {
            tags.push(format!("is-only-{only}"));
            return tags;
        }

        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|(a, na), (b, nb)| nb.cmp(na).then_with(|| compare_names(a, b)));

        // Each composite extends the previous one and is placed in front of it.
        let composites = ranked
            .into_iter()
            .take(3)
            .fold(Vec::<String>::new(), |names, (name, _)| {
                let head = names.first().map_or("is", String::as_str);
                let mut next = vec![format!("{head}-{name}")];
                next.extend(names);
                next
            });
        tags.extend(composites);
        tags
    }
}

/// Case-insensitive name order. Names equal up to case put lowercase first.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Fold `nodes` left to right into `counter`, tagging each node on the way.
pub fn count_types(nodes: &mut [Node], counter: TypeCounter) -> TypeCounter {
    nodes
        .iter_mut()
        .fold(counter, |running, node| tag_node(node, running))
}

/// Count a single node, set its own `meta.types`, and return the new running
/// counter.
fn tag_node(node: &mut Node, running: TypeCounter) -> TypeCounter {
    let mut own_tags = Vec::new();

    if node.is(kind::YAML) {
        set_node_types(node, own_tags);
        return running;
    }

    let mut local = TypeCounter::new();

    if node.is(kind::PARAGRAPH) {
        for child in &node.children {
            let prefix = if child.is(kind::TEXT) {
                if matches!(child.value.as_deref(), None | Some("") | Some("\n")) {
                    continue;
                }
                "is"
            } else {
                "has"
            };
            let tag = format!("{prefix}-{}", child.kind);
            if !own_tags.contains(&tag) {
                own_tags.push(tag);
            }
            local.record(&child.kind);
        }
    }

    if node.is(kind::LIST) && !node.children.is_empty() {
        let nested = node
            .children
            .iter_mut()
            .fold(TypeCounter::new(), |acc, item| {
                count_types(&mut item.children, acc)
            });
        own_tags.extend(nested.tags());
    }

    if local.is_empty() {
        local.record(&node.kind);
        own_tags.push(format!("is-{}", node.kind));
    }

    set_node_types(node, own_tags);
    local.merged_with(&running)
}

fn set_node_types(node: &mut Node, types: Vec<String>) {
    node.meta_mut().set_types(types);
}

/// Compute the content-type tags of a section from its direct children.
pub fn section_types(section: &mut Node) -> Vec<String> {
    let counter = count_types(&mut section.children, TypeCounter::new());
    log::trace!("section type counts: {counter:?}");
    counter.tags()
}

// ============================================================================
// Tests
// ============================================================================
