//! The markdown syntax tree node.
//!
//! [`Node`] mirrors the JSON shape of mdast: every node has a `type`, container
//! nodes have `children`, literals have a `value`. Properties this crate does
//! not interpret (`depth`, `ordered`, `position`, ...) are kept verbatim in
//! [`Node::data`] so a tree survives a JSON round-trip unchanged.
//!
//! Sections add derived properties on top of mdast: `meta`, `title`, `intro`
//! and `image`. `title` doubles as the link/image title attribute, exactly as
//! it does in mdast JSON.
//!
//! Input trees are read leniently. Only an object `meta` becomes a [`Meta`];
//! the string `meta` of a fenced `code` node (` ```js title=app.js `) stays in
//! [`Node::data`]. Likewise only an object `payload` is taken as front-matter.

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A front-matter payload: string keys mapped to arbitrary values.
pub type Payload = Map<String, Value>;

/// Node type names used by the transform.
pub mod kind {
    pub const ROOT: &str = "root";
    pub const SECTION: &str = "section";
    pub const YAML: &str = "yaml";
    pub const THEMATIC_BREAK: &str = "thematicBreak";
    pub const HEADING: &str = "heading";
    pub const PARAGRAPH: &str = "paragraph";
    pub const LIST: &str = "list";
    pub const LIST_ITEM: &str = "listItem";
    pub const IMAGE: &str = "image";
    pub const TEXT: &str = "text";
    pub const LINK: &str = "link";
    pub const EMPHASIS: &str = "emphasis";
    pub const STRONG: &str = "strong";
    pub const DELETE: &str = "delete";
    pub const INLINE_CODE: &str = "inlineCode";
    pub const CODE: &str = "code";
    pub const HTML: &str = "html";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const BREAK: &str = "break";
    pub const TABLE: &str = "table";
    pub const TABLE_ROW: &str = "tableRow";
    pub const TABLE_CELL: &str = "tableCell";
    pub const FOOTNOTE_DEFINITION: &str = "footnoteDefinition";
    pub const FOOTNOTE_REFERENCE: &str = "footnoteReference";
    pub const MATH: &str = "math";
    pub const INLINE_MATH: &str = "inlineMath";
}

/// Metadata attached to sections and to nodes visited by the content-type pass.
///
/// Front-matter keys are flattened next to the computed `types` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Merged front-matter fields.
    #[serde(flatten)]
    pub fields: Payload,

    /// Content-type tags.
    #[serde(default)]
    pub types: Vec<String>,
}

impl Meta {
    /// Merge payloads left to right; later keys overwrite earlier ones.
    pub fn from_payloads<'a, I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = &'a Payload>,
    {
        let mut meta = Meta::default();
        for payload in payloads {
            meta.merge(payload);
        }
        meta
    }

    /// Merge a single payload into this meta.
    pub fn merge(&mut self, payload: &Payload) {
        for (key, value) in payload {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Replace the content-type tags. A front-matter `types` key is dropped
    /// so the computed list is the only one serialized.
    pub fn set_types(&mut self, types: Vec<String>) {
        self.fields.remove("types");
        self.types = types;
    }

    /// Look up a front-matter field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A node of the markdown syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    /// The node type, e.g. `paragraph` or `thematicBreak`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Literal content of `text`, `code`, `yaml`, `html` ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Link/image title, or the derived title of a section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Parsed front-matter of a `yaml` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Every other property, preserved as-is.
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Node {
    /// Create an empty node of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Create a container node.
    pub fn parent(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: kind.into(),
            children,
            ..Self::default()
        }
    }

    /// Create a literal node carrying a `value`.
    pub fn literal(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn root(children: Vec<Node>) -> Self {
        Self::parent(kind::ROOT, children)
    }

    pub fn section(children: Vec<Node>) -> Self {
        Self::parent(kind::SECTION, children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::literal(kind::TEXT, value)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::parent(kind::PARAGRAPH, children)
    }

    /// A heading of the given depth (1-6).
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        let mut node = Self::parent(kind::HEADING, children);
        node.data.insert("depth".to_string(), Value::from(depth));
        node
    }

    pub fn thematic_break() -> Self {
        Self::new(kind::THEMATIC_BREAK)
    }

    pub fn list(ordered: bool, items: Vec<Node>) -> Self {
        let mut node = Self::parent(kind::LIST, items);
        node.data.insert("ordered".to_string(), Value::Bool(ordered));
        node
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Self::parent(kind::LIST_ITEM, children)
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: kind::IMAGE.to_string(),
            url: Some(url.into()),
            alt: Some(alt.into()),
            ..Self::default()
        }
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: kind::LINK.to_string(),
            url: Some(url.into()),
            children,
            ..Self::default()
        }
    }

    /// A front-matter node with an already parsed payload.
    pub fn yaml(payload: Payload) -> Self {
        Self {
            kind: kind::YAML.to_string(),
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Replace the node's metadata. A non-object `meta` read from JSON is
    /// dropped.
    pub fn set_meta(&mut self, meta: Meta) {
        self.data.remove("meta");
        self.meta = Some(meta);
    }

    /// The node's metadata, created empty when missing.
    pub fn meta_mut(&mut self) -> &mut Meta {
        self.data.remove("meta");
        self.meta.get_or_insert_with(Meta::default)
    }

    /// The info string after the language of a fenced `code` node.
    pub fn fence_meta(&self) -> Option<&str> {
        self.data.get("meta").and_then(Value::as_str)
    }

    /// Check the node type.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Copy every property except `children`, which is replaced.
    pub fn with_children(&self, children: Vec<Node>) -> Self {
        Self {
            kind: self.kind.clone(),
            children,
            value: self.value.clone(),
            url: self.url.clone(),
            alt: self.alt.clone(),
            title: self.title.clone(),
            payload: self.payload.clone(),
            meta: self.meta.clone(),
            intro: self.intro.clone(),
            image: self.image.clone(),
            data: self.data.clone(),
        }
    }

    /// The content-type tags on this node, empty if none were computed.
    pub fn types(&self) -> &[String] {
        self.meta.as_ref().map(|m| m.types.as_slice()).unwrap_or(&[])
    }

    /// Derived section title, empty if unset.
    pub fn section_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Derived section intro, empty if unset.
    pub fn section_intro(&self) -> &str {
        self.intro.as_deref().unwrap_or_default()
    }

    /// Depth-first, document-order iterator over this node and its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Parse a tree from mdast JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("invalid mdast JSON: {e}")))
    }

    /// Serialize the tree to pretty-printed mdast JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wire shape of a node. `meta` and `payload` arrive through `data` and are
/// only lifted out when they are objects.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    intro: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(flatten)]
    data: Map<String, Value>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let mut data = raw.data;
        let meta = match data.remove("meta") {
            Some(Value::Object(map)) => Some(meta_from_map(map)),
            Some(Value::Null) | None => None,
            Some(other) => {
                data.insert("meta".to_string(), other);
                None
            }
        };
        let payload = match data.remove("payload") {
            Some(Value::Object(map)) => Some(map),
            Some(Value::Null) | None => None,
            Some(other) => {
                log::debug!("ignoring non-object payload on {} node", raw.kind);
                data.insert("payload".to_string(), other);
                None
            }
        };
        Self {
            kind: raw.kind,
            children: raw.children,
            value: raw.value,
            url: raw.url,
            alt: raw.alt,
            title: raw.title,
            payload,
            meta,
            intro: raw.intro,
            image: raw.image,
            data,
        }
    }
}

/// Build a [`Meta`] from a JSON object, keeping `types` only when it is a
/// list of strings.
fn meta_from_map(mut fields: Payload) -> Meta {
    let types = fields
        .remove("types")
        .and_then(|types| serde_json::from_value(types).ok())
        .unwrap_or_default();
    Meta { fields, types }
}

/// Pre-order traversal, see [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// ============================================================================
// Tests
// ============================================================================
