//! Markdown to syntax tree parsing.
//!
//! Builds an mdast-shaped [`Node`] tree from `pulldown-cmark` events:
//!
//! - A leading `---` YAML block becomes a `yaml` node with a parsed payload
//! - `---`, `***` and `___` rules become `thematicBreak` nodes
//! - Inline content of tight list items is wrapped in a `paragraph`, as mdast
//!   does for every list item
//! - Adjacent text runs and soft breaks are merged into one `text` node
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::parse_markdown;
//!
//! let tree = parse_markdown("---\ntitle: Hi\n---\n\n# Heading\n\nBody text.");
//! let kinds: Vec<&str> = tree.children.iter().map(|n| n.kind.as_str()).collect();
//! assert_eq!(kinds, ["yaml", "heading", "paragraph"]);
//! ```

use crate::markdown::frontmatter::parse_payload;
use crate::mdast::{Node, kind, to_plain_string};
use folio_core::MarkdownConfig;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use serde_json::Value;

/// Node type of frames that are spliced into their parent when closed.
const TRANSPARENT: &str = "";

/// Markdown parser producing mdast trees.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl MarkdownParser {
    /// Create a parser with the configured extensions.
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::ENABLE_TASKLISTS | Options::ENABLE_FOOTNOTES;
        if config.front_matter {
            options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
        }
        if config.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if config.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        Self { options }
    }

    /// Parse markdown content into a `root` node.
    pub fn parse(&self, content: &str) -> Node {
        let mut builder = TreeBuilder::new();
        for event in Parser::new_ext(content, self.options) {
            builder.push_event(event);
        }
        builder.finish()
    }
}

/// Parse markdown with the default configuration.
pub fn parse_markdown(content: &str) -> Node {
    MarkdownParser::default().parse(content)
}

// ============================================================================
// Tree construction
// ============================================================================

struct Frame {
    node: Node,
    /// Opened by the builder rather than by a `Start` event.
    implicit: bool,
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame {
                node: Node::root(Vec::new()),
                implicit: false,
            }],
        }
    }

    fn top(&self) -> &Node {
        // The root frame is never popped before `finish`.
        &self.stack[self.stack.len() - 1].node
    }

    fn top_mut(&mut self) -> &mut Node {
        let last = self.stack.len() - 1;
        &mut self.stack[last].node
    }

    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline(Node::literal(kind::INLINE_CODE, code.to_string())),
            Event::InlineMath(math) => {
                self.inline(Node::literal(kind::INLINE_MATH, math.to_string()))
            }
            Event::DisplayMath(math) => self.inline(Node::literal(kind::MATH, math.to_string())),
            Event::Html(html) => {
                if self.top().is(kind::HTML) {
                    append_value(self.top_mut(), &html);
                } else {
                    self.block(Node::literal(kind::HTML, html.trim_end().to_string()));
                }
            }
            Event::InlineHtml(html) => self.inline(Node::literal(kind::HTML, html.to_string())),
            Event::FootnoteReference(label) => {
                let mut node = Node::new(kind::FOOTNOTE_REFERENCE);
                node.data
                    .insert("identifier".to_string(), Value::from(label.to_lowercase()));
                node.data
                    .insert("label".to_string(), Value::from(label.to_string()));
                self.inline(node);
            }
            Event::SoftBreak => self.text("\n"),
            Event::HardBreak => self.inline(Node::new(kind::BREAK)),
            Event::Rule => self.block(Node::thematic_break()),
            Event::TaskListMarker(checked) => self.mark_task(checked),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        // Formatting inside an image only contributes to its alt text.
        if self.image_frame().is_some() {
            self.stack.push(Frame {
                node: Node::new(TRANSPARENT),
                implicit: false,
            });
            return;
        }
        let inline = is_inline(&tag);
        let node = node_for_tag(tag);
        if inline {
            self.open_implicit_paragraph();
        } else {
            self.close_implicit();
        }
        self.stack.push(Frame {
            node,
            implicit: false,
        });
    }

    fn end(&mut self) {
        self.close_implicit();
        if self.stack.len() > 1 {
            self.close_top();
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(image) = self.image_frame() {
            image.alt.get_or_insert_with(String::new).push_str(text);
            return;
        }
        let top = self.top_mut();
        if [kind::CODE, kind::YAML, kind::HTML].iter().any(|k| top.is(k)) {
            append_value(top, text);
            return;
        }

        self.open_implicit_paragraph();
        let top = self.top_mut();
        if let Some(last) = top.children.last_mut().filter(|n| n.is(kind::TEXT)) {
            append_value(last, text);
        } else {
            top.children.push(Node::text(text));
        }
    }

    fn inline(&mut self, node: Node) {
        if let Some(image) = self.image_frame() {
            let text = to_plain_string(&node);
            image.alt.get_or_insert_with(String::new).push_str(&text);
            return;
        }
        self.open_implicit_paragraph();
        self.top_mut().children.push(node);
    }

    fn block(&mut self, node: Node) {
        self.close_implicit();
        self.top_mut().children.push(node);
    }

    fn image_frame(&mut self) -> Option<&mut Node> {
        self.stack
            .iter_mut()
            .rev()
            .map(|frame| &mut frame.node)
            .find(|node| node.is(kind::IMAGE))
    }

    fn mark_task(&mut self, checked: bool) {
        if let Some(frame) = self
            .stack
            .iter_mut()
            .rev()
            .find(|f| f.node.is(kind::LIST_ITEM))
        {
            frame
                .node
                .data
                .insert("checked".to_string(), Value::Bool(checked));
        }
    }

    fn open_implicit_paragraph(&mut self) {
        if self.top().is(kind::LIST_ITEM) {
            self.stack.push(Frame {
                node: Node::paragraph(Vec::new()),
                implicit: true,
            });
        }
    }

    fn close_implicit(&mut self) {
        while self.stack.len() > 1 && self.stack[self.stack.len() - 1].implicit {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let node = finish_node(frame.node);
        let parent = self.top_mut();
        if node.kind == TRANSPARENT {
            parent.children.extend(node.children);
        } else {
            parent.children.push(node);
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack
            .pop()
            .map(|frame| frame.node)
            .unwrap_or_else(|| Node::root(Vec::new()))
    }
}

fn append_value(node: &mut Node, text: &str) {
    node.value.get_or_insert_with(String::new).push_str(text);
}

/// Post-process a node once all of its content has been seen.
fn finish_node(mut node: Node) -> Node {
    if node.is(kind::YAML) {
        let raw = node.value.clone().unwrap_or_default();
        node.payload = Some(parse_payload(&raw));
    }
    if node.is(kind::CODE) || node.is(kind::HTML) {
        if let Some(value) = node.value.as_mut() {
            let trimmed = value.trim_end_matches('\n').len();
            value.truncate(trimmed);
        }
    }
    node
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn node_for_tag(tag: Tag<'_>) -> Node {
    match tag {
        Tag::Paragraph => Node::paragraph(Vec::new()),
        Tag::Heading { level, .. } => Node::heading(heading_depth(level), Vec::new()),
        Tag::BlockQuote(_) => Node::new(kind::BLOCKQUOTE),
        Tag::CodeBlock(code) => {
            let mut node = Node::literal(kind::CODE, "");
            if let CodeBlockKind::Fenced(info) = code {
                if let Some(lang) = info.split_whitespace().next() {
                    node.data
                        .insert("lang".to_string(), Value::from(lang.to_string()));
                }
            }
            node
        }
        Tag::HtmlBlock => Node::literal(kind::HTML, ""),
        Tag::List(start) => {
            let mut node = Node::list(start.is_some(), Vec::new());
            if let Some(start) = start {
                node.data.insert("start".to_string(), Value::from(start));
            }
            node
        }
        Tag::Item => {
            let mut node = Node::list_item(Vec::new());
            node.data.insert("spread".to_string(), Value::Bool(false));
            node
        }
        Tag::FootnoteDefinition(label) => {
            let mut node = Node::new(kind::FOOTNOTE_DEFINITION);
            node.data
                .insert("identifier".to_string(), Value::from(label.to_lowercase()));
            node.data
                .insert("label".to_string(), Value::from(label.to_string()));
            node
        }
        Tag::Table(_) => Node::new(kind::TABLE),
        Tag::TableHead | Tag::TableRow => Node::new(kind::TABLE_ROW),
        Tag::TableCell => Node::new(kind::TABLE_CELL),
        Tag::Emphasis => Node::new(kind::EMPHASIS),
        Tag::Strong => Node::new(kind::STRONG),
        Tag::Strikethrough => Node::new(kind::DELETE),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut node = Node::link(dest_url.to_string(), Vec::new());
            if !title.is_empty() {
                node.title = Some(title.to_string());
            }
            node
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let mut node = Node::image(dest_url.to_string(), "");
            if !title.is_empty() {
                node.title = Some(title.to_string());
            }
            node
        }
        Tag::MetadataBlock(_) => Node::literal(kind::YAML, ""),
        _ => Node::new(TRANSPARENT),
    }
}

// ============================================================================
// Tests
// ============================================================================
