//! The processed document and the entry points producing it.

use folio_core::{FolioConfig, Result};
use serde::{Deserialize, Serialize};

use crate::markdown::MarkdownParser;
use crate::mdast::{Meta, Node, UrlRewriter, rewriter_from_config};
use crate::sections::metadata::{extract_metadata, sections};
use crate::sections::split::split_sections;

/// A document after splitting and metadata extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// The split tree: `section` children, or the original content when the
    /// document has a single section.
    pub mdast: Node,

    /// Meta of the first section.
    pub meta: Meta,

    /// Title of the first section that has one.
    pub title: String,

    /// Intro of the first section.
    pub intro: String,

    /// Image of the first section that has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Content {
    /// The annotated sections, or the root when the document was not split.
    pub fn sections(&self) -> Vec<&Node> {
        sections(&self.mdast)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Split `mdast` into sections and extract their metadata.
///
/// The input tree is not modified.
pub fn process(mdast: &Node, rewriter: &dyn UrlRewriter) -> Content {
    extract_metadata(split_sections(mdast), rewriter)
}

/// Parser and URL rewriter bundled from configuration.
pub struct SectionProcessor {
    parser: MarkdownParser,
    rewriter: Box<dyn UrlRewriter>,
}

impl Default for SectionProcessor {
    fn default() -> Self {
        Self::from_config(&FolioConfig::default())
    }
}

impl SectionProcessor {
    pub fn from_config(config: &FolioConfig) -> Self {
        Self {
            parser: MarkdownParser::new(&config.markdown),
            rewriter: rewriter_from_config(&config.images),
        }
    }

    /// Use a custom URL rewriter.
    pub fn with_rewriter(mut self, rewriter: impl UrlRewriter + 'static) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    /// Process an already parsed tree.
    pub fn process(&self, mdast: &Node) -> Content {
        process(mdast, self.rewriter.as_ref())
    }

    /// Parse markdown and process the resulting tree.
    pub fn process_markdown(&self, markdown: &str) -> Content {
        self.process(&self.parser.parse(markdown))
    }

    /// Parse mdast JSON and process the resulting tree.
    pub fn process_json(&self, json: &str) -> Result<Content> {
        Ok(self.process(&Node::from_json(json)?))
    }
}
