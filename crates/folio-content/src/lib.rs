//! Section splitting and metadata extraction for markdown syntax trees.
//!
//! A parsed document (an mdast tree) is processed in two stages:
//!
//! 1. **Split**: the top-level children are partitioned into `section` nodes
//!    at front-matter blocks and thematic breaks.
//! 2. **Extract**: each section gets its front-matter `meta`, a `title`, an
//!    `intro`, a representative `image` and a list of content-type tags; the
//!    document summary is rolled up from the sections.
//!
//! # Modules
//!
//! - [`mdast`]: The tree type and its query utilities
//! - [`markdown`]: Markdown and front-matter parsing
//! - [`sections`]: The split and extract stages
//!
//! # Example
//!
//! ```rust
//! use folio_content::{SectionProcessor, kind};
//!
//! let md = "---\nauthor: Ada\n---\n\n# Intro\n\nHello there.\n\n---\n\nSecond part.";
//! let content = SectionProcessor::default().process_markdown(md);
//!
//! assert_eq!(content.title, "Intro");
//! assert_eq!(content.intro, "Hello there.");
//! assert_eq!(content.meta.get("author").and_then(|v| v.as_str()), Some("Ada"));
//!
//! let sections = content.sections();
//! assert_eq!(sections.len(), 2);
//! assert!(sections.iter().all(|s| s.is(kind::SECTION)));
//! assert_eq!(sections[1].section_title(), "Second part.");
//! ```

pub mod markdown;
pub mod mdast;
pub mod sections;

// Re-export commonly used types
pub use markdown::{MarkdownParser, parse_markdown};
pub use mdast::{
    BaseUrlRewriter, IdentityRewriter, Meta, Node, Payload, UrlRewriter, kind, select, select_all,
    to_plain_string,
};
pub use sections::{Content, SectionProcessor, extract_metadata, process, split_sections};
