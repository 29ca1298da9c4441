//! Markdown parsing into syntax trees.
//!
//! - [`frontmatter`]: YAML front-matter payload parsing
//! - [`parser`]: `pulldown-cmark` events to mdast [`Node`](crate::mdast::Node) trees

pub mod frontmatter;
pub mod parser;

pub use frontmatter::parse_payload;
pub use parser::{MarkdownParser, parse_markdown};
