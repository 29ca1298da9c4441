//! The markdown syntax tree and the utilities that query it.
//!
//! - [`node`]: The [`Node`] type, mdast JSON compatible
//! - [`select`]: Find nodes by type, depth-first in document order
//! - [`text`]: Flatten a node to plain text
//! - [`rewrite`]: Normalize image URLs

pub mod node;
pub mod rewrite;
pub mod select;
pub mod text;

pub use node::{Descendants, Meta, Node, Payload, kind};
pub use rewrite::{BaseUrlRewriter, IdentityRewriter, UrlRewriter, rewriter_from_config};
pub use select::{select, select_all};
pub use text::to_plain_string;
