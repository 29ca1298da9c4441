//! Section splitting and metadata extraction.
//!
//! - [`split`]: Partition top-level nodes into `section` nodes
//! - [`types`]: Content-type counting and tag construction
//! - [`metadata`]: Per-section passes and document rollup
//! - [`content`]: The processed document and entry points

pub mod content;
pub mod metadata;
pub mod split;
pub mod types;

pub use content::{Content, SectionProcessor, process};
pub use metadata::extract_metadata;
pub use split::{Divider, Marker, divider_markers, section_spans, split_sections};
pub use types::{TypeCounter, count_types, section_types};
