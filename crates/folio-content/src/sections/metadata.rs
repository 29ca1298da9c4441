//! Section metadata extraction.
//!
//! Each section (or the whole document, when it was not split) goes through
//! six passes, in order:
//!
//! 1. front-matter: merge every `yaml` payload in the section into `meta`
//! 2. title: plain text of the first heading
//! 3. intro: plain text of the first paragraph that is not empty and not a
//!    lone image
//! 4. image: rewritten URL of the first image
//! 5. content types: `meta.types`, see [`crate::sections::types`]
//! 6. fallback: a missing title or intro is copied from the other one
//!
//! Every pass runs over all sections before the next one starts. The document
//! summary is then rolled up from the sections.

use crate::mdast::{Node, UrlRewriter, kind, select, select_all, to_plain_string};
use crate::sections::content::Content;
use crate::sections::split::section_meta;
use crate::sections::types::section_types;

/// A metadata pass over one section.
type Pass = fn(&mut Node, &dyn UrlRewriter);

const PASSES: [Pass; 6] = [front_matter, title, intro, image, content_types, fallback];

fn front_matter(section: &mut Node, _: &dyn UrlRewriter) {
    let meta = section_meta(section);
    section.set_meta(meta);
}

fn title(section: &mut Node, _: &dyn UrlRewriter) {
    section.title = Some(
        select(kind::HEADING, section)
            .map(to_plain_string)
            .unwrap_or_default(),
    );
}

fn intro(section: &mut Node, _: &dyn UrlRewriter) {
    section.intro = Some(
        select_all(kind::PARAGRAPH, section)
            .into_iter()
            .find(|p| !is_trivial_paragraph(p))
            .map(to_plain_string)
            .unwrap_or_default(),
    );
}

/// A paragraph without children, or holding nothing but an image.
fn is_trivial_paragraph(paragraph: &Node) -> bool {
    match paragraph.children.as_slice() {
        [] => true,
        [only] => only.is(kind::IMAGE),
        _ => false,
    }
}

fn image(section: &mut Node, rewriter: &dyn UrlRewriter) {
    let url = select(kind::IMAGE, section)
        .and_then(|img| img.url.as_deref())
        .map(|url| rewriter.rewrite(url));
    if let Some(url) = url.filter(|url| !url.is_empty()) {
        section.image = Some(url);
    }
}

fn content_types(section: &mut Node, _: &dyn UrlRewriter) {
    let types = section_types(section);
    section.meta_mut().set_types(types);
}

fn fallback(section: &mut Node, _: &dyn UrlRewriter) {
    let title = section.section_title().to_string();
    let intro = section.section_intro().to_string();
    if !intro.is_empty() && title.is_empty() {
        section.title = Some(intro);
    } else if !title.is_empty() && intro.is_empty() {
        section.intro = Some(title);
    }
}

/// The nodes metadata is computed for: the `section` children of the root,
/// or the root itself when there are none.
pub fn sections(root: &Node) -> Vec<&Node> {
    let sections: Vec<&Node> = root
        .children
        .iter()
        .filter(|n| n.is(kind::SECTION))
        .collect();
    if sections.is_empty() {
        vec![root]
    } else {
        sections
    }
}

fn sections_mut(root: &mut Node) -> Vec<&mut Node> {
    if root.children.iter().any(|n| n.is(kind::SECTION)) {
        root.children
            .iter_mut()
            .filter(|n| n.is(kind::SECTION))
            .collect()
    } else {
        vec![root]
    }
}

/// Annotate every section of a split tree and roll up the document summary.
pub fn extract_metadata(mut mdast: Node, rewriter: &dyn UrlRewriter) -> Content {
    {
        let mut targets = sections_mut(&mut mdast);
        for pass in PASSES {
            for section in targets.iter_mut() {
                pass(section, rewriter);
            }
        }
        for section in &targets {
            log::trace!(
                "section {:?}: types={:?}",
                section.section_title(),
                section.types()
            );
        }
    }

    let summary = sections(&mdast);
    let first = summary.first().copied();
    let meta = first.and_then(|s| s.meta.clone()).unwrap_or_default();
    let intro = first.map(|s| s.section_intro().to_string()).unwrap_or_default();
    let title = summary
        .iter()
        .map(|s| s.section_title())
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string();
    let image = summary
        .iter()
        .filter_map(|s| s.image.as_deref())
        .find(|url| !url.is_empty())
        .map(str::to_string);

    log::debug!(
        "extracted metadata for {} section(s), title {:?}",
        summary.len(),
        title
    );

    Content {
        mdast,
        meta,
        title,
        intro,
        image,
    }
}

// ============================================================================
// Tests
// ============================================================================
