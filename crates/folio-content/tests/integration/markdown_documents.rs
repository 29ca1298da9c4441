//! Processing parsed markdown documents.

use folio_content::{SectionProcessor, kind};
use folio_core::FolioConfig;

#[test]
fn test_article_with_sections() {
    let md = "\
---
title: Front Title
tags:
  - docs
---

# Welcome

![banner](banner.png)

This is the introduction.

---

## Features

- fast
- small

***

Closing words with a [link](https://example.com).
";
    let content = SectionProcessor::default().process_markdown(md);
    let sections = content.sections();
    assert_eq!(sections.len(), 3);

    assert_eq!(sections[0].section_title(), "Welcome");
    assert_eq!(sections[0].section_intro(), "This is the introduction.");
    assert_eq!(sections[0].image.as_deref(), Some("banner.png"));

    assert_eq!(sections[1].section_title(), "Features");
    assert_eq!(sections[1].section_intro(), "fast");

    assert_eq!(
        sections[2].section_title(),
        "Closing words with a link."
    );

    assert_eq!(content.title, "Welcome");
    assert_eq!(content.intro, "This is the introduction.");
    assert_eq!(content.image.as_deref(), Some("banner.png"));
    assert_eq!(
        content.meta.get("title").and_then(|v| v.as_str()),
        Some("Front Title")
    );
}

#[test]
fn test_single_section_document_stays_flat() {
    let md = "# Only\n\nOne section here.";
    let content = SectionProcessor::default().process_markdown(md);
    assert!(content.mdast.is(kind::ROOT));
    assert!(!content.mdast.children.iter().any(|n| n.is(kind::SECTION)));
    assert_eq!(content.title, "Only");
    assert_eq!(content.intro, "One section here.");
}

#[test]
fn test_config_file_drives_image_urls() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("folio.toml");
    std::fs::write(
        &path,
        "[images]\nbase_url = \"https://static.example.net/site\"\n",
    )
    .unwrap();

    let config = FolioConfig::load(Some(path.to_str().unwrap())).unwrap();
    let content = SectionProcessor::from_config(&config).process_markdown("![x](./x.png)");
    assert_eq!(
        content.image.as_deref(),
        Some("https://static.example.net/site/x.png")
    );
}
