mod golden_types;
mod markdown_documents;
mod properties;
mod scenarios;
