//! # ewik-core
//!
//! Core library for the ewik static wiki generator.
//!
//! This crate holds the page search index, wiki configuration, page
//! discovery and markdown conversion, and the metadata record shared with the
//! generated client script.

pub mod config;
pub mod frontmatter;
pub mod hits;
pub mod index;
pub mod markdown;
pub mod metadata;
pub mod page;

pub use config::{ConfigError, WikiConfig};
pub use hits::{page_href, page_title, search_hits, SearchHit, PAGES_ROOT};
pub use index::PageIndex;
pub use markdown::MarkdownRenderer;
pub use metadata::PageMetadata;
pub use page::{discover_pages, page_identifier, Page, PageError, PageSource, PAGES_DIR};
