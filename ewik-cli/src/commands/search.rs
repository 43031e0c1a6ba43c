//! Search command implementation: query the page index from the terminal.

use anyhow::{Context, Result};
use ewik_core::{discover_pages, search_hits, PageIndex, SearchHit, PAGES_DIR, PAGES_ROOT};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub limit: usize,
    pub json: bool,
}

/// Build the page index from `root/_pages` and print the hits for `query`.
pub fn search_wiki(root: &Path, query: &str, opts: SearchOptions) -> Result<()> {
    let pages_dir = root.join(PAGES_DIR);
    let sources = discover_pages(&pages_dir)
        .with_context(|| format!("Failed to read pages from {:?}", pages_dir))?;

    let index = PageIndex::from_pages(sources.iter().map(|s| s.id.as_str()));
    tracing::debug!("Indexed {} pages", index.len());
    tracing::trace!("Page index:\n{}", index);

    let hits = perform_search(&index, query, opts.limit);

    if opts.json {
        let json = serde_json::to_string_pretty(&hits).context("Failed to serialize results")?;
        println!("{}", json);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No results found for '{}'", query);
        return Ok(());
    }

    for hit in &hits {
        println!("{}\t{}", hit.title, hit.href);
    }
    Ok(())
}

pub fn perform_search(index: &PageIndex, query: &str, limit: usize) -> Vec<SearchHit> {
    let mut hits = search_hits(index, query, PAGES_ROOT);
    hits.truncate(limit);
    hits
}
