//! Page discovery and conversion.
//!
//! Pages are the top-level `*.md` files of the `_pages/` directory. A page's
//! identifier is its file name up to the first `.`, lower-cased.

use crate::frontmatter::{parse_frontmatter, Frontmatter};
use crate::hits::page_title;
use crate::markdown::MarkdownRenderer;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory (relative to the wiki root) holding markdown sources.
pub const PAGES_DIR: &str = "_pages";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pages directory not found: {0:?}")]
    MissingDir(PathBuf),
}

/// A markdown file that maps to a page identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    pub id: String,
    pub path: PathBuf,
}

/// A converted page.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    /// Rendered body wrapped in the `page-content` container.
    pub content_html: String,
}

/// Page identifier for a file name, or `None` when the file is not a
/// markdown page.
///
/// Everything after the first `.` is the extension, with inner dots
/// dropped, and it must be exactly `md`.
///
/// ```
/// use ewik_core::page_identifier;
///
/// assert_eq!(page_identifier("Getting-Started.md").as_deref(), Some("getting-started"));
/// assert_eq!(page_identifier("notes.txt"), None);
/// assert_eq!(page_identifier("archive.tar.md"), None);
/// ```
pub fn page_identifier(file_name: &str) -> Option<String> {
    let mut parts = file_name.split('.');
    let name = parts.next()?;
    let ext: String = parts.collect();
    if ext != "md" || name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

/// List the pages in `dir`, sorted by file name.
///
/// Files whose identifier collides (after lower-casing) with an earlier one
/// are skipped.
pub fn discover_pages(dir: &Path) -> Result<Vec<PageSource>, PageError> {
    if !dir.is_dir() {
        return Err(PageError::MissingDir(dir.to_path_buf()));
    }

    let mut seen = HashSet::new();
    let mut pages = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        // Follows symlinked pages.
        .filter(|e| e.path().is_file())
    {
        let file_name = entry.file_name().to_string_lossy();
        let Some(id) = page_identifier(&file_name) else {
            tracing::debug!("Skipping non-page file {:?}", entry.path());
            continue;
        };

        if !seen.insert(id.clone()) {
            tracing::warn!(
                "Duplicate page identifier '{}' from {:?}, keeping the first",
                id,
                entry.path()
            );
            continue;
        }

        pages.push(PageSource {
            id,
            path: entry.path().to_path_buf(),
        });
    }

    Ok(pages)
}

impl Page {
    /// Read and convert a page source.
    pub fn load(source: &PageSource, renderer: &MarkdownRenderer) -> Result<Self, PageError> {
        let content = fs::read_to_string(&source.path)?;
        Ok(Self::from_markdown(&source.id, &content, renderer))
    }

    /// Convert markdown content for page `id`.
    ///
    /// A leading `---` block that is not a YAML mapping (a thematic break,
    /// a setext heading) is kept as markdown and the page gets no title or
    /// category from it.
    pub fn from_markdown(id: &str, content: &str, renderer: &MarkdownRenderer) -> Self {
        let (frontmatter, body) = match parse_frontmatter(content) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!("Ignoring frontmatter of page '{}': {}", id, err);
                (Frontmatter::default(), content.to_string())
            }
        };

        let title = frontmatter
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| page_title(id));
        let category = frontmatter.category.filter(|c| !c.trim().is_empty());

        Self {
            id: id.to_string(),
            title,
            category,
            content_html: renderer.render_page(&body),
        }
    }

    /// Output file name of the rendered page.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}
