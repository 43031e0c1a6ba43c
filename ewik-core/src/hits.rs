//! Turning index matches into the links the search dropdown shows.

use crate::index::PageIndex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Directory (relative to the wiki root) that rendered pages live in.
pub const PAGES_ROOT: &str = "static/pages";

/// A single search result, ready to render as an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub href: String,
}

impl SearchHit {
    pub fn new(id: &str, pages_root: &str) -> Self {
        Self {
            id: id.to_string(),
            title: page_title(id),
            href: page_href(pages_root, id),
        }
    }

    /// Render as the `<a class="search-result">` element the dropdown uses.
    pub fn to_anchor(&self) -> String {
        format!(
            "<a class=\"search-result\" href=\"{}\">{}</a>",
            html_escape(&self.href),
            html_escape(&self.title)
        )
    }
}

/// Normalize raw search-box input the way the generated script does.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Human-readable title for an identifier: hyphens become spaces and each
/// word is capitalized.
///
/// ```
/// use ewik_core::page_title;
///
/// assert_eq!(page_title("getting-started"), "Getting Started");
/// assert_eq!(page_title("faq"), "Faq");
/// ```
pub fn page_title(id: &str) -> String {
    id.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

/// Link target of a rendered page.
pub fn page_href(pages_root: &str, id: &str) -> String {
    format!("{}/{}.html", pages_root.trim_end_matches('/'), id)
}

/// Run a raw search-box query against `index`.
///
/// Blank input yields no hits rather than every page.
pub fn search_hits(index: &PageIndex, raw: &str, pages_root: &str) -> Vec<SearchHit> {
    let query = normalize_query(raw);
    if query.is_empty() {
        return Vec::new();
    }
    index
        .search(&query)
        .iter()
        .map(|id| SearchHit::new(id, pages_root))
        .collect()
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
