//! Page metadata embedded in the generated script.

use crate::index::PageIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The record the client script rebuilds its page index from.
///
/// Serializes as `{"pages": [...], "categoryToPages": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub pages: Vec<String>,
    pub category_to_pages: BTreeMap<String, Vec<String>>,
}

impl PageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page, in discovery order.
    pub fn push(&mut self, id: &str, category: Option<&str>) {
        self.pages.push(id.to_string());
        if let Some(category) = category {
            self.category_to_pages
                .entry(category.to_string())
                .or_default()
                .push(id.to_string());
        }
    }

    /// Rebuild the search index from `pages`, in order.
    pub fn index(&self) -> PageIndex {
        PageIndex::from_pages(&self.pages)
    }

    /// Compact JSON literal for embedding in the script.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
