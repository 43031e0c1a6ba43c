//! Frontmatter parsing from markdown pages.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Page metadata from the leading YAML block. Keys are conventionally
/// capitalized (`Title:`), lower-case spellings are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    #[serde(default, rename = "Title", alias = "title")]
    pub title: Option<String>,

    #[serde(default, rename = "Category", alias = "category")]
    pub category: Option<String>,
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n(.*))?$")
            .expect("frontmatter regex is valid")
    })
}

/// Split `content` into frontmatter and markdown body.
///
/// Content without a leading `---` block yields default frontmatter and the
/// full content as body.
///
/// # Example
///
/// ```
/// use ewik_core::frontmatter::parse_frontmatter;
///
/// let content = "---\nTitle: Tea Brewing\nCategory: Kitchen\n---\n# Steep\n";
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title.as_deref(), Some("Tea Brewing"));
/// assert_eq!(fm.category.as_deref(), Some("Kitchen"));
/// assert_eq!(body, "# Steep\n");
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok((frontmatter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_category() {
        let content = r#"---
Title: Sourdough Starter
Category: Baking
---

# Feeding

Twice a day."#;

        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Sourdough Starter"));
        assert_eq!(fm.category.as_deref(), Some("Baking"));
        assert!(body.contains("# Feeding"));
        assert!(!body.contains("Title:"));
    }

    #[test]
    fn test_lowercase_keys() {
        let content = "---\ntitle: Lower\ncategory: misc\n---\nBody";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Lower"));
        assert_eq!(fm.category.as_deref(), Some("misc"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "---\nTitle: Tagged\nTags: [a, b]\n---\nBody";
        let (fm, _) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Tagged"));
        assert_eq!(fm.category, None);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just Content\n\nNo frontmatter here.";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm, Frontmatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = parse_frontmatter("---\n\n---\nText").unwrap();
        assert_eq!(fm, Frontmatter::default());
        assert_eq!(body, "Text");
    }

    #[test]
    fn test_frontmatter_only() {
        let (fm, body) = parse_frontmatter("---\nTitle: Stub\n---").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Stub"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_invalid_yaml() {
        let content = "---\nTitle: [unclosed\n---\n\nContent.";
        assert!(parse_frontmatter(content).is_err());
    }
}
