//! Askama template definitions.

use askama::Template;
use ewik_core::{PageMetadata, WikiConfig};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to serialize page metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Shared page shell: head, top navigation and a verbatim body.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub title: &'a str,
    pub css_path: &'a str,
    pub index_path: &'a str,
    /// Pre-rendered HTML, inserted unescaped
    pub body: &'a str,
}

/// Landing page body with the search bar
#[derive(Template)]
#[template(path = "index_body.html")]
pub struct IndexBodyTemplate<'a> {
    pub title: &'a str,
    pub script_path: &'a str,
}

/// Stylesheet with the configured theme colors
#[derive(Template)]
#[template(path = "styles.css", escape = "none")]
pub struct StylesTemplate<'a> {
    pub config: &'a WikiConfig,
}

/// Client bundle: page index, embedded metadata and the search-bar controller
#[derive(Template)]
#[template(path = "bundle.js", escape = "none")]
pub struct ScriptTemplate<'a> {
    pub metadata_json: String,
    pub pages_root: &'a str,
}

impl<'a> ScriptTemplate<'a> {
    pub fn new(metadata: &PageMetadata, pages_root: &'a str) -> Result<Self, RenderError> {
        Ok(Self {
            metadata_json: metadata.to_json()?,
            pages_root,
        })
    }
}

/// Render the landing page: the search body inside the shared layout.
pub fn render_index(
    config: &WikiConfig,
    css_path: &str,
    script_path: &str,
) -> Result<String, RenderError> {
    let body = IndexBodyTemplate {
        title: &config.title,
        script_path,
    }
    .render()?;

    let html = LayoutTemplate {
        title: &config.title,
        css_path,
        index_path: "index.html",
        body: &body,
    }
    .render()?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_escapes_title_but_not_body() {
        let html = LayoutTemplate {
            title: "Q&A <b>",
            css_path: "../../styles.css",
            index_path: "../../index.html",
            body: "<div class=\"page-content\"><p>hi</p></div>",
        }
        .render()
        .unwrap();

        assert!(html.contains("<title>Q&#38;A &#60;b&#62;</title>"));
        assert!(!html.contains("Q&A"));
        assert!(html.contains("href=\"../../styles.css\""));
        assert!(html.contains("<a href=\"../../index.html\">Home</a>"));
        assert!(html.contains("<div class=\"page-content\"><p>hi</p></div>"));
    }

    #[test]
    fn test_index_has_search_bar() {
        let config = WikiConfig {
            title: "Garden".into(),
            ..WikiConfig::default()
        };
        let html = render_index(&config, "styles.css", "bundle.js").unwrap();
        assert!(html.contains("<h1>Garden</h1>"));
        assert!(html.contains("id=\"search-bar\""));
        assert!(html.contains("onkeyup=\"updateSearchResults();\""));
        assert!(html.contains("<script src=\"bundle.js\"></script>"));
        assert!(html.contains("<a href=\"index.html\">Home</a>"));
    }

    #[test]
    fn test_styles_bind_theme_colors() {
        let config = WikiConfig {
            primary: "#123456".into(),
            ..WikiConfig::default()
        };
        let css = StylesTemplate { config: &config }.render().unwrap();
        assert!(css.starts_with(":root {\n  --surface: #242424;"));
        assert!(css.contains("--primary: #123456;"));
        assert!(css.contains("--onsurface: #FFFFFF;"));
    }

    #[test]
    fn test_script_embeds_metadata() {
        let mut meta = PageMetadata::new();
        meta.push("rust-tips", Some("code"));
        let js = ScriptTemplate::new(&meta, "static/pages")
            .unwrap()
            .render()
            .unwrap();

        assert!(js.contains(
            r#"const metaData = {"pages":["rust-tips"],"categoryToPages":{"code":["rust-tips"]}};"#
        ));
        assert!(js.contains("const pagesRoot = \"static/pages\";"));
        assert!(js.contains("class RadixTree"));
    }

    #[test]
    fn test_script_search_matches_page_index() {
        // The client tree must walk and order results like PageIndex::search;
        // the expected orders live in ewik_core's index tests.
        let js = ScriptTemplate::new(&PageMetadata::new(), "static/pages")
            .unwrap()
            .render()
            .unwrap();

        assert!(js.contains("if (this.isWord && path.includes(query)) {"));
        assert!(js.contains("for (const child of this.children.values()) {"));
        assert!(js.contains("return matches.reverse();"));
        assert!(js.contains("pageTrie.search(searchText)"));
        assert!(!js.contains("{#"));
    }
}
