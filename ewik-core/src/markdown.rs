//! Markdown to HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Markdown processor with GitHub-flavored extensions and typographic
/// punctuation. Raw HTML in the source is passed through untouched.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);

        Self { options }
    }

    /// Convert markdown to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Convert a page body and wrap it in the `page-content` container.
    pub fn render_page(&self, markdown: &str) -> String {
        let html = self.render(markdown);
        format!("<div class=\"page-content\">\n{html}</div>")
            .trim()
            .to_string()
    }
}
