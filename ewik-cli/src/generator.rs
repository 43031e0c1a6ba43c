//! Static site generation: scaffolding and render passes.

use anyhow::{Context, Result};
use askama::Template;
use ewik_core::{
    discover_pages, MarkdownRenderer, Page, PageMetadata, WikiConfig, PAGES_DIR, PAGES_ROOT,
};
use ewik_render::{render_index, LayoutTemplate, ScriptTemplate, StylesTemplate};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const INDEX_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "bundle.js";
pub const STATIC_DIR: &str = "static";

// Rendered pages live two levels below the root (static/pages/).
const PAGE_CSS_PATH: &str = "../../styles.css";
const PAGE_INDEX_PATH: &str = "../../index.html";

/// Outcome of a full render pass.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub rendered: usize,
    pub skipped: usize,
    /// Stale `static/pages/*.html` files deleted.
    pub removed: usize,
    pub metadata: PageMetadata,
}

/// Generates the static wiki rooted at `root`.
pub struct SiteGenerator {
    root: PathBuf,
    config: WikiConfig,
    markdown: MarkdownRenderer,
}

impl SiteGenerator {
    /// Create a generator, loading `_config.json` from `root` if present.
    pub fn new(root: &Path) -> Result<Self> {
        let config = WikiConfig::load(root)
            .with_context(|| format!("Failed to load configuration from {:?}", root))?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_config(root: &Path, config: WikiConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            markdown: MarkdownRenderer::new(),
        }
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    pub fn output_pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_ROOT)
    }

    /// Create the directory layout and config file, then render everything.
    pub fn initialize(&self) -> Result<BuildReport> {
        create_dir(&self.root)?;
        self.write_config()?;

        create_dir(&self.pages_dir())?;
        create_dir(&self.root.join(STATIC_DIR))?;
        create_dir(&self.output_pages_dir())?;

        self.render_all()
    }

    /// Write `_config.json` unless one already exists.
    fn write_config(&self) -> Result<()> {
        let path = WikiConfig::path(&self.root);
        if path.exists() {
            tracing::info!("{:?} already exists, leaving it untouched", path);
            return Ok(());
        }
        self.config
            .write(&self.root)
            .with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!("Created {:?}", path);
        Ok(())
    }

    /// Render the landing page, every page, the stylesheet and the script.
    pub fn render_all(&self) -> Result<BuildReport> {
        self.render_index()?;
        let report = self.render_pages()?;
        self.render_css()?;
        self.render_js(&report.metadata)?;

        tracing::info!(
            "Rendered {} pages ({} skipped, {} stale removed)",
            report.rendered,
            report.skipped,
            report.removed
        );
        Ok(report)
    }

    pub fn render_index(&self) -> Result<()> {
        let html = render_index(&self.config, STYLES_FILE, SCRIPT_FILE)
            .context("Failed to render index template")?;
        self.write_output(&self.root.join(INDEX_FILE), &html)
    }

    /// Convert every markdown page and collect the metadata the script
    /// embeds. Pages that fail to load are logged and skipped.
    pub fn render_pages(&self) -> Result<BuildReport> {
        let sources = discover_pages(&self.pages_dir())
            .with_context(|| format!("Failed to read pages from {:?}", self.pages_dir()))?;
        tracing::info!("Found {} pages", sources.len());

        let output_dir = self.output_pages_dir();
        create_dir(&output_dir)?;

        let mut report = BuildReport::default();
        for source in &sources {
            let page = match Page::load(source, &self.markdown) {
                Ok(page) => page,
                Err(err) => {
                    tracing::warn!("Skipping {:?}: {}", source.path, err);
                    report.skipped += 1;
                    continue;
                }
            };

            let html = LayoutTemplate {
                title: &page.title,
                css_path: PAGE_CSS_PATH,
                index_path: PAGE_INDEX_PATH,
                body: &page.content_html,
            }
            .render()
            .with_context(|| format!("Failed to render page '{}'", page.id))?;

            self.write_output(&output_dir.join(page.file_name()), &html)?;
            tracing::debug!("Rendered: {}", page.id);

            report.metadata.push(&page.id, page.category.as_deref());
            report.rendered += 1;
        }

        report.removed = remove_stale_pages(&output_dir, &report.metadata.pages)?;
        Ok(report)
    }

    pub fn render_css(&self) -> Result<()> {
        let css = StylesTemplate {
            config: &self.config,
        }
        .render()
        .context("Failed to render stylesheet")?;
        self.write_output(&self.root.join(STYLES_FILE), &css)
    }

    pub fn render_js(&self, metadata: &PageMetadata) -> Result<()> {
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!("Page index:\n{}", metadata.index());
        }
        let js = ScriptTemplate::new(metadata, PAGES_ROOT)
            .and_then(|template| Ok(template.render()?))
            .context("Failed to render script bundle")?;
        self.write_output(&self.root.join(SCRIPT_FILE), &js)
    }

    fn write_output(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {:?}", path))
}

/// Delete rendered pages in `output_dir` whose identifier is not in `pages`.
fn remove_stale_pages(output_dir: &Path, pages: &[String]) -> Result<usize> {
    let live: HashSet<&str> = pages.iter().map(String::as_str).collect();
    let mut removed = 0;

    for entry in WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if live.contains(id) {
            continue;
        }

        fs::remove_file(path).with_context(|| format!("Failed to remove {:?}", path))?;
        tracing::info!("Removed stale page {:?}", path);
        removed += 1;
    }

    Ok(removed)
}
