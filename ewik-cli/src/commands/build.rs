//! Build command implementation.

use crate::generator::{BuildReport, SiteGenerator};
use anyhow::Result;
use std::path::Path;

/// Render the whole wiki once.
pub fn build_wiki(root: &Path) -> Result<BuildReport> {
    let generator = SiteGenerator::new(root)?;
    tracing::info!("Building wiki: {}", generator.config().title);

    let report = generator.render_all()?;

    tracing::info!("✓ Built {} pages", report.rendered);
    tracing::info!("✓ Output written to {:?}", root);
    Ok(report)
}
