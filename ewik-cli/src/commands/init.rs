//! Init command implementation.

use crate::generator::SiteGenerator;
use anyhow::Result;
use std::path::Path;

/// Initialize a wiki: config file, directory layout and a first render.
pub fn init_wiki(root: &Path) -> Result<()> {
    let generator = SiteGenerator::new(root)?;
    generator.initialize()?;

    println!("✓ ewik initialized in {:?}", root);
    println!("  - Edit _config.json to change the title and theme colors");
    println!("  - Write pages as markdown files in _pages/");
    Ok(())
}
