//! Rebuild the wiki whenever its config or pages change.

use super::build::build_wiki;
use anyhow::{Context, Result};
use ewik_core::config::CONFIG_FILE;
use ewik_core::{page_identifier, PAGES_DIR};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use tokio::sync::mpsc;

pub async fn watch_wiki(root: &Path) -> Result<()> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve {:?}", root))?;
    let root = root.as_path();
    build_wiki(root).context("Initial build failed")?;

    let pages_dir = root.join(PAGES_DIR);
    println!("Watching {:?} for changes (Ctrl+C to stop)...", root);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = tx.send(res);
        },
        notify::Config::default(),
    )
    .context("Failed to initialize file watcher")?;

    // The root itself receives the generated output, so only the config file
    // is of interest there.
    watcher
        .watch(root, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {:?}", root))?;
    watcher
        .watch(&pages_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {:?}", pages_dir))?;

    while let Some(event) = rx.recv().await {
        match event {
            Ok(ev) if ev.paths.iter().any(|p| is_wiki_source(root, p)) => {
                // Debounce a bit by draining pending events
                while rx.try_recv().is_ok() {}
                tracing::info!("Change detected, rebuilding wiki...");

                let res = tokio::task::spawn_blocking({
                    let root = root.to_path_buf();
                    move || build_wiki(&root)
                })
                .await;

                match res {
                    Ok(Ok(report)) => {
                        tracing::info!("Rebuild complete ({} pages)", report.rendered)
                    }
                    Ok(Err(e)) => tracing::error!("Rebuild failed: {:?}", e),
                    Err(e) => tracing::error!("Rebuild task panicked: {}", e),
                }
            }
            Ok(ev) => tracing::trace!("Ignoring event for {:?}", ev.paths),
            Err(err) => tracing::warn!("Watcher error: {}", err),
        }
    }

    Ok(())
}

/// Whether a change to `path` should trigger a rebuild: the config file or a
/// markdown page directly inside `_pages/`.
fn is_wiki_source(root: &Path, path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some(parent) = path.parent() else {
        return false;
    };

    if name == CONFIG_FILE {
        return same_dir(parent, root);
    }
    page_identifier(name).is_some() && same_dir(parent, &root.join(PAGES_DIR))
}

// Watch events may carry canonicalized paths.
fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.ends_with(b),
    }
}
