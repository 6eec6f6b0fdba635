// ABOUTME: Theme watch module for the ds-slides application
// ABOUTME: Monitors local theme assets and pushes page reloads to connected viewers

use log::{debug, error, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;
use parking_lot::RwLock;

use crate::deck::SlideDeck;
use crate::errors::{Result, SlidesError};
use crate::page::{self, PageOptions};
use crate::sync::SnapshotBroadcaster;

/// Watch the local theme assets referenced by the page and, on every
/// relevant change, re-render the page and ask connected viewers to
/// reload. Blocks processing file system events.
pub fn watch_theme_assets(
    deck: &SlideDeck,
    page: Arc<RwLock<String>>,
    page_options: &PageOptions,
    broadcaster: Arc<SnapshotBroadcaster>,
    debounce_ms: u64,
) -> Result<()> {
    // Remote assets are never watched
    let local_paths: Vec<PathBuf> = page_options
        .css
        .iter()
        .chain(page_options.js.iter())
        .filter(|asset| !asset.is_remote)
        .map(|asset| PathBuf::from(&asset.path))
        .collect();

    if local_paths.is_empty() {
        return Err(SlidesError::WatchError(
            "No local theme assets to watch".to_string(),
        ));
    }

    // Create a channel to receive file system events
    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(debounce_ms), None, tx)
        .map_err(|e| SlidesError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    // Editors commonly replace files on save, so watch each asset's
    // containing directory rather than the file itself.
    let mut watch_dirs = HashSet::new();
    for path in &local_paths {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watch_dirs.insert(dir);
    }

    for dir in &watch_dirs {
        debouncer
            .watcher()
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                SlidesError::WatchError(format!(
                    "Failed to start watching directory {:?}: {}",
                    dir, e
                ))
            })?;
    }

    // Pre-resolve asset paths for event comparison
    let abs_assets: Vec<PathBuf> = local_paths
        .iter()
        .map(|path| fs::canonicalize(path).unwrap_or_else(|_| path.clone()))
        .collect();

    info!("Watching {} theme asset(s) for changes", local_paths.len());
    println!("Watching theme assets for changes (Press Ctrl+C to stop)");

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events.iter().any(|event| {
                    event.paths.iter().any(|path| {
                        let is_relevant = is_relevant_path(path, &local_paths, &abs_assets);
                        if is_relevant {
                            debug!("Detected relevant change in {:?}", path);
                        }
                        is_relevant
                    })
                });

                if relevant {
                    match page::render_page(deck, page_options) {
                        Ok(html) => {
                            *page.write() = html;
                            broadcaster.broadcast_reload();
                            info!("Theme change detected, viewers reloaded");
                        }
                        Err(e) => error!("Failed to re-render page: {}", e),
                    }
                }
            }
            Err(e) => error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Checks if a changed path is one of the watched theme assets
fn is_relevant_path(path: &Path, assets: &[PathBuf], abs_assets: &[PathBuf]) -> bool {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if assets.iter().any(|asset| asset == path) || abs_assets.iter().any(|asset| *asset == abs) {
        return true;
    }

    // Fall back to extension matching inside the watched directories
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "css" || ext == "js"
        }
        None => false,
    }
}
