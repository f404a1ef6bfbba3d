//! Filesystem change watcher.
//!
//! Observes a directory tree recursively with `notify` and forwards the
//! path of every file-level modification event into a bounded queue.
//! The notification callback never blocks: it enqueues with `try_send`
//! and returns, so a slow commit can never stall event delivery.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Errors that can occur in the file watcher.
#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("failed to create watcher: {0}")]
    Creation(#[from] notify::Error),

    #[error("failed to watch path {path}: {source}")]
    WatchPath {
        path: PathBuf,
        source: notify::Error,
    },
}

/// A recursive watch on a single directory tree.
///
/// Dropping (or [`stop`](ChangeWatcher::stop)-ping) the watcher drops
/// the queue sender held by its callback, which lets the consuming
/// worker drain and exit.
pub struct ChangeWatcher {
    watcher: RecommendedWatcher,
    root: PathBuf,
}

impl ChangeWatcher {
    /// Begin recursive observation of `root`.
    ///
    /// The caller is expected to have validated `root` already; errors
    /// here are watcher registration failures, not configuration ones.
    pub fn start(root: &Path, tx: mpsc::Sender<PathBuf>) -> Result<Self, WatcherError> {
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => forward_event(&event, &tx),
                Err(e) => warn!("watch error: {e}"),
            },
            Config::default(),
        )?;

        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(|source| WatcherError::WatchPath {
                path: root.to_path_buf(),
                source,
            })?;

        Ok(Self {
            watcher,
            root: root.to_path_buf(),
        })
    }

    /// Halt observation. Events already queued are still delivered to
    /// the worker before it exits.
    pub fn stop(mut self) {
        let _ = self.watcher.unwatch(&self.root);
    }
}

/// Forward the paths of a file-level modification event into the queue.
///
/// Directory-targeted events are filtered out and forward nothing, as
/// do non-modification kinds (creates, removes, access notifications).
/// A full queue drops the event with a warning; the next filesystem
/// change re-triggers the whole sequence anyway.
pub(crate) fn forward_event(event: &Event, tx: &mpsc::Sender<PathBuf>) {
    if !is_modification(&event.kind) {
        return;
    }

    for path in &event.paths {
        if path.is_dir() {
            continue;
        }

        info!("File modified: {}", path.display());
        if tx.try_send(path.clone()).is_err() {
            warn!(path = %path.display(), "commit queue full, dropping event");
        }
    }
}

/// Whether an event kind counts as a modification of existing content.
pub(crate) fn is_modification(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_))
}
