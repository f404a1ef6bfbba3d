//! autogit: watch a directory tree and auto-commit every change.
//!
//! Wiring: a [`watcher::ChangeWatcher`] forwards file modification
//! paths into a bounded queue; a single [`dispatcher`] worker drains
//! the queue and runs the stage/commit/push sequence from the `vcs`
//! crate for each entry.

pub mod config;
pub mod dispatcher;
pub mod watcher;

pub use config::{WatchConfig, DEFAULT_QUEUE_CAPACITY};
pub use dispatcher::{spawn_worker, GitPublisher, Publisher};
pub use watcher::{ChangeWatcher, WatcherError};
