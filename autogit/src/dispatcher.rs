//! Commit dispatcher.
//!
//! A single-consumer worker that receives queued file paths and runs
//! the stage/commit/push sequence for each. Having exactly one consumer
//! serializes commit sequences: two events that fire close together are
//! published one after the other, never concurrently against the same
//! work tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};
use vcs::GitResult;

/// Performs the publish sequence for a repository.
///
/// The seam between event plumbing and git; tests substitute a
/// recording implementation.
pub trait Publisher: Send + Sync + 'static {
    fn publish(&self, repo: &Path) -> GitResult<()>;
}

/// Production publisher backed by the `git` subprocess layer.
pub struct GitPublisher;

impl Publisher for GitPublisher {
    fn publish(&self, repo: &Path) -> GitResult<()> {
        vcs::publish_changes(repo)
    }
}

/// Spawn the commit worker.
///
/// The worker runs until the channel closes (every sender dropped),
/// finishing any in-flight publish first — joining the returned handle
/// gives graceful-shutdown semantics. Publish failures are logged and
/// absorbed; they never terminate the worker. Each publish runs on the
/// blocking pool so the subprocess wait cannot stall the runtime.
pub fn spawn_worker<P: Publisher>(
    repo: PathBuf,
    mut rx: mpsc::Receiver<PathBuf>,
    publisher: Arc<P>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(path) = rx.recv().await {
            debug!(path = %path.display(), "dispatching commit");

            let repo = repo.clone();
            let publisher = Arc::clone(&publisher);
            match tokio::task::spawn_blocking(move || publisher.publish(&repo)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Error during git operation: {e}"),
                Err(e) => error!("commit task panicked: {e}"),
            }
        }

        debug!("commit worker exiting");
    })
}
