use std::path::PathBuf;

/// Default capacity of the pending-commit queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Startup configuration for the watch daemon.
///
/// The repository path is fixed for the process lifetime; there is no
/// reconfiguration and no support for multiple watched roots.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory tree to observe; also the git work tree to publish from.
    pub repo_path: PathBuf,
    /// Bound on commit requests waiting for the worker.
    pub queue_capacity: usize,
}

impl WatchConfig {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.repo_path.as_os_str().is_empty() {
            return Err("Repository path cannot be empty".to_string());
        }

        if !self.repo_path.is_dir() {
            return Err(format!(
                "The specified folder does not exist: {}",
                self.repo_path.display()
            ));
        }

        if self.queue_capacity == 0 {
            return Err("Queue capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}
