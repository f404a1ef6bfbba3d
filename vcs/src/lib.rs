//! Git version control operations
//!
//! Publishes pending working-tree changes by invoking the `git`
//! executable as a subprocess: stage everything, commit with a fixed
//! message, push to the configured upstream.
//!
//! # Publishing changes
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), vcs::GitError> {
//! vcs::publish_changes(Path::new("/home/me/dotfiles"))?;
//! # Ok(())
//! # }
//! ```
//!
//! All failures carry a classification: configuration (no path),
//! environment (directory cannot be entered), missing tool, or a git
//! step that exited non-zero.

pub mod operations;
pub mod types;

pub use operations::{git_available, publish_changes, GitError, GitResult, COMMIT_MESSAGE};
pub use types::PublishStep;
