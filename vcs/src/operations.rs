//! Git operations layer
//!
//! Runs the stage/commit/push sequence against a repository by spawning
//! the `git` executable. The exit status and stderr of each subprocess
//! are the only contract with the tool; nothing is parsed beyond that.

use crate::types::PublishStep;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

/// The fixed commit message used for every auto-commit.
pub const COMMIT_MESSAGE: &str = "Auto-commit: Changes detected";

/// Errors that can occur while publishing changes
#[derive(Error, Debug)]
pub enum GitError {
    /// The repository path was empty or never configured
    #[error("no repository path is set")]
    MissingRepoPath,

    /// The repository directory cannot be entered (missing, not a
    /// directory, or permission denied)
    #[error("cannot enter repository directory '{path}': {source}")]
    RepoDirInaccessible { path: String, source: io::Error },

    /// The git executable is not available in the invocation environment
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// git ran but exited non-zero
    #[error("git {step} failed ({status}): {stderr}")]
    StepFailed {
        step: PublishStep,
        status: ExitStatus,
        stderr: String,
    },

    /// Any other I/O failure talking to the subprocess
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type GitResult<T> = Result<T, GitError>;

/// Check whether a usable `git` executable is on the PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Stage, commit, and push every pending change under `repo`.
///
/// The three steps run strictly in order and the sequence aborts at the
/// first failure — a failed stage never attempts a commit, a failed
/// commit never attempts a push. The working directory is set per
/// spawned process; the caller's own working directory is never touched.
///
/// Calling this with nothing to commit is not an error of the caller:
/// the commit step exits non-zero and the result is a
/// [`GitError::StepFailed`] at [`PublishStep::Commit`].
pub fn publish_changes(repo: &Path) -> GitResult<()> {
    if repo.as_os_str().is_empty() {
        return Err(GitError::MissingRepoPath);
    }

    let metadata = std::fs::metadata(repo).map_err(|source| GitError::RepoDirInaccessible {
        path: repo.display().to_string(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(GitError::RepoDirInaccessible {
            path: repo.display().to_string(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    run_step(repo, PublishStep::Stage)?;
    run_step(repo, PublishStep::Commit)?;
    run_step(repo, PublishStep::Push)?;

    info!(repo = %repo.display(), "Changes committed and pushed successfully.");
    Ok(())
}

fn run_step(repo: &Path, step: PublishStep) -> GitResult<()> {
    let mut command = Command::new("git");
    command.current_dir(repo);
    match step {
        PublishStep::Stage => command.args(["add", "."]),
        PublishStep::Commit => command.args(["commit", "-m", COMMIT_MESSAGE]),
        PublishStep::Push => command.arg("push"),
    };

    debug!(%step, repo = %repo.display(), "running git step");

    let output = command.output().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            GitError::GitNotFound
        } else {
            GitError::Io(e)
        }
    })?;

    if !output.status.success() {
        return Err(GitError::StepFailed {
            step,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
