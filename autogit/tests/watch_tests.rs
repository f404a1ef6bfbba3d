//! End-to-end tests wiring the watcher to the commit worker.
//!
//! Tests that need a real `git` binary skip themselves when it is not
//! available rather than failing.

use autogit::{spawn_worker, ChangeWatcher, GitPublisher, Publisher};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use vcs::GitResult;

/// Records every publish call.
struct RecordingPublisher {
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingPublisher {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, repo: &Path) -> GitResult<()> {
        self.calls.lock().unwrap().push(repo.to_path_buf());
        Ok(())
    }
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .stderr(Stdio::null())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed in {}",
        dir.display()
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Work tree with one pushed commit and a bare upstream next to it.
fn repo_with_upstream(root: &Path) -> (PathBuf, PathBuf) {
    let remote = root.join("remote.git");
    let work = root.join("work");
    fs::create_dir(&remote).unwrap();
    fs::create_dir(&work).unwrap();

    git(&remote, &["init", "--bare"]);
    git(&work, &["init"]);
    git(&work, &["config", "user.name", "autogit-test"]);
    git(&work, &["config", "user.email", "autogit@test.invalid"]);
    git(&work, &["remote", "add", "origin", remote.to_str().unwrap()]);

    fs::write(work.join("seed.txt"), "seed\n").unwrap();
    git(&work, &["add", "."]);
    git(&work, &["commit", "-m", "seed"]);
    git(&work, &["push", "-u", "origin", "HEAD"]);

    (work, remote)
}

#[tokio::test]
async fn file_write_reaches_the_publisher() {
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("a.txt");
    fs::write(&file, "first").unwrap();

    let publisher = Arc::new(RecordingPublisher::new());
    let (tx, rx) = mpsc::channel(16);
    let worker = spawn_worker(tmp.path().to_path_buf(), rx, Arc::clone(&publisher));
    let watcher = ChangeWatcher::start(tmp.path(), tx).unwrap();

    fs::write(&file, "second").unwrap();

    let mut waited = Duration::ZERO;
    while publisher.call_count() == 0 && waited < Duration::from_secs(10) {
        tokio::time::sleep(Duration::from_millis(100)).await;
        waited += Duration::from_millis(100);
    }

    watcher.stop();
    worker.await.unwrap();

    assert!(publisher.call_count() >= 1, "file write never dispatched");
}

#[tokio::test]
async fn directory_creation_does_not_publish() {
    let tmp = tempfile::TempDir::new().unwrap();

    let publisher = Arc::new(RecordingPublisher::new());
    let (tx, rx) = mpsc::channel(16);
    let worker = spawn_worker(tmp.path().to_path_buf(), rx, Arc::clone(&publisher));
    let watcher = ChangeWatcher::start(tmp.path(), tx).unwrap();

    fs::create_dir(tmp.path().join("sub")).unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;

    watcher.stop();
    worker.await.unwrap();

    assert_eq!(publisher.call_count(), 0);
}

#[tokio::test]
async fn modification_is_committed_and_pushed() {
    if !vcs::git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let tmp = tempfile::TempDir::new().unwrap();
    let (work, remote) = repo_with_upstream(tmp.path());
    let branch = git(&work, &["rev-parse", "--abbrev-ref", "HEAD"]);

    let (tx, rx) = mpsc::channel(16);
    let worker = spawn_worker(work.clone(), rx, Arc::new(GitPublisher));
    let watcher = ChangeWatcher::start(&work, tx).unwrap();

    fs::write(work.join("a.txt"), "hello\n").unwrap();

    let mut waited = Duration::ZERO;
    let pushed = loop {
        let count = git(&remote, &["rev-list", "--count", &branch]);
        if count == "2" {
            break true;
        }
        if waited >= Duration::from_secs(15) {
            break false;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        waited += Duration::from_millis(200);
    };

    watcher.stop();
    worker.await.unwrap();

    assert!(pushed, "change was never pushed to the upstream");
}

#[tokio::test]
async fn vanished_repository_does_not_kill_the_worker() {
    let tmp = tempfile::TempDir::new().unwrap();
    let gone = tmp.path().join("gone");

    // The repository path is invalid by the time events arrive; every
    // publish fails with an environment error and is absorbed.
    let (tx, rx) = mpsc::channel(16);
    let worker = spawn_worker(gone, rx, Arc::new(GitPublisher));

    tx.send(PathBuf::from("a.txt")).await.unwrap();
    tx.send(PathBuf::from("b.txt")).await.unwrap();
    drop(tx);

    // Worker exits cleanly (no panic) despite both publishes failing.
    worker.await.unwrap();
}
