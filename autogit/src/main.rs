use autogit::{ChangeWatcher, GitPublisher, WatchConfig, DEFAULT_QUEUE_CAPACITY};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "autogit")]
#[command(about = "Watch a directory and auto-commit changes to its git repository")]
struct Cli {
    /// Directory to watch (must be a git work tree with an upstream)
    #[arg(env = "AUTOGIT_REPO")]
    repo: PathBuf,

    /// Maximum number of commit requests waiting for the worker
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = WatchConfig::new(cli.repo).with_queue_capacity(cli.queue_capacity);

    if let Err(message) = config.validate() {
        error!("{message}");
        std::process::exit(1);
    }

    if !vcs::git_available() {
        // Not fatal: every publish attempt will report GitNotFound, but
        // the operator should hear about it once up front.
        error!("git executable not found on PATH; commits will fail until it is installed");
    }

    let (tx, rx) = mpsc::channel(config.queue_capacity);
    let worker = autogit::spawn_worker(config.repo_path.clone(), rx, Arc::new(GitPublisher));
    let watcher = ChangeWatcher::start(&config.repo_path, tx)?;

    info!("Monitoring changes in folder: {}", config.repo_path.display());

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, shutting down");

    // Stopping the watcher drops the queue sender; the worker drains
    // what is already queued, finishes any in-flight commit, and exits.
    watcher.stop();
    worker.await?;

    Ok(())
}
