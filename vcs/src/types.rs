use std::fmt;

/// The three sub-operations of a publish sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// `git add .` — stage every pending change in the tree.
    Stage,
    /// `git commit` with the fixed auto-commit message.
    Commit,
    /// `git push` — publish the current branch to its upstream.
    Push,
}

impl PublishStep {
    /// The git subcommand this step invokes.
    pub fn subcommand(&self) -> &'static str {
        match self {
            PublishStep::Stage => "add",
            PublishStep::Commit => "commit",
            PublishStep::Push => "push",
        }
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}
