//! Repository Initializer - `git init`, `git add -A`, `git commit`.
//!
//! The first failing step ends the sequence and is reported as a warning.
//! The generated project is never touched on failure.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandLine, CommandRunner},
    domain::ScaffoldWarning,
};

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from kitgen";

/// Creates the one-commit history of a generated project.
#[derive(Debug, Clone)]
pub struct RepositoryInitializer {
    commit_message: String,
}

impl Default for RepositoryInitializer {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_MESSAGE)
    }
}

impl RepositoryInitializer {
    pub fn new(commit_message: impl Into<String>) -> Self {
        Self {
            commit_message: commit_message.into(),
        }
    }

    /// The three commands, in the order they run.
    pub fn commands(&self) -> [CommandLine; 3] {
        [
            CommandLine::new("git", ["init"]),
            CommandLine::new("git", ["add", "-A"]),
            CommandLine::new("git", ["commit", "-m", self.commit_message.as_str()]),
        ]
    }

    #[instrument(skip_all, fields(dir = %project_dir.display()))]
    pub fn initialize(
        &self,
        runner: &dyn CommandRunner,
        project_dir: &Path,
    ) -> Result<(), ScaffoldWarning> {
        for command in self.commands() {
            if let Err(e) = runner.run(&command, project_dir) {
                warn!(%command, error = %e, "Git step failed");
                return Err(ScaffoldWarning::GitFailed {
                    step: command.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        info!("Repository initialised with one commit");
        Ok(())
    }
}
