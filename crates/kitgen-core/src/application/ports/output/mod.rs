//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kitgen-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::domain::ScaffoldWarning;
use crate::error::KitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kitgen_adapters::filesystem::LocalFilesystem` (production)
/// - `kitgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create the new directory `path`, plus any missing parents.
    ///
    /// Fails with `ApplicationError::DestinationExists` if `path` itself is
    /// already taken, even when it was created after an earlier `exists`.
    fn create_dir(&self, path: &Path) -> KitResult<()>;

    /// Recursively copy the contents of `from` into the existing directory
    /// `to`, byte-for-byte. Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> KitResult<usize>;

    /// Read a UTF-8 file. `Ok(None)` when the file does not exist; a file
    /// that is not valid UTF-8 is an error.
    fn read_to_string(&self, path: &Path) -> KitResult<Option<String>>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> KitResult<()>;
}

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `kitgen_adapters::process::SystemCommandRunner` (production)
/// - `kitgen_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and block until it exits.
    ///
    /// Returns `ApplicationError::CommandSpawn` if it could not be started
    /// and `ApplicationError::CommandFailed` on a non-zero exit.
    fn run(&self, command: &CommandLine, cwd: &Path) -> KitResult<()>;
}

/// Port for asking the user questions, one at a time.
///
/// Implemented by:
/// - `kitgen_adapters::prompt::LinePrompter` (any reader/writer pair)
/// - `kitgen_adapters::prompt::ScriptedPrompter` (testing)
/// - the CLI's terminal prompter
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Show informational lines (e.g. a numbered menu) before a question.
    fn note(&self, lines: &[String]) -> KitResult<()>;

    /// Ask a question and return the raw answer without its line ending.
    fn ask(&self, question: &str) -> KitResult<String>;
}

/// The steps of a scaffold run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    CopyTemplate,
    Substitute,
    Install,
    InitRepository,
}

impl ScaffoldStep {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CopyTemplate => "Copying template",
            Self::Substitute => "Filling in project details",
            Self::Install => "Installing dependencies",
            Self::InitRepository => "Initialising git repository",
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Port for progress feedback while a run is underway.
///
/// All methods default to doing nothing.
pub trait ScaffoldObserver: Send + Sync {
    fn step_started(&self, _step: ScaffoldStep) {}

    fn step_finished(&self, _step: ScaffoldStep) {}

    /// A soft failure happened; the run continues.
    fn warned(&self, _warning: &ScaffoldWarning) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}
