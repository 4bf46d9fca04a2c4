//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The project directory is already there.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading an answer from the user failed.
    #[error("Could not read answer to '{question}': {reason}")]
    PromptFailed { question: String, reason: String },

    /// An external program could not be started at all.
    #[error("Could not run '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external program ran and reported failure.
    #[error("'{command}' exited with {}", describe_code(*.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Test double ran out of scripted data, or a lock was poisoned.
    #[error("Adapter state unavailable: {0}")]
    AdapterState(String),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run kitgen from an interactive terminal".into(),
                "Or pipe the answers through stdin, one per line".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", command),
            ],
            Self::CommandFailed { .. } => {
                vec!["Check the command output above for details".into()]
            }
            Self::AdapterState(_) => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::PromptFailed { .. }
            | Self::CommandSpawn { .. }
            | Self::CommandFailed { .. }
            | Self::AdapterState(_) => ErrorCategory::Internal,
        }
    }
}
