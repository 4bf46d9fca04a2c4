//! Recording command runner for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use kitgen_core::{
    application::{
        ApplicationError,
        ports::{CommandLine, CommandRunner},
    },
    error::KitResult,
};

/// Records every invocation instead of running it.
///
/// Programs registered with [`fail`](Self::fail) behave as if they were not
/// installed; everything else succeeds. Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    failing: HashSet<String>,
    calls: Arc<Mutex<Vec<(CommandLine, PathBuf)>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail.
    pub fn fail(mut self, program: impl Into<String>) -> Self {
        self.failing.insert(program.into());
        self
    }

    /// Everything run so far, in order.
    pub fn calls(&self) -> Vec<(CommandLine, PathBuf)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The rendered command lines run so far, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(cmd, _)| cmd.to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> KitResult<()> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::AdapterState("call log poisoned".into()))?
            .push((command.clone(), cwd.to_path_buf()));

        if self.failing.contains(&command.program) {
            return Err(ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: "program not found".into(),
            }
            .into());
        }
        Ok(())
    }
}
