//! Subprocess adapter using `std::process::Command`.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, instrument};

use kitgen_core::{
    application::{
        ApplicationError,
        ports::{CommandLine, CommandRunner},
    },
    error::KitResult,
};

/// Runs programs on the host, blocking until they exit.
///
/// Standard streams are inherited so package-manager and git output reaches
/// the user's terminal as it happens. Only the exit status is inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    silent: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the child's stdout (stderr is still shown).
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    fn configure(&self, mut cmd: Command, line: &CommandLine, cwd: &Path) -> Command {
        let stdout = if self.silent {
            Stdio::null()
        } else {
            Stdio::inherit()
        };
        cmd.args(&line.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit());
        cmd
    }

    fn status(&self, line: &CommandLine, cwd: &Path) -> io::Result<ExitStatus> {
        match self.configure(Command::new(&line.program), line, cwd).status() {
            // npm, yarn and friends are `.cmd` scripts on Windows, which only
            // cmd can start. Anything found as an executable, git included,
            // keeps its arguments out of cmd's quoting rules.
            Err(e) if cfg!(windows) && e.kind() == io::ErrorKind::NotFound => {
                self.configure(cmd_shim(line), line, cwd).status()
            }
            other => other,
        }
    }
}

fn cmd_shim(line: &CommandLine) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(&line.program);
    cmd
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %cwd.display()))]
    fn run(&self, command: &CommandLine, cwd: &Path) -> KitResult<()> {
        let status = self
            .status(command, cwd)
            .map_err(|e| ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Command exited");

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into())
        }
    }
}
