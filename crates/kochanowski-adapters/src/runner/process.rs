//! Child-process runner using std::process.

use std::process::{Child, Command, ExitStatus, Stdio};

use kochanowski_core::{
    application::{CommandFailure, ports::CommandRunner},
    domain::CommandInvocation,
};
use tracing::{debug, instrument, warn};

/// Production command runner.
///
/// Children inherit stdin, stdout, and stderr so npm's own progress output
/// reaches the user unchanged. Nothing is captured.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Start `invocation` and return without waiting for it.
    #[instrument(skip_all, fields(command = %invocation))]
    pub fn spawn(&self, invocation: &CommandInvocation) -> Result<CommandHandle, CommandFailure> {
        let child = build_command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CommandFailure::Spawn {
                program: invocation.program().to_owned(),
                reason: e.to_string(),
            })?;

        debug!(pid = child.id(), cwd = %invocation.current_dir().display(), "Child started");
        Ok(CommandHandle {
            child,
            command: invocation.to_string(),
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<(), CommandFailure> {
        self.spawn(invocation)?.wait()
    }
}

/// A running child process.
#[derive(Debug)]
pub struct CommandHandle {
    child: Child,
    command: String,
}

impl CommandHandle {
    /// OS process id.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// The command line this handle is running.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Block until the child exits.
    pub fn wait(mut self) -> Result<(), CommandFailure> {
        let status = self.child.wait().map_err(|e| CommandFailure::Spawn {
            program: self.command.clone(),
            reason: format!("failed while waiting for the process: {e}"),
        })?;
        check_status(self.command, status)
    }

    /// Poll the child; `None` while it is still running.
    pub fn try_wait(&mut self) -> Option<Result<(), CommandFailure>> {
        match self.child.try_wait() {
            Ok(Some(status)) => Some(check_status(self.command.clone(), status)),
            Ok(None) => None,
            Err(e) => Some(Err(CommandFailure::Spawn {
                program: self.command.clone(),
                reason: format!("failed while polling the process: {e}"),
            })),
        }
    }
}

fn check_status(command: String, status: ExitStatus) -> Result<(), CommandFailure> {
    if status.success() {
        return Ok(());
    }
    warn!(%command, code = ?status.code(), "Command failed");
    Err(CommandFailure::Exit {
        command,
        code: status.code(),
    })
}

/// npm is a batch script on Windows, which `CreateProcess` will not run
/// directly; go through `cmd /C` there.
fn build_command(invocation: &CommandInvocation) -> Command {
    #[cfg(windows)]
    let mut command = {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(invocation.program());
        command
    };
    #[cfg(not(windows))]
    let mut command = Command::new(invocation.program());

    command
        .args(invocation.arguments())
        .current_dir(invocation.current_dir());
    command
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sh(script: &str, dir: &std::path::Path) -> CommandInvocation {
        CommandInvocation::new("sh", dir).args(["-c", script])
    }

    #[test]
    fn successful_exit_is_ok() {
        let temp = TempDir::new().unwrap();
        ProcessRunner::new().run(&sh("exit 0", temp.path())).unwrap();
    }

    #[test]
    fn non_zero_exit_reports_code() {
        let temp = TempDir::new().unwrap();
        let err = ProcessRunner::new()
            .run(&sh("exit 3", temp.path()))
            .unwrap_err();
        assert!(matches!(err, CommandFailure::Exit { code: Some(3), .. }));
    }

    #[test]
    fn missing_program_is_a_spawn_failure() {
        let temp = TempDir::new().unwrap();
        let inv = CommandInvocation::new("definitely-not-a-real-program-kpl", temp.path());
        let err = ProcessRunner::new().run(&inv).unwrap_err();
        assert!(matches!(err, CommandFailure::Spawn { .. }));
    }

    #[test]
    fn runs_in_the_given_directory() {
        let temp = TempDir::new().unwrap();
        ProcessRunner::new()
            .run(&sh("echo '{}' > package.json", temp.path()))
            .unwrap();
        assert!(temp.path().join("package.json").exists());
    }

    #[test]
    fn spawn_then_wait_reports_completion() {
        let temp = TempDir::new().unwrap();
        let handle = ProcessRunner::new()
            .spawn(&sh("exit 7", temp.path()))
            .unwrap();
        assert!(handle.id() > 0);
        assert_eq!(handle.command(), "sh -c exit 7");
        assert!(matches!(
            handle.wait(),
            Err(CommandFailure::Exit { code: Some(7), .. })
        ));
    }
}
