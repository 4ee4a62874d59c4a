//! Command runner that records instead of executing.

use std::sync::{Arc, Mutex};

use kochanowski_core::{
    application::{CommandFailure, ports::CommandRunner},
    domain::CommandInvocation,
};

type Hook = Arc<dyn Fn(&CommandInvocation) -> Result<(), CommandFailure> + Send + Sync>;

/// Test double for [`CommandRunner`].
///
/// Every invocation is recorded. By default each one succeeds; a hook can
/// simulate side effects (e.g. `npm init` writing `package.json`) and a
/// failure rule can make a command exit non-zero.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<CommandInvocation>>>,
    fail_on: Option<(String, i32)>,
    hook: Option<Hook>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose first argument is `first_arg`, with exit
    /// `code`. The hook does not run for failing invocations.
    pub fn failing_on(mut self, first_arg: impl Into<String>, code: i32) -> Self {
        self.fail_on = Some((first_arg.into(), code));
        self
    }

    /// Run `hook` for every non-failing invocation.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandInvocation) -> Result<(), CommandFailure> + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Everything run so far, in order.
    pub fn calls(&self) -> Vec<CommandInvocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// [`Self::calls`] rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<(), CommandFailure> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(invocation.clone());
        }

        if let Some((first_arg, code)) = &self.fail_on {
            if invocation.arguments().first() == Some(first_arg) {
                return Err(CommandFailure::Exit {
                    command: invocation.to_string(),
                    code: Some(*code),
                });
            }
        }

        match &self.hook {
            Some(hook) => hook(invocation),
            None => Ok(()),
        }
    }
}
