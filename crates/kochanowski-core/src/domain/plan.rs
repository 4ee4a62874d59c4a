//! What a scaffold run will do, computed before anything touches disk.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::project_name::ProjectName;

/// The two external commands a scaffold runs, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandStep {
    /// Write a default `package.json` (`npm init -y`).
    InitManifest,
    /// Add the interpreter package (`npm install kochanowski`).
    InstallDependency,
}

impl CommandStep {
    /// Headline printed when this step fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::InitManifest => "Failed to initialize npm project",
            Self::InstallDependency => "Failed to install Kochanowski package",
        }
    }
}

impl fmt::Display for CommandStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitManifest => write!(f, "init-manifest"),
            Self::InstallDependency => write!(f, "install-dependency"),
        }
    }
}

/// One external program run: program, arguments, and the directory it runs
/// in. Standard streams are always inherited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    program: String,
    args: Vec<String>,
    current_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The full, ordered description of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub project: ProjectName,
    pub root: PathBuf,
    pub init: CommandInvocation,
    pub install: CommandInvocation,
    pub sample_file: PathBuf,
    pub manifest: PathBuf,
    pub start_script: String,
}

impl ScaffoldPlan {
    /// Commands in execution order, paired with their step.
    pub fn commands(&self) -> [(CommandStep, &CommandInvocation); 2] {
        [
            (CommandStep::InitManifest, &self.init),
            (CommandStep::InstallDependency, &self.install),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_displays_as_a_shell_line() {
        let inv = CommandInvocation::new("npm", "/tmp/demo")
            .arg("install")
            .args(["--silent", "kochanowski"]);
        assert_eq!(inv.to_string(), "npm install --silent kochanowski");
        assert_eq!(inv.current_dir(), Path::new("/tmp/demo"));
    }

    #[test]
    fn failure_messages_name_the_step() {
        assert_eq!(
            CommandStep::InitManifest.failure_message(),
            "Failed to initialize npm project"
        );
        assert_eq!(
            CommandStep::InstallDependency.failure_message(),
            "Failed to install Kochanowski package"
        );
    }
}
