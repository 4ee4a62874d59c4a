//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Obtain and validate the project name
//! 2. Refuse to continue if the project directory exists
//! 3. Create the directory
//! 4. Run `npm init -y` and `npm install kochanowski` inside it
//! 5. Write `indeks.kpl`
//! 6. Register `scripts.start` in `package.json`
//!
//! Each step returns a `Result`; the first failure ends the run. Nothing is
//! rolled back, so a failure after step 3 leaves the directory behind.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, NamePrompt, NoProgress, Progress},
        services::{ManifestEditor, TemplateWriter},
    },
    domain::{
        CommandInvocation, CommandStep, MANIFEST_FILE_NAME, NamePolicy, ProjectName,
        SAMPLE_FILE_NAME, ScaffoldPlan,
    },
    error::ScaffoldResult,
};

/// Question shown by the interactive name prompt.
pub const PROJECT_NAME_QUESTION: &str = "What is the name of your new Kochanowski project?";

/// Knobs for the external commands and name checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Program used for both external steps.
    pub package_manager: String,
    /// Arguments that create a manifest without asking questions.
    pub init_args: Vec<String>,
    /// Arguments that precede the dependency name on install.
    pub install_args: Vec<String>,
    /// Package that provides the interpreter.
    pub dependency: String,
    /// Executable the start script invokes.
    pub interpreter: String,
    pub name_policy: NamePolicy,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            package_manager: "npm".into(),
            init_args: vec!["init".into(), "-y".into()],
            install_args: vec!["install".into(), "--silent".into()],
            dependency: "kochanowski".into(),
            interpreter: "kochanowski".into(),
            name_policy: NamePolicy::Lenient,
        }
    }
}

impl ScaffoldSettings {
    /// `<interpreter> indeks.kpl`
    pub fn start_script(&self) -> String {
        format!("{} {}", self.interpreter, SAMPLE_FILE_NAME)
    }
}

/// Something that happened during a scaffold, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    DirectoryCreated { path: PathBuf },
    CommandStarted { step: CommandStep, command: String },
    SampleWritten { path: PathBuf },
    ScriptRegistered { manifest: PathBuf, command: String },
}

/// Outcome of a successful scaffold (or the intent of a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project: String,
    pub path: PathBuf,
    pub manifest: PathBuf,
    pub sample_file: PathBuf,
    pub start_script: String,
    pub commands: Vec<String>,
}

impl From<&ScaffoldPlan> for ScaffoldReport {
    fn from(plan: &ScaffoldPlan) -> Self {
        Self {
            project: plan.project.to_string(),
            path: plan.root.clone(),
            manifest: plan.manifest.clone(),
            sample_file: plan.sample_file.clone(),
            start_script: plan.start_script.clone(),
            commands: plan
                .commands()
                .iter()
                .map(|(_, invocation)| invocation.to_string())
                .collect(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    settings: ScaffoldSettings,
    progress: Box<dyn Progress>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        settings: ScaffoldSettings,
    ) -> Self {
        Self {
            filesystem,
            runner,
            settings,
            progress: Box::new(NoProgress),
        }
    }

    /// Report each step to `progress`.
    pub fn with_progress(mut self, progress: Box<dyn Progress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn settings(&self) -> &ScaffoldSettings {
        &self.settings
    }

    /// Ask for a name, then scaffold under `parent`.
    pub fn run(&self, prompt: &dyn NamePrompt, parent: &Path) -> ScaffoldResult<ScaffoldReport> {
        let name = self.ask_name(prompt)?;
        self.scaffold(&name, parent)
    }

    /// Ask until the answer satisfies the configured name policy.
    pub fn ask_name(&self, prompt: &dyn NamePrompt) -> ScaffoldResult<ProjectName> {
        prompt.ask(PROJECT_NAME_QUESTION, self.settings.name_policy)
    }

    /// Compute what a scaffold of `name` under `parent` would do.
    ///
    /// Pure: nothing is read or written.
    pub fn plan(&self, name: &ProjectName, parent: &Path) -> ScaffoldResult<ScaffoldPlan> {
        let project = ProjectName::parse_with(name.as_str(), self.settings.name_policy)?;
        let root = nested_under(parent, project.as_str());

        let init = CommandInvocation::new(&self.settings.package_manager, &root)
            .args(self.settings.init_args.iter().cloned());
        let install = CommandInvocation::new(&self.settings.package_manager, &root)
            .args(self.settings.install_args.iter().cloned())
            .arg(&self.settings.dependency);

        Ok(ScaffoldPlan {
            sample_file: root.join(SAMPLE_FILE_NAME),
            manifest: root.join(MANIFEST_FILE_NAME),
            start_script: self.settings.start_script(),
            project,
            root,
            init,
            install,
        })
    }

    /// Fail with [`ApplicationError::ProjectExists`] if the plan's root is
    /// already on disk.
    pub fn ensure_vacant(&self, plan: &ScaffoldPlan) -> ScaffoldResult<()> {
        if self.filesystem.exists(&plan.root) {
            return Err(ApplicationError::ProjectExists {
                name: plan.project.to_string(),
                path: plan.root.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Scaffold a new project named `name` inside `parent`.
    #[instrument(
        skip_all,
        fields(project = %name, parent = %parent.display())
    )]
    pub fn scaffold(&self, name: &ProjectName, parent: &Path) -> ScaffoldResult<ScaffoldReport> {
        let plan = self.plan(name, parent)?;
        self.ensure_vacant(&plan)?;
        self.execute(&plan)?;

        info!(path = %plan.root.display(), "Scaffold completed successfully");
        Ok(ScaffoldReport::from(&plan))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn execute(&self, plan: &ScaffoldPlan) -> ScaffoldResult<()> {
        self.filesystem.create_dir(&plan.root)?;
        self.progress.on_event(&ScaffoldEvent::DirectoryCreated {
            path: plan.root.clone(),
        });

        for (step, invocation) in plan.commands() {
            self.run_step(step, invocation)?;
        }

        let sample = TemplateWriter::new(self.filesystem.as_ref()).write(&plan.root)?;
        self.progress
            .on_event(&ScaffoldEvent::SampleWritten { path: sample });

        ManifestEditor::new(self.filesystem.as_ref())
            .register_start_command(&plan.manifest, &plan.start_script)?;
        self.progress.on_event(&ScaffoldEvent::ScriptRegistered {
            manifest: plan.manifest.clone(),
            command: plan.start_script.clone(),
        });

        Ok(())
    }

    fn run_step(&self, step: CommandStep, invocation: &CommandInvocation) -> ScaffoldResult<()> {
        debug!(%step, command = %invocation, "Running external command");
        self.progress.on_event(&ScaffoldEvent::CommandStarted {
            step,
            command: invocation.to_string(),
        });

        self.runner
            .run(invocation)
            .map_err(|source| ApplicationError::CommandFailed { step, source }.into())
    }
}

/// `parent` with `name` appended component by component.
///
/// A root or drive prefix in `name` is dropped, so `/etc/x` becomes
/// `<parent>/etc/x` instead of replacing `parent` the way `Path::join` would.
fn nested_under(parent: &Path, name: &str) -> PathBuf {
    let mut root = parent.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => root.push(other),
        }
    }
    root
}
