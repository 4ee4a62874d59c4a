//! Implementation of the `create-kochanowski new` command.
//!
//! Responsibility: resolve the name and parent directory, hand them to the
//! core scaffold service, and display results. No business logic lives here.

use std::path::PathBuf;
use std::time::Instant;

use indicatif::HumanDuration;
use tracing::{info, instrument};

use kochanowski_adapters::{LocalFilesystem, ProcessRunner};
use kochanowski_core::prelude::{
    NamePolicy, ProjectName, ScaffoldPlan, ScaffoldReport, ScaffoldService, ScaffoldSettings,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::ask_project_name,
};

/// Execute the `create-kochanowski new` command.
///
/// Dispatch sequence:
/// 1. Resolve settings (config file + `--strict-names`)
/// 2. Take the name from the command line, or ask for it
/// 3. Early-exit if `--dry-run`, after the same existence check a real run does
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let started = Instant::now();

    let parent = resolve_parent(args.dir.as_ref())?;
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
        settings_for(&args, &config),
    )
    .with_progress(Box::new(output.clone()));

    let name = match args.name.as_deref() {
        Some(raw) => ProjectName::parse_with(raw, service.settings().name_policy)?,
        None => ask_project_name(&service)?,
    };

    if args.dry_run {
        let plan = service.plan(&name, &parent)?;
        service.ensure_vacant(&plan)?;
        show_plan(&plan, &output)?;
        output.json(&ScaffoldReport::from(&plan))?;
        return Ok(());
    }

    info!(project = %name, parent = %parent.display(), "Scaffold started");
    let report = service.scaffold(&name, &parent)?;
    info!(project = %report.project, "Scaffold completed");

    output.success(&format!(
        "Project '{}' created in {}",
        report.project,
        HumanDuration(started.elapsed())
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.project))?;
    output.print("  npm start")?;
    output.json(&report)?;

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// `--dir` as given, or the current directory.
fn resolve_parent(dir: Option<&PathBuf>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .with_cli_context(|| "Failed to determine the current directory"),
    }
}

/// Configured settings, tightened by `--strict-names`.
fn settings_for(args: &NewArgs, config: &AppConfig) -> ScaffoldSettings {
    let mut settings = config.scaffold_settings();
    if args.strict_names {
        settings.name_policy = NamePolicy::Strict;
    }
    settings
}

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.project,
        plan.root.display(),
    ))?;
    for (step, invocation) in plan.commands() {
        out.print(&format!("  {:<20} {invocation}", step.to_string()))?;
    }
    out.print(&format!("  {:<20} {}", "write", plan.sample_file.display()))?;
    out.print(&format!(
        "  {:<20} \"start\": \"{}\" in {}",
        "register-script",
        plan.start_script,
        plan.manifest.display()
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn explicit_dir_is_used_verbatim() {
        let dir = PathBuf::from("relative/parent");
        assert_eq!(resolve_parent(Some(&dir)).unwrap(), dir);
    }

    #[test]
    fn missing_dir_falls_back_to_cwd() {
        assert_eq!(
            resolve_parent(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn strict_flag_overrides_lenient_config() {
        let args = NewArgs {
            strict_names: true,
            ..NewArgs::default()
        };
        let settings = settings_for(&args, &AppConfig::default());
        assert_eq!(settings.name_policy, NamePolicy::Strict);
    }

    #[test]
    fn strict_config_survives_without_flag() {
        let mut config = AppConfig::default();
        config.scaffold.strict_names = true;
        let settings = settings_for(&NewArgs::default(), &config);
        assert_eq!(settings.name_policy, NamePolicy::Strict);
    }

    #[test]
    fn configured_package_manager_reaches_the_plan() {
        let mut config = AppConfig::default();
        config.scaffold.package_manager = "pnpm".into();

        let service = ScaffoldService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(ProcessRunner::new()),
            settings_for(&NewArgs::default(), &config),
        );
        let name = ProjectName::parse("demo").unwrap();
        let plan = service.plan(&name, Path::new("/tmp")).unwrap();
        assert_eq!(plan.init.to_string(), "pnpm init -y");
        assert_eq!(plan.install.to_string(), "pnpm install --silent kochanowski");
    }
}
