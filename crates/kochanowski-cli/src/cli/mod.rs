//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// `new` is the default subcommand: `create-kochanowski demo` and
/// `create-kochanowski new demo` are the same invocation.
#[derive(Debug, Parser)]
#[command(
    name     = "create-kochanowski",
    bin_name = "create-kochanowski",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new Kochanowski language project",
    long_about = "create-kochanowski makes a project directory, initialises an npm \
                  manifest, installs the Kochanowski interpreter, writes a sample \
                  program (indeks.kpl), and registers an `npm start` script that runs it.",
    after_help = "EXAMPLES:\n\
        \x20 create-kochanowski                 # asks for the project name\n\
        \x20 create-kochanowski fraszki\n\
        \x20 create-kochanowski fraszki --dir ~/code --strict-names\n\
        \x20 create-kochanowski new config      # a project named like a subcommand\n\
        \x20 create-kochanowski completions bash > ~/.local/share/bash-completion/completions/create-kochanowski"
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the implicit `new` subcommand.
    #[command(flatten)]
    pub new: NewArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, with a bare invocation resolved to `new`.
    ///
    /// Project arguments given before an explicit subcommand are a usage
    /// error rather than being silently dropped.
    pub fn into_command(self) -> Result<(GlobalArgs, Commands), clap::Error> {
        match self.command {
            None => Ok((self.global, Commands::New(self.new))),
            Some(command) if self.new.is_unset() => Ok((self.global, command)),
            Some(command) => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "project arguments cannot be given before the '{}' subcommand",
                    command.name()
                ),
            )),
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Kochanowski project.
    #[command(
        visible_alias = "n",
        about = "Create a new project (default)",
        after_help = "EXAMPLES:\n\
            \x20 create-kochanowski new fraszki\n\
            \x20 create-kochanowski new fraszki --dir /tmp --dry-run"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 create-kochanowski completions bash > ~/.local/share/bash-completion/completions/create-kochanowski\n\
            \x20 create-kochanowski completions zsh  > ~/.zfunc/_create-kochanowski\n\
            \x20 create-kochanowski completions fish > ~/.config/fish/completions/create-kochanowski.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 create-kochanowski config show\n\
            \x20 create-kochanowski config path\n\
            \x20 create-kochanowski config init --force"
    )]
    Config(ConfigCommands),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::New(_) => "new",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `create-kochanowski new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name.  Asked for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted for when omitted)")]
    pub name: Option<String>,

    /// Directory the project is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Reject names that would escape the parent directory or are not
    /// portable across platforms.
    #[arg(long = "strict-names", help = "Reject unsafe or non-portable names")]
    pub strict_names: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl NewArgs {
    fn is_unset(&self) -> bool {
        self.name.is_none() && self.dir.is_none() && !self.strict_names && !self.dry_run
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `create-kochanowski completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `create-kochanowski config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (defaults, file, and environment merged).
    Show,
    /// Print the path of the default configuration file.
    Path,
    /// Write a configuration file containing the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_is_new_without_name() {
        let (_, command) = Cli::parse_from(["create-kochanowski"]).into_command().unwrap();
        match command {
            Commands::New(args) => {
                assert!(args.name.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn positional_name_without_subcommand() {
        let (_, command) =
            Cli::parse_from(["create-kochanowski", "fraszki", "--dry-run"])
                .into_command()
                .unwrap();
        match command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("fraszki"));
                assert!(args.dry_run);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn explicit_new_subcommand() {
        let (_, command) = Cli::parse_from([
            "create-kochanowski",
            "new",
            "treny",
            "--dir",
            "/tmp",
            "--strict-names",
        ])
        .into_command()
        .unwrap();
        match command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("treny"));
                assert_eq!(args.dir, Some(PathBuf::from("/tmp")));
                assert!(args.strict_names);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn subcommand_names_win_over_project_names() {
        let (_, command) = Cli::parse_from(["create-kochanowski", "config", "path"])
            .into_command()
            .unwrap();
        assert!(matches!(command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["create-kochanowski", "new", "x", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn global_flags_before_subcommand() {
        let (global, command) = Cli::parse_from([
            "create-kochanowski",
            "--config",
            "/tmp/k.toml",
            "-v",
            "config",
            "path",
        ])
        .into_command()
        .unwrap();
        assert_eq!(global.config, Some(PathBuf::from("/tmp/k.toml")));
        assert_eq!(global.verbose, 1);
        assert!(matches!(command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn global_flags_before_new_and_bare_name() {
        let (global, command) =
            Cli::parse_from(["create-kochanowski", "-v", "--output-format", "json", "new", "demo"])
                .into_command()
                .unwrap();
        assert_eq!(global.verbose, 1);
        assert!(matches!(command, Commands::New(ref args) if args.name.as_deref() == Some("demo")));

        let (global, command) =
            Cli::parse_from(["create-kochanowski", "--config", "/tmp/k.toml", "demo"])
                .into_command()
                .unwrap();
        assert!(global.config.is_some());
        assert!(matches!(command, Commands::New(ref args) if args.name.as_deref() == Some("demo")));
    }

    #[test]
    fn project_arguments_before_subcommand_are_rejected() {
        let err = Cli::try_parse_from(["create-kochanowski", "demo", "config", "path"])
            .and_then(Cli::into_command)
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-kochanowski", "--quiet", "--verbose", "x"]);
        assert!(result.is_err());
    }
}
