//! Flags shared by `new`, `completions` and `config`.
//!
//! Every field is `global = true`, so the flags parse on either side of a
//! subcommand: `create-kochanowski -v new demo` and
//! `create-kochanowski new demo -v` are equivalent.

use std::path::PathBuf;

use clap::Args;

/// Logging, colour, config-file and output-format switches.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level above the default of warnings; repeat for more.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the log level written to stderr:
    (none)  - warnings and errors
    -v      - each scaffold step
    -vv     - commands, paths and config sources
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain text only. `NO_COLOR=1` sets it; `NO_COLOR=0` or empty does not.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Print without ANSI colours"
    )]
    pub no_color: bool,

    /// TOML file read instead of the per-user one; it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,

    /// Copy of the log, without colour, appended to this file.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Also write logs to FILE"
    )]
    pub log_file: Option<PathBuf>,
}

/// Rendering of progress lines and the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when stdout is redirected.
    #[default]
    Auto,
    /// Coloured ✓/ℹ/⚠ lines.
    Human,
    /// The same lines without colour.
    Plain,
    /// A single JSON report on stdout; progress lines are suppressed.
    Json,
}
