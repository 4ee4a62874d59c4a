//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "create-kochanowski";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    write_completions(args.shell, &mut std::io::stdout())?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> std::io::Result<()> {
    let mut cmd = Cli::command();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, out),
    };

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_the_binary() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("create-kochanowski"));
        assert!(script.contains("--strict-names"));
    }

    #[test]
    fn every_shell_generates_something() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let mut buf = Vec::new();
            write_completions(shell, &mut buf).unwrap();
            assert!(!buf.is_empty(), "{shell:?}");
        }
    }
}
