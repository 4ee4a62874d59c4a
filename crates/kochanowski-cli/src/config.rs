//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ScaffoldSettings`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KOCHANOWSKI_<SECTION>__<KEY>`, e.g.
//!    `KOCHANOWSKI_SCAFFOLD__PACKAGE_MANAGER=pnpm`.  List values are
//!    space-separated.
//! 3. Config file: `--config FILE`, or the per-user default (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use kochanowski_core::prelude::{NamePolicy, ScaffoldSettings};

/// Prefix of every environment variable read as configuration.
pub const ENV_PREFIX: &str = "KOCHANOWSKI";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How projects are scaffolded.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub package_manager: String,
    pub init_args: Vec<String>,
    pub install_args: Vec<String>,
    pub dependency: String,
    pub interpreter: String,
    pub strict_names: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        let defaults = ScaffoldSettings::default();
        Self {
            package_manager: defaults.package_manager,
            init_args: defaults.init_args,
            install_args: defaults.install_args,
            dependency: defaults.dependency,
            interpreter: defaults.interpreter,
            strict_names: defaults.name_policy == NamePolicy::Strict,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("scaffold.init_args")
                    .with_list_parse_key("scaffold.install_args"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-kochanowski.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "kochanowski", "create-kochanowski")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-kochanowski.toml"))
    }

    /// The settings the scaffold service runs with.
    pub fn scaffold_settings(&self) -> ScaffoldSettings {
        let scaffold = &self.scaffold;
        ScaffoldSettings {
            package_manager: scaffold.package_manager.clone(),
            init_args: scaffold.init_args.clone(),
            install_args: scaffold.install_args.clone(),
            dependency: scaffold.dependency.clone(),
            interpreter: scaffold.interpreter.clone(),
            name_policy: if scaffold.strict_names {
                NamePolicy::Strict
            } else {
                NamePolicy::Lenient
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    fn missing_file() -> PathBuf {
        PathBuf::from("/nonexistent/create-kochanowski/config.toml")
    }

    #[test]
    fn defaults_match_the_npm_workflow() {
        let settings = AppConfig::default().scaffold_settings();
        assert_eq!(settings, ScaffoldSettings::default());
        assert_eq!(settings.start_script(), "kochanowski indeks.kpl");
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg = AppConfig::load_from(&missing_file(), false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(AppConfig::load_from(&missing_file(), true, env(&[])).is_err());
    }

    #[test]
    fn file_overrides_defaults_field_by_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[scaffold]\npackage_manager = \"pnpm\"\nstrict_names = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, env(&[])).unwrap();
        assert_eq!(cfg.scaffold.package_manager, "pnpm");
        assert!(cfg.scaffold.strict_names);
        assert_eq!(cfg.scaffold.dependency, "kochanowski");
        assert_eq!(cfg.scaffold_settings().name_policy, NamePolicy::Strict);
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[scaffold]\npackage_manager = \"pnpm\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[
                ("KOCHANOWSKI_SCAFFOLD__PACKAGE_MANAGER", "yarn"),
                ("KOCHANOWSKI_SCAFFOLD__INSTALL_ARGS", "add --silent"),
                ("KOCHANOWSKI_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.scaffold.package_manager, "yarn");
        assert_eq!(cfg.scaffold.install_args, vec!["add", "--silent"]);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[scaffold\n").unwrap();
        assert!(AppConfig::load_from(&path, true, env(&[])).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
