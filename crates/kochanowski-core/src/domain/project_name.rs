//! Project name value object.
//!
//! The name doubles as the directory name and, through `npm init -y`, as the
//! package name. The default policy only refuses blank input; the strict
//! policy additionally refuses names the filesystem would misread.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Device names Windows reserves in every directory, with or without an
/// extension.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// How much checking a project name gets beyond being non-blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Any non-blank name is used as-is.
    #[default]
    Lenient,
    /// Also reject separators, dot-names, control characters, and reserved
    /// device names.
    Strict,
}

/// A validated, trimmed project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse with the default (lenient) policy.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::parse_with(raw, NamePolicy::Lenient)
    }

    /// Parse under an explicit policy.
    pub fn parse_with(raw: &str, policy: NamePolicy) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        if policy == NamePolicy::Strict {
            check_strict(name)?;
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn check_strict(name: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::UnsafeProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    if name == "." || name == ".." {
        return reject("name cannot refer to the current or parent directory");
    }
    if name.starts_with('.') {
        return reject("name cannot start with '.'");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("name cannot contain path separators");
    }
    if name.chars().any(char::is_control) {
        return reject("name cannot contain control characters");
    }

    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
    {
        return reject("name is reserved by Windows");
    }

    Ok(())
}
