//! Resolves where a generator was triggered from.
//!
//! Generators run by a build tool learn their position from the environment: the file that
//! contains the trigger comment, the package (build description) it belongs to and, optionally,
//! the line of the comment.

use std::path::PathBuf;

use tracing::debug;

use crate::locator::{DeclarationLocator, LocateError};

pub const ENV_FILE: &str = "GOFILE";
pub const ENV_PACKAGE: &str = "GOPACKAGE";
pub const ENV_LINE: &str = "GOLINE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTrigger {
    pub file: PathBuf,
    pub package: String,
    pub line: Option<u32>,
}

impl GenerationTrigger {
    pub fn from_env() -> Result<Self, LocateError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GenerationTrigger::from_env`] with a custom variable source. An empty line
    /// variable means no line hint.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LocateError> {
        let file = lookup(ENV_FILE).ok_or(LocateError::MissingEnv {
            what: "input file",
            var: ENV_FILE,
        })?;
        let package = lookup(ENV_PACKAGE).ok_or(LocateError::MissingEnv {
            what: "package name",
            var: ENV_PACKAGE,
        })?;

        let line = match lookup(ENV_LINE) {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|source| LocateError::InvalidLine { value, source })?,
            ),
            _ => None,
        };

        let trigger = GenerationTrigger {
            file: PathBuf::from(file),
            package,
            line,
        };
        debug!("Resolved generation trigger {:?}", trigger);
        Ok(trigger)
    }

    /// Finds the type declaration this trigger points at.
    pub fn locate<L>(&self, locator: &L) -> Result<(L::File, L::Type), LocateError>
    where
        L: DeclarationLocator<Build = str>,
    {
        locator.locate(&self.package, &self.file, self.line)
    }
}
