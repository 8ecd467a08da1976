//! # Declaration Locator
//!
//! Generators are usually triggered from a comment sitting right above a type declaration. The
//! [`DeclarationLocator`] trait is the seam to whatever loads and parses the program: given the
//! build description, a file hint and an optional line hint it returns the enclosing file and
//! the nearest named type declared at or after that line.
//!
//! [`DeclarationIndex`] is an in-memory implementation over pre-extracted declarations. It is
//! what tests and simple generators use; real front-ends implement the trait over their own
//! syntax trees.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LocateError {
    #[error("Failed to determine type: no build named '{build}'")]
    UnknownBuild { build: String },

    #[error("Failed to determine type: no file matches {hint:?}")]
    FileNotFound { hint: PathBuf },

    #[error("Failed to determine type: {hint:?} matches multiple files: {candidates:?}")]
    Ambiguous {
        hint: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("Failed to determine type: no declaration at or after line {line} in {file:?}")]
    NotFound { file: PathBuf, line: u32 },

    #[error(
        "Failed to determine type: closest declaration after line {line} in {file:?} is not a named type: {closest}"
    )]
    NotNamedType {
        file: PathBuf,
        line: u32,
        closest: String,
    },

    #[error("Failed to determine {what}: environment variable {var} is not set")]
    MissingEnv {
        what: &'static str,
        var: &'static str,
    },

    #[error("Failed to determine source line from {value:?}")]
    InvalidLine {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl LocateError {
    /// True for every failure that means "there is no such declaration", as opposed to an
    /// ambiguous position or a broken trigger environment.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LocateError::UnknownBuild { .. }
                | LocateError::FileNotFound { .. }
                | LocateError::NotFound { .. }
                | LocateError::NotNamedType { .. }
        )
    }
}

pub trait DeclarationLocator {
    /// What identifies the program to load, e.g. a package name.
    type Build: ?Sized;
    /// Handle to the file enclosing the declaration.
    type File;
    /// Handle to the declared type.
    type Type;

    /// Finds the nearest named type declared at or after `line_hint` in the file matching
    /// `file_hint`. Without a line hint the first declaration in the file is used.
    fn locate(
        &self,
        build: &Self::Build,
        file_hint: &Path,
        line_hint: Option<u32>,
    ) -> Result<(Self::File, Self::Type), LocateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    NamedType,
    Function,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub line: u32,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind, line: u32) -> Self {
        Declaration {
            name: name.into(),
            kind,
            line,
        }
    }

    pub fn named_type(name: impl Into<String>, line: u32) -> Self {
        Self::new(name, DeclarationKind::NamedType, line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

/// Declarations of every file of every build, grouped by build name.
#[derive(Debug, Clone, Default)]
pub struct DeclarationIndex {
    builds: BTreeMap<String, Vec<SourceFile>>,
}

impl DeclarationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(
        &mut self,
        build: impl Into<String>,
        path: impl Into<PathBuf>,
        declarations: Vec<Declaration>,
    ) -> &mut Self {
        self.builds.entry(build.into()).or_default().push(SourceFile {
            path: path.into(),
            declarations,
        });
        self
    }

    /// A file matches when its path equals the hint or ends with the hint's components.
    fn matching_file(&self, build: &str, file_hint: &Path) -> Result<&SourceFile, LocateError> {
        let files = self
            .builds
            .get(build)
            .ok_or_else(|| LocateError::UnknownBuild {
                build: build.to_string(),
            })?;

        let mut matches = files
            .iter()
            .filter(|file| file.path == file_hint || file.path.ends_with(file_hint));

        let first = matches.next().ok_or_else(|| LocateError::FileNotFound {
            hint: file_hint.to_path_buf(),
        })?;

        let rest = matches.map(|file| file.path.clone()).collect::<Vec<_>>();
        if !rest.is_empty() {
            let mut candidates = vec![first.path.clone()];
            candidates.extend(rest);
            return Err(LocateError::Ambiguous {
                hint: file_hint.to_path_buf(),
                candidates,
            });
        }

        Ok(first)
    }
}

impl DeclarationLocator for DeclarationIndex {
    type Build = str;
    type File = PathBuf;
    type Type = Declaration;

    fn locate(
        &self,
        build: &str,
        file_hint: &Path,
        line_hint: Option<u32>,
    ) -> Result<(PathBuf, Declaration), LocateError> {
        let file = self.matching_file(build, file_hint)?;
        let line = line_hint.unwrap_or(0);

        let closest_line = file
            .declarations
            .iter()
            .map(|decl| decl.line)
            .filter(|decl_line| *decl_line >= line)
            .min()
            .ok_or_else(|| LocateError::NotFound {
                file: file.path.clone(),
                line,
            })?;

        let mut closest = file
            .declarations
            .iter()
            .filter(|decl| decl.line == closest_line);

        match closest
            .clone()
            .find(|decl| decl.kind == DeclarationKind::NamedType)
        {
            Some(decl) => {
                debug!(
                    "Located type {} at {:?}:{}",
                    decl.name, file.path, decl.line
                );
                Ok((file.path.clone(), decl.clone()))
            }
            None => Err(LocateError::NotNamedType {
                file: file.path.clone(),
                line,
                closest: closest
                    .next()
                    .map(|decl| decl.name.clone())
                    .unwrap_or_default(),
            }),
        }
    }
}
