//! The `ScaffoldRequest` aggregate and the `ProjectName` it is keyed by.
//!
//! A `ScaffoldRequest` is built exactly once per run from the collected
//! answers and never changes afterwards; all accessors borrow.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{DatabaseChoice, TemplateKind},
};

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A project name that is safe to use as a single directory component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Name used when the user submits an empty answer.
    pub const DEFAULT: &'static str = "my-app";

    /// npm refuses package names longer than this.
    pub const MAX_LEN: usize = 214;

    /// Validate a raw answer. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        let invalid = |reason| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.contains(['{', '}']) {
            return Err(invalid("name cannot contain braces"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }
        if name.len() > Self::MAX_LEN {
            return Err(invalid("name is longer than 214 characters"));
        }

        Ok(Self(name.to_string()))
    }

    /// Like [`parse`](Self::parse), but an empty answer selects [`Self::DEFAULT`].
    pub fn parse_or_default(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Ok(Self(Self::DEFAULT.to_string()));
        }
        Self::parse(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
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

// ── ScaffoldRequest ──────────────────────────────────────────────────────────

/// Everything the user chose for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    project_name: ProjectName,
    description: String,
    template_kind: TemplateKind,
    database: DatabaseChoice,
    auth_enabled: bool,
}

impl ScaffoldRequest {
    pub fn new(
        project_name: ProjectName,
        description: impl Into<String>,
        template_kind: TemplateKind,
        database: DatabaseChoice,
        auth_enabled: bool,
    ) -> Self {
        Self {
            project_name,
            description: description.into().trim().to_string(),
            template_kind,
            database,
            auth_enabled,
        }
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn template_kind(&self) -> TemplateKind {
        self.template_kind
    }

    pub const fn database(&self) -> DatabaseChoice {
        self.database
    }

    pub const fn auth_enabled(&self) -> bool {
        self.auth_enabled
    }

    /// Directory the project is generated into, relative to `base_dir`.
    pub fn project_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.project_name.as_str())
    }

    /// Template directory for this request under `templates_root`.
    pub fn template_path(&self, templates_root: &Path) -> PathBuf {
        templates_root.join(self.template_kind.dir_name())
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, db={}, auth={})",
            self.project_name,
            self.template_kind,
            self.database,
            if self.auth_enabled { "on" } else { "off" }
        )
    }
}
