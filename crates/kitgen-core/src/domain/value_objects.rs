//! Domain value objects: TemplateKind, DatabaseChoice.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each enum
//! carries its fixed `ALL` ordering, which is also the order in which the
//! interactive menus number their options (1-based).

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// The kind of starter template to copy.
///
/// Each kind maps to a directory of the same name under the templates root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    BasicCrud,
    Dashboard,
    Plugin,
    Custom,
}

impl TemplateKind {
    /// Menu order. The first entry is the fallback for unusable input.
    pub const ALL: [Self; 4] = [Self::BasicCrud, Self::Dashboard, Self::Plugin, Self::Custom];

    pub const DEFAULT: Self = Self::BasicCrud;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicCrud => "basic-crud",
            Self::Dashboard => "dashboard",
            Self::Plugin => "plugin",
            Self::Custom => "custom",
        }
    }

    /// Name of the template directory under the templates root.
    pub const fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::BasicCrud => "Basic CRUD app (list, create, edit, delete)",
            Self::Dashboard => "Dashboard with charts and tables",
            Self::Plugin => "Plugin / extension starter",
            Self::Custom => "Custom (start from an empty project)",
        }
    }
}

impl Default for TemplateKind {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic-crud" | "basic_crud" | "crud" => Ok(Self::BasicCrud),
            "dashboard" => Ok(Self::Dashboard),
            "plugin" => Ok(Self::Plugin),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::UnknownOption {
                field: "template kind",
                value: other.to_string(),
            }),
        }
    }
}

// ── DatabaseChoice ───────────────────────────────────────────────────────────

/// Where the generated app keeps its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseChoice {
    Supabase,
    Local,
    None,
}

impl DatabaseChoice {
    pub const ALL: [Self; 3] = [Self::Supabase, Self::Local, Self::None];

    pub const DEFAULT: Self = Self::Supabase;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supabase => "supabase",
            Self::Local => "local",
            Self::None => "none",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Supabase => "Supabase (hosted Postgres + auth)",
            Self::Local => "Local database",
            Self::None => "No database",
        }
    }
}

impl Default for DatabaseChoice {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DatabaseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "supabase" => Ok(Self::Supabase),
            "local" => Ok(Self::Local),
            "none" => Ok(Self::None),
            other => Err(DomainError::UnknownOption {
                field: "database",
                value: other.to_string(),
            }),
        }
    }
}
