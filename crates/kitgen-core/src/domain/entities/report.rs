//! Outcome of a scaffold run: what was produced and which soft failures
//! happened along the way.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{
    entities::request::ScaffoldRequest,
    value_objects::{DatabaseChoice, TemplateKind},
};

/// A soft failure. The run continued, but the user has something to fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldWarning {
    /// No template directory exists for the chosen kind.
    TemplateMissing { kind: TemplateKind, path: PathBuf },
    /// `package.json` exists but could not be rewritten.
    ManifestNotRewritten { path: PathBuf, reason: String },
    /// `README.md` exists but could not be read as text.
    ReadmeNotRendered { path: PathBuf, reason: String },
    /// Both package managers failed.
    InstallFailed { primary: String, fallback: String },
    /// One of the git steps failed; later steps were not attempted.
    GitFailed { step: String, reason: String },
}

impl ScaffoldWarning {
    /// What the user can do about it.
    pub fn remedy(&self) -> String {
        match self {
            Self::TemplateMissing { path, .. } => format!(
                "Add a template at {} or pick another project type",
                path.display()
            ),
            Self::ManifestNotRewritten { .. } => {
                "Set \"name\" and \"description\" in package.json by hand".into()
            }
            Self::ReadmeNotRendered { .. } => {
                "Fill in the project name and description in README.md by hand".into()
            }
            Self::InstallFailed { primary, .. } => {
                format!("Install dependencies manually: {primary} install")
            }
            Self::GitFailed { .. } => format!(
                "Initialise the repository manually: {}",
                manual_git_commands().join(" && ")
            ),
        }
    }
}

impl fmt::Display for ScaffoldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateMissing { kind, path } => write!(
                f,
                "Template '{}' not found at {}; created an empty project",
                kind,
                path.display()
            ),
            Self::ManifestNotRewritten { path, reason }
            | Self::ReadmeNotRendered { path, reason } => {
                write!(f, "Could not update {}: {}", path.display(), reason)
            }
            Self::InstallFailed { primary, fallback } => write!(
                f,
                "Dependency installation failed with both {primary} and {fallback}"
            ),
            Self::GitFailed { step, reason } => {
                write!(f, "Git initialisation failed at '{step}': {reason}")
            }
        }
    }
}

fn manual_git_commands() -> [&'static str; 3] {
    ["git init", "git add -A", "git commit -m \"Initial commit\""]
}

/// Everything the final summary needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub request: ScaffoldRequest,
    pub project_path: PathBuf,
    pub files_copied: usize,
    /// Package manager whose install succeeded, if any ran successfully.
    pub installed_with: Option<String>,
    /// Package manager to mention in next steps when nothing succeeded.
    pub preferred_manager: String,
    pub committed: bool,
    pub warnings: Vec<ScaffoldWarning>,
}

impl ScaffoldReport {
    pub fn new(
        request: ScaffoldRequest,
        project_path: PathBuf,
        preferred_manager: impl Into<String>,
    ) -> Self {
        Self {
            request,
            project_path,
            files_copied: 0,
            installed_with: None,
            preferred_manager: preferred_manager.into(),
            committed: false,
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, warning: ScaffoldWarning) {
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn manager(&self) -> &str {
        self.installed_with
            .as_deref()
            .unwrap_or(&self.preferred_manager)
    }

    /// Shell commands and hints to show after a run, in order.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.request.project_name())];
        let manager = self.manager().to_string();

        if self.installed_with.is_none() {
            steps.push(format!("{manager} install"));
        }

        match self.request.database() {
            DatabaseChoice::Supabase => steps.push(
                "Add NEXT_PUBLIC_SUPABASE_URL and NEXT_PUBLIC_SUPABASE_ANON_KEY to .env.local"
                    .into(),
            ),
            DatabaseChoice::Local => {
                steps.push("Start your local database and set DATABASE_URL in .env.local".into())
            }
            DatabaseChoice::None => {}
        }

        if self.request.auth_enabled() {
            steps.push(match self.request.database() {
                DatabaseChoice::Supabase => {
                    "Enable an auth provider in the Supabase dashboard".into()
                }
                _ => "Configure an authentication provider".into(),
            });
        }

        if !self.committed {
            steps.extend(manual_git_commands().map(String::from));
        }

        steps.push(format!("{manager} run dev"));
        steps
    }
}
