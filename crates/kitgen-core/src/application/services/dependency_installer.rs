//! Dependency Installer - `<manager> install` with one fixed fallback.
//!
//! The primary package manager runs first; on a spawn failure or non-zero
//! exit the fallback runs exactly once. There is no general retry policy.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandLine, CommandRunner},
    domain::ScaffoldWarning,
};

/// The two package managers tried, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagers {
    pub primary: String,
    pub fallback: String,
}

impl Default for PackageManagers {
    fn default() -> Self {
        Self {
            primary: "npm".into(),
            fallback: "yarn".into(),
        }
    }
}

/// Installs a generated project's dependencies.
#[derive(Debug, Clone, Default)]
pub struct DependencyInstaller {
    managers: PackageManagers,
}

impl DependencyInstaller {
    pub fn new(managers: PackageManagers) -> Self {
        Self { managers }
    }

    pub fn primary(&self) -> &str {
        &self.managers.primary
    }

    /// Returns the manager that succeeded, or the warning to report.
    #[instrument(skip_all, fields(dir = %project_dir.display()))]
    pub fn install(
        &self,
        runner: &dyn CommandRunner,
        project_dir: &Path,
    ) -> Result<String, ScaffoldWarning> {
        for manager in [&self.managers.primary, &self.managers.fallback] {
            let command = CommandLine::new(manager.as_str(), ["install"]);
            match runner.run(&command, project_dir) {
                Ok(()) => {
                    info!(%manager, "Dependencies installed");
                    return Ok(manager.clone());
                }
                Err(e) => warn!(%manager, error = %e, "Install attempt failed"),
            }
        }

        Err(ScaffoldWarning::InstallFailed {
            primary: self.managers.primary.clone(),
            fallback: self.managers.fallback.clone(),
        })
    }
}
