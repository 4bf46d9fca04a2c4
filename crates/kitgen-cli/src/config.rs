//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ScaffoldOptions`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `KITGEN_<SECTION>__<KEY>`, e.g.
//!    `KITGEN_INSTALL__PRIMARY=pnpm` (a `.env` file is honoured too)
//! 2. Config file: `--config <FILE>`, else [`AppConfig::config_path`]
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use kitgen_adapters::template_root;
use kitgen_core::application::{
    PackageManagers, ScaffoldOptions, services::DEFAULT_COMMIT_MESSAGE,
};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "KITGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where template trees come from.
    pub templates: TemplatesConfig,
    /// Dependency installation.
    pub install: InstallConfig,
    /// Repository initialisation.
    pub git: GitConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Overrides discovery next to the executable.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub enabled: bool,
    pub primary: String,
    pub fallback: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        let managers = PackageManagers::default();
        Self {
            enabled: true,
            primary: managers.primary,
            fallback: managers.fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub enabled: bool,
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commit_message: DEFAULT_COMMIT_MESSAGE.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicitly passed `config_file` must exist; the default location
    /// is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kitgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kitgen", "kitgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kitgen.toml"))
    }

    /// The file that `load` reads for a given `--config` value.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Render as TOML, as written by `config init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Options for one scaffold run.
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        let mut options =
            ScaffoldOptions::new(template_root::resolve(self.templates.root.as_deref()));
        options.install = self.install.enabled.then(|| PackageManagers {
            primary: self.install.primary.clone(),
            fallback: self.install.fallback.clone(),
        });
        options.commit_message = self
            .git
            .enabled
            .then(|| self.git.commit_message.clone());
        options
    }
}
