//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.  The project itself is
//! described interactively, so `new` takes no arguments of its own.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kitgen",
    bin_name = "kitgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive starter-kit scaffolding",
    long_about = "Kitgen asks a few questions, copies the matching starter template, \
                  fills in your project details, installs dependencies and makes \
                  the first git commit.",
    after_help = "EXAMPLES:\n\
        \x20 kitgen                 # answer the questions, get a project\n\
        \x20 kitgen -v new          # same, with progress logging\n\
        \x20 kitgen config init\n\
        \x20 kitgen completions bash > /usr/share/bash-completion/completions/kitgen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; none means `new`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project by answering a few questions.
    #[command(
        visible_alias = "n",
        about = "Create a new project (default)",
        after_help = "Questions are read one line at a time, so answers can be piped:\n\
            \x20 printf 'my-app\\n\\n1\\n1\\ny\\n' | kitgen new"
    )]
    New,

    /// Manage the Kitgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kitgen config init\n\
            \x20 kitgen config list\n\
            \x20 kitgen config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kitgen completions bash > ~/.local/share/bash-completion/completions/kitgen\n\
            \x20 kitgen completions zsh  > ~/.zfunc/_kitgen\n\
            \x20 kitgen completions fish > ~/.config/fish/completions/kitgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kitgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kitgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
    /// Print the effective configuration.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
