//! Kitgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Kitgen
//! starter-kit scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            kitgen-cli (CLI)             │
//! │     (terminal, config, exit codes)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (AnswerCollector, ScaffoldService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, CommandRunner, Prompter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kitgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use kitgen_core::prelude::*;
//! # fn adapters() -> (Box<dyn Prompter>, Box<dyn Filesystem>, Box<dyn CommandRunner>) { todo!() }
//!
//! let (prompter, filesystem, runner) = adapters();
//!
//! let request = AnswerCollector::new(prompter).collect()?;
//! let service = ScaffoldService::new(filesystem, runner, ScaffoldOptions::new("./templates"));
//! let report = service.scaffold(request, Path::new("."))?;
//! for step in report.next_steps() {
//!     println!("{step}");
//! }
//! # Ok::<(), KitError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, PackageManagers, ScaffoldOptions, ScaffoldService,
        ports::{CommandLine, CommandRunner, Filesystem, Prompter, ScaffoldObserver, ScaffoldStep},
    };
    pub use crate::domain::{
        DatabaseChoice, ProjectName, ScaffoldReport, ScaffoldRequest, ScaffoldWarning,
        TemplateKind,
    };
    pub use crate::error::{KitError, KitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
