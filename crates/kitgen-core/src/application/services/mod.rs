//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "collect answers" or "scaffold a project".

pub mod answer_collector;
pub mod dependency_installer;
pub mod repository_initializer;
pub mod scaffold_service;

pub use answer_collector::AnswerCollector;
pub use dependency_installer::{DependencyInstaller, PackageManagers};
pub use repository_initializer::{DEFAULT_COMMIT_MESSAGE, RepositoryInitializer};
pub use scaffold_service::{ScaffoldOptions, ScaffoldService};
