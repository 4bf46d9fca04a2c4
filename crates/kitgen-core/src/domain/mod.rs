//! Core domain layer for Kitgen.
//!
//! Pure logic only: answer interpretation, request validation, and the two
//! token substitutions. All filesystem, terminal, and process concerns are
//! reached through ports defined in the application layer.
//!
//! - **No I/O**: no filesystem, network, or subprocess calls
//! - **No tracing**: observability belongs to the application and CLI layers
//! - **Immutable entities**: a `ScaffoldRequest` never changes once built

pub mod choice;
pub mod entities;
pub mod error;
pub mod substitution;
pub mod value_objects;

pub use entities::{ProjectName, ScaffoldReport, ScaffoldRequest, ScaffoldWarning};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{DatabaseChoice, TemplateKind};
