//! Infrastructure adapters for Kitgen.
//!
//! This crate implements the ports defined in `kitgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod prompt;
pub mod template_root;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use prompt::{LinePrompter, ScriptedPrompter};
