//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kitgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: template copy and file rewrites
//!   - `CommandRunner`: package manager and git invocations
//!   - `Prompter`: interactive questions
//!   - `ScaffoldObserver`: progress feedback
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandLine, CommandRunner, Filesystem, NoopObserver, Prompter, ScaffoldObserver,
    ScaffoldStep,
};
