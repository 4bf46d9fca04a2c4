//! Subprocess adapters.

mod recording;
mod system;

pub use recording::RecordingRunner;
pub use system::SystemCommandRunner;
