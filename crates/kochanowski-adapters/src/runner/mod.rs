//! Command runner adapters.

mod process;
mod recording;

pub use process::{CommandHandle, ProcessRunner};
pub use recording::RecordingRunner;
