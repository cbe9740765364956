//! Supervision of the engine child process.

mod binary;
mod exit;
mod handle;
mod queue;
mod status;
mod supervisor;

use std::path::PathBuf;

use thiserror::Error;

pub use binary::{engine_binary_name, target_bits, GpuBackend};
pub use exit::{exit_code_of, EngineExit};
pub use handle::ProcessHandle;
pub use queue::LineQueue;
pub use status::{parse_status_line, StatusLine};
pub use supervisor::{EngineKey, ProcessSupervisor, StopOutcome, SupervisorState};

/// Errors that can occur while launching or driving the engine.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine {0} pipe was not captured")]
    MissingPipe(&'static str),

    #[error("Failed to start output reader: {0}")]
    ReaderThread(#[source] std::io::Error),

    #[error("Engine is not running")]
    NotRunning,

    #[error("Failed to write to engine stdin: {0}")]
    Input(#[source] std::io::Error),
}
