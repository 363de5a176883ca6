//! Error types for spawn-overhead-bench

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

use crate::benchmark::WorkerKind;

/// Top-level application error
///
/// Nothing in the harness recovers from these; every variant unwinds the
/// current benchmark and ends the run.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The OS refused to create a new execution unit (process/thread limit,
    /// stack allocation, missing executable, ...)
    #[error("Failed to start {kind} worker: {source}")]
    Spawn {
        kind: WorkerKind,
        #[source]
        source: io::Error,
    },

    /// The task could not be handed over to a fresh execution context
    #[error("Failed to transfer task to new execution context: {0}")]
    Transfer(String),

    #[error("Failed to join {kind} worker: {source}")]
    Join {
        kind: WorkerKind,
        #[source]
        source: io::Error,
    },

    #[error("Worker process {pid} terminated abnormally: {status}")]
    WorkerExited { pid: u32, status: ExitStatus },

    #[error("Worker thread '{name}' panicked")]
    WorkerPanicked { name: String },

    #[error("Worker joined before it was started")]
    NotStarted,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
