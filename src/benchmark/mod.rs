//! Spawn benchmarks
//!
//! This module provides the creation/teardown benchmark:
//! - Task: what a worker runs (no-op or nested parent)
//! - WorkerFactory/Worker: create/start/join capability, backed by
//!   processes or threads
//! - run_benchmark: times one batch of workers
//! - Orchestrator: runs the fixed benchmark sequence

pub mod harness;
pub mod orchestrator;
pub mod process_worker;
pub mod task;
pub mod thread_worker;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use harness::{run_benchmark, SpawnMode};
pub use orchestrator::Orchestrator;
pub use process_worker::{write_exit_marker, ProcessFactory, ProcessWorker, EXIT_MARKER_DIR_ENV};
pub use task::{do_task, parent_task, Task};
pub use thread_worker::{ThreadFactory, ThreadWorker};
pub use worker::{Worker, WorkerFactory, WorkerKind};
