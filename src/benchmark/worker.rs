//! Worker-constructor capability
//!
//! A `WorkerFactory` produces unstarted workers bound to a `Task`. The
//! harness only ever talks to these two traits, so processes and threads
//! go through exactly the same create/start/join sequence. The concrete
//! variant is picked at the call site through generics.

use std::fmt;

use super::task::Task;
use crate::utils::Result;

/// Kind of execution unit a factory creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerKind {
    /// Separate address space, full runtime initialization per unit
    Process,
    /// Shared address space
    Thread,
}

impl WorkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerKind::Process => "process",
            WorkerKind::Thread => "thread",
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates workers of one kind
///
/// Factories are cloned into thread workers running a parent task, so they
/// must be cheap to clone and carry no borrowed state.
pub trait WorkerFactory: Clone + Send + 'static {
    type Worker: Worker;

    fn kind(&self) -> WorkerKind;

    /// Build a worker bound to `task`. The worker is joinable only after
    /// `start`.
    fn create(&self, task: Task) -> Result<Self::Worker>;
}

/// Handle to one execution unit, exclusively owned by its creator
pub trait Worker {
    /// Launch the execution unit
    fn start(&mut self) -> Result<()>;

    /// Block until the execution unit terminates. No timeout.
    fn join(self) -> Result<()>;
}
