//! Worker task bodies
//!
//! `Task` is a plain value with no captured state: a process worker receives
//! it as command-line arguments and rebuilds it from scratch, so anything
//! it needs has to fit in those arguments.

use std::hint::black_box;

use super::worker::{Worker, WorkerFactory};
use crate::config::WorkerRole;
use crate::utils::{BenchmarkError, Result};

/// What a spawned worker runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Return immediately
    Noop,
    /// Spawn `children` no-op workers of the same kind and join them all
    Parent { children: usize },
}

impl Task {
    /// Run the task body inside the current worker
    ///
    /// `factory` creates the children of a parent task; it is unused for
    /// `Noop`.
    pub fn execute<F: WorkerFactory>(self, factory: &F) -> Result<()> {
        match self {
            Task::Noop => {
                do_task();
                Ok(())
            }
            Task::Parent { children } => parent_task(children, factory),
        }
    }

    /// Encode as the hidden arguments understood by the worker entry point
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Task::Noop => vec![
                "--worker-role".to_string(),
                WorkerRole::Noop.as_str().to_string(),
            ],
            Task::Parent { children } => vec![
                "--worker-role".to_string(),
                WorkerRole::Parent.as_str().to_string(),
                "--children".to_string(),
                children.to_string(),
            ],
        }
    }

    /// Rebuild a task from decoded worker arguments
    pub fn from_role(role: WorkerRole, children: Option<usize>) -> Result<Self> {
        match (role, children) {
            (WorkerRole::Noop, None) => Ok(Task::Noop),
            (WorkerRole::Parent, Some(children)) => Ok(Task::Parent { children }),
            (WorkerRole::Noop, Some(_)) => Err(BenchmarkError::Transfer(
                "noop task does not take a child count".to_string(),
            )),
            (WorkerRole::Parent, None) => Err(BenchmarkError::Transfer(
                "parent task is missing its child count".to_string(),
            )),
        }
    }
}

/// The unit of work every benchmarked worker runs: nothing
#[inline(never)]
pub fn do_task() {
    black_box(());
}

/// Spawn `count` no-op workers and wait for all of them
///
/// Each child is started right after it is created; joins run afterwards in
/// start order. The first failure is returned as-is, leaving any already
/// started children unjoined.
pub fn parent_task<F: WorkerFactory>(count: usize, factory: &F) -> Result<()> {
    let mut workers = Vec::new();
    for _ in 0..count {
        let mut worker = factory.create(Task::Noop)?;
        worker.start()?;
        workers.push(worker);
    }

    for worker in workers {
        worker.join()?;
    }

    Ok(())
}
