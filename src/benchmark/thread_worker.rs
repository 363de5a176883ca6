//! Thread-backed workers
//!
//! Each worker is one OS thread. Threads run in true parallel here; there
//! is no interpreter-wide lock to contend for.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use super::task::Task;
use super::worker::{Worker, WorkerFactory, WorkerKind};
use crate::utils::{BenchmarkError, Result};

/// Source of unique thread names across all factories
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(0);

/// Creates `ThreadWorker`s
#[derive(Debug, Clone, Default)]
pub struct ThreadFactory;

impl ThreadFactory {
    pub fn new() -> Self {
        Self
    }
}

impl WorkerFactory for ThreadFactory {
    type Worker = ThreadWorker;

    fn kind(&self) -> WorkerKind {
        WorkerKind::Thread
    }

    fn create(&self, task: Task) -> Result<ThreadWorker> {
        let id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
        Ok(ThreadWorker {
            name: format!("bench-thread-{}", id),
            task,
            factory: self.clone(),
            handle: None,
        })
    }
}

/// One OS thread running a `Task`
pub struct ThreadWorker {
    name: String,
    task: Task,
    factory: ThreadFactory,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Worker for ThreadWorker {
    fn start(&mut self) -> Result<()> {
        let task = self.task;
        let factory = self.factory.clone();

        let handle = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || task.execute(&factory))
            .map_err(|source| BenchmarkError::Spawn {
                kind: WorkerKind::Thread,
                source,
            })?;

        self.handle = Some(handle);
        Ok(())
    }

    fn join(self) -> Result<()> {
        let handle = self.handle.ok_or(BenchmarkError::NotStarted)?;
        match handle.join() {
            Ok(result) => result,
            Err(_) => Err(BenchmarkError::WorkerPanicked { name: self.name }),
        }
    }
}
