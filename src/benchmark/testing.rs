//! Instrumented factories for unit tests
//!
//! Both factories run real OS threads so the create/start/join sequence is
//! exercised for real; they only add bookkeeping around it.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::task::Task;
use super::worker::{Worker, WorkerFactory, WorkerKind};
use crate::utils::{BenchmarkError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Created(usize),
    Started(usize),
    Joined(usize),
}

#[derive(Default)]
struct Log {
    events: Mutex<Vec<Event>>,
    next_id: AtomicUsize,
    completed: AtomicUsize,
}

/// Thread factory recording every lifecycle event
#[derive(Clone, Default)]
pub struct RecordingFactory {
    log: Arc<Log>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.events.lock().unwrap().clone()
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|e| matches!(e, Event::Created(_)))
    }

    pub fn started(&self) -> usize {
        self.count(|e| matches!(e, Event::Started(_)))
    }

    pub fn joined(&self) -> usize {
        self.count(|e| matches!(e, Event::Joined(_)))
    }

    /// Task bodies that ran to completion
    pub fn completed(&self) -> usize {
        self.log.completed.load(Ordering::SeqCst)
    }

    fn record(&self, event: Event) {
        self.log.events.lock().unwrap().push(event);
    }
}

impl WorkerFactory for RecordingFactory {
    type Worker = RecordingWorker;

    fn kind(&self) -> WorkerKind {
        WorkerKind::Thread
    }

    fn create(&self, task: Task) -> Result<RecordingWorker> {
        let id = self.log.next_id.fetch_add(1, Ordering::SeqCst);
        self.record(Event::Created(id));
        Ok(RecordingWorker {
            id,
            task,
            factory: self.clone(),
            handle: None,
        })
    }
}

pub struct RecordingWorker {
    id: usize,
    task: Task,
    factory: RecordingFactory,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Worker for RecordingWorker {
    fn start(&mut self) -> Result<()> {
        let task = self.task;
        let factory = self.factory.clone();
        let handle = std::thread::Builder::new()
            .spawn(move || {
                let result = task.execute(&factory);
                if matches!(task, Task::Noop) {
                    factory.log.completed.fetch_add(1, Ordering::SeqCst);
                }
                result
            })
            .map_err(|source| BenchmarkError::Spawn {
                kind: WorkerKind::Thread,
                source,
            })?;
        self.factory.record(Event::Started(self.id));
        self.handle = Some(handle);
        Ok(())
    }

    fn join(self) -> Result<()> {
        let handle = self.handle.ok_or(BenchmarkError::NotStarted)?;
        let result = handle.join().map_err(|_| BenchmarkError::WorkerPanicked {
            name: format!("recording-{}", self.id),
        })?;
        self.factory.record(Event::Joined(self.id));
        result
    }
}

/// Thread factory whose `create` fails once `limit` workers exist,
/// standing in for an exhausted process/thread table
#[derive(Clone)]
pub struct FailingFactory {
    limit: usize,
    created: Arc<AtomicUsize>,
}

impl FailingFactory {
    pub fn after(limit: usize) -> Self {
        Self {
            limit,
            created: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl WorkerFactory for FailingFactory {
    type Worker = FailingWorker;

    fn kind(&self) -> WorkerKind {
        WorkerKind::Thread
    }

    fn create(&self, task: Task) -> Result<FailingWorker> {
        if self.created.fetch_add(1, Ordering::SeqCst) >= self.limit {
            return Err(BenchmarkError::Spawn {
                kind: WorkerKind::Thread,
                source: io::Error::new(io::ErrorKind::WouldBlock, "worker limit reached"),
            });
        }
        Ok(FailingWorker {
            task,
            factory: self.clone(),
            handle: None,
        })
    }
}

pub struct FailingWorker {
    task: Task,
    factory: FailingFactory,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Worker for FailingWorker {
    fn start(&mut self) -> Result<()> {
        let task = self.task;
        let factory = self.factory.clone();
        let handle = std::thread::Builder::new()
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
        handle.join().map_err(|_| BenchmarkError::WorkerPanicked {
            name: "failing".to_string(),
        })?
    }
}
