//! Process-backed workers
//!
//! A process worker re-executes a program (by default the running binary)
//! with the hidden `--worker-role` arguments. Every child starts from a
//! fresh process image and rebuilds its `Task` from the command line, so
//! the measured cost includes full runtime initialization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;

use super::task::Task;
use super::worker::{Worker, WorkerFactory, WorkerKind};
use crate::utils::{BenchmarkError, Result};

/// When set, every no-op process worker leaves a file named after its pid
/// in this directory just before exiting
pub const EXIT_MARKER_DIR_ENV: &str = "SPAWN_BENCH_MARK_DIR";

/// Record that the current worker process ran to completion
pub fn write_exit_marker(dir: &Path) -> io::Result<()> {
    fs::write(dir.join(std::process::id().to_string()), b"")
}

/// Creates `ProcessWorker`s that run `program --worker-role ...`
#[derive(Debug, Clone)]
pub struct ProcessFactory {
    program: Arc<PathBuf>,
}

impl ProcessFactory {
    /// Factory re-executing the current binary
    pub fn current_exe() -> Result<Self> {
        let program = std::env::current_exe().map_err(|e| {
            BenchmarkError::Transfer(format!("cannot resolve current executable: {}", e))
        })?;
        Ok(Self::with_program(program))
    }

    /// Factory executing `program`, which must implement the worker role
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Arc::new(program.into()),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl WorkerFactory for ProcessFactory {
    type Worker = ProcessWorker;

    fn kind(&self) -> WorkerKind {
        WorkerKind::Process
    }

    fn create(&self, task: Task) -> Result<ProcessWorker> {
        let mut command = Command::new(self.program.as_os_str());
        command
            .args(task.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        Ok(ProcessWorker {
            command,
            child: None,
        })
    }
}

/// One child process running a `Task`
pub struct ProcessWorker {
    command: Command,
    child: Option<Child>,
}

impl ProcessWorker {
    /// OS process id once started
    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }
}

impl Worker for ProcessWorker {
    fn start(&mut self) -> Result<()> {
        let child = self
            .command
            .spawn()
            .map_err(|source| BenchmarkError::Spawn {
                kind: WorkerKind::Process,
                source,
            })?;
        self.child = Some(child);
        Ok(())
    }

    fn join(self) -> Result<()> {
        let mut child = self.child.ok_or(BenchmarkError::NotStarted)?;
        let pid = child.id();
        let status = child.wait().map_err(|source| BenchmarkError::Join {
            kind: WorkerKind::Process,
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(BenchmarkError::WorkerExited { pid, status })
        }
    }
}
