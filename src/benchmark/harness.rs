//! Benchmark harness
//!
//! Times creation plus join of a batch of workers. Starts happen inside the
//! creation loop and joins run in a plain sequential loop afterwards; both
//! are part of what is being measured, so neither is batched or
//! parallelized.

use std::io::Write;
use std::time::Instant;

use tracing::debug;

use super::task::Task;
use super::worker::{Worker, WorkerFactory};
use crate::metrics::{Measurement, MeasurementReporter};
use crate::utils::Result;

/// How the workers are spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnMode {
    /// The harness creates every worker itself
    Direct,
    /// The harness creates one parent worker, which creates the others
    Nested,
}

impl SpawnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnMode::Direct => "direct",
            SpawnMode::Nested => "nested",
        }
    }
}

/// Time `count` workers from `factory` and write the measurement line
///
/// Any create/start/join failure is returned immediately and no line is
/// written. Workers already started at that point are left unjoined.
pub fn run_benchmark<F, W>(
    label: &str,
    factory: &F,
    count: usize,
    mode: SpawnMode,
    out: &mut W,
) -> Result<Measurement>
where
    F: WorkerFactory,
    W: Write,
{
    debug!(
        "{}: spawning {} {} workers ({} mode)",
        label,
        count,
        factory.kind(),
        mode.as_str()
    );

    let start = Instant::now();

    let (started, joined) = match mode {
        SpawnMode::Nested => {
            let mut parent = factory.create(Task::Parent { children: count })?;
            parent.start()?;
            parent.join()?;
            (1, 1)
        }
        SpawnMode::Direct => {
            // Grows with the workers actually started; `count` may be huge
            let mut workers = Vec::new();
            for _ in 0..count {
                let mut worker = factory.create(Task::Noop)?;
                worker.start()?;
                workers.push(worker);
            }

            let started = workers.len();
            let mut joined = 0;
            for worker in workers {
                worker.join()?;
                joined += 1;
            }
            (started, joined)
        }
    };

    let elapsed = start.elapsed();
    debug!("{}: done in {:?}", label, elapsed);

    let measurement = Measurement {
        label: label.to_string(),
        workers: count,
        mode,
        started,
        joined,
        elapsed,
    };
    MeasurementReporter::write_measurement(out, &measurement)?;

    Ok(measurement)
}
