//! Benchmark orchestrator
//!
//! Runs the fixed benchmark sequence: direct processes, nested child
//! processes, direct threads, all with the same worker count.

use std::io::Write;

use tracing::info;

use super::harness::{run_benchmark, SpawnMode};
use super::process_worker::ProcessFactory;
use super::thread_worker::ThreadFactory;
use crate::config::BenchmarkConfig;
use crate::metrics::{Measurement, MeasurementReporter};
use crate::utils::Result;

/// Benchmark orchestrator
pub struct Orchestrator {
    config: BenchmarkConfig,
    processes: ProcessFactory,
    threads: ThreadFactory,
}

impl Orchestrator {
    /// Create an orchestrator spawning process workers from the current binary
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        let processes = ProcessFactory::current_exe()?;
        Ok(Self::with_process_factory(config, processes))
    }

    /// Create an orchestrator with an explicit process worker program
    pub fn with_process_factory(config: BenchmarkConfig, processes: ProcessFactory) -> Self {
        Self {
            config,
            processes,
            threads: ThreadFactory::new(),
        }
    }

    /// Print the header and run every benchmark in order
    ///
    /// Stops at the first failing benchmark; lines already written stay.
    pub fn run_all<W: Write>(&self, out: &mut W) -> Result<Vec<Measurement>> {
        let workers = self.config.workers;
        info!(
            "Running benchmarks with {} workers (process worker: {:?})",
            workers,
            self.processes.program()
        );

        MeasurementReporter::write_header(out)?;

        let results = vec![
            run_benchmark("Processes", &self.processes, workers, SpawnMode::Direct, out)?,
            run_benchmark("Child Processes", &self.processes, workers, SpawnMode::Nested, out)?,
            run_benchmark("Threads", &self.threads, workers, SpawnMode::Direct, out)?,
        ];

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::BenchmarkError;

    #[test]
    fn test_missing_worker_program_stops_after_header() {
        let config = BenchmarkConfig { workers: 3 };
        let orchestrator = Orchestrator::with_process_factory(
            config,
            ProcessFactory::with_program("/nonexistent/spawn-bench"),
        );

        let mut out = Vec::new();
        let err = orchestrator.run_all(&mut out).unwrap_err();
        assert!(matches!(err, BenchmarkError::Spawn { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Benchmarking creation of processes vs threads:\n\n"
        );
    }
}
