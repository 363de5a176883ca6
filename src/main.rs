//! spawn-bench - process vs thread creation benchmark
//!
//! Times creating and joining 1000 processes, 1000 child processes spawned
//! from a single parent process, and 1000 threads, each running a no-op.
//! The same binary doubles as the process worker via hidden arguments.

use std::path::Path;

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use spawn_overhead_bench::benchmark::{
    write_exit_marker, Orchestrator, ProcessFactory, Task, EXIT_MARKER_DIR_ENV,
};
use spawn_overhead_bench::config::{BenchmarkConfig, CliArgs, WorkerRole};
use spawn_overhead_bench::metrics::MeasurementReporter;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Measurement lines own stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Entry point of a re-executed process worker
fn run_worker(role: WorkerRole, children: Option<usize>) -> Result<()> {
    let task = Task::from_role(role, children)?;
    let factory = ProcessFactory::current_exe()?;
    task.execute(&factory)?;

    if task == Task::Noop {
        if let Some(dir) = std::env::var_os(EXIT_MARKER_DIR_ENV) {
            write_exit_marker(Path::new(&dir))?;
        }
    }
    Ok(())
}

fn run(args: CliArgs) -> Result<()> {
    let config = BenchmarkConfig::from_cli(&args)?;

    let orchestrator = Orchestrator::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let results = orchestrator.run_all(&mut out)?;

    MeasurementReporter::summary(&results);
    info!("Benchmarks complete: {}", results.len());

    Ok(())
}

fn main() {
    let args = CliArgs::parse_args();

    let result = match args.worker_role {
        Some(role) => {
            setup_logging(false, true);
            args.validate()
                .map_err(anyhow::Error::from)
                .and_then(|_| run_worker(role, args.children))
        }
        None => {
            setup_logging(args.verbose, args.quiet);
            run(args)
        }
    };

    if let Err(e) = result {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
