//! Command-line argument parsing
//!
//! The public surface is deliberately small: the worker count and the log
//! level. The hidden worker-role arguments are how a process worker learns
//! which task to run after being re-executed.

use clap::{Parser, ValueEnum};

use crate::utils::{BenchmarkError, Result};

/// Default number of workers spawned per benchmark
pub const DEFAULT_WORKERS: usize = 1000;

/// Measure the cost of creating and joining processes and threads
#[derive(Parser, Debug, Clone)]
#[command(name = "spawn-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Number of workers to create per benchmark
    #[arg(short = 'n', long = "workers", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Verbose logging (debug level, stderr)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    // ===== Internal: process worker entry point =====
    /// Run as a spawned worker executing the given task
    #[arg(long = "worker-role", value_enum, hide = true)]
    pub worker_role: Option<WorkerRole>,

    /// Number of children a parent worker spawns
    #[arg(long = "children", hide = true)]
    pub children: Option<usize>,
}

/// Task a re-executed process worker runs
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    Noop,
    Parent,
}

impl WorkerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerRole::Noop => "noop",
            WorkerRole::Parent => "parent",
        }
    }
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        match (self.worker_role, self.children) {
            (Some(WorkerRole::Parent), None) => Err(BenchmarkError::Config(
                "--worker-role parent requires --children".to_string(),
            )),
            (Some(WorkerRole::Noop), Some(_)) | (None, Some(_)) => Err(BenchmarkError::Config(
                "--children is only valid with --worker-role parent".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
