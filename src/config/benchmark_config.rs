//! Benchmark configuration derived from CLI arguments

use super::cli::CliArgs;
use crate::utils::Result;

/// Complete benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Workers created per benchmark (children per parent in nested mode)
    pub workers: usize,
}

impl BenchmarkConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        args.validate()?;

        Ok(Self {
            workers: args.workers,
        })
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            workers: super::cli::DEFAULT_WORKERS,
        }
    }
}
