//! Measurement formatting and reporting
//!
//! Measurement lines go to stdout in a fixed format; everything else
//! (summaries, diagnostics) goes through tracing so stdout stays parseable.

use std::io::{self, Write};
use std::time::Duration;

use tracing::info;

use crate::benchmark::SpawnMode;

/// Width of the label column
pub const LABEL_WIDTH: usize = 16;

/// One timed benchmark run
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Display label, e.g. "Threads"
    pub label: String,
    /// Requested worker count (children of the parent in nested mode)
    pub workers: usize,
    pub mode: SpawnMode,
    /// Workers the harness itself started and joined
    pub started: usize,
    pub joined: usize,
    /// Monotonic time from before the first create to after the last join
    pub elapsed: Duration,
}

impl Measurement {
    /// Format as `<label:16>| <secs> seconds for <n> <label lowercased>`
    pub fn line(&self) -> String {
        format!(
            "{:<width$}| {:.4} seconds for {} {}",
            self.label,
            self.elapsed.as_secs_f64(),
            self.workers,
            self.label.to_lowercase(),
            width = LABEL_WIDTH
        )
    }

    /// Average creation+join cost per requested worker, in microseconds
    pub fn per_worker_us(&self) -> f64 {
        if self.workers == 0 {
            0.0
        } else {
            self.elapsed.as_secs_f64() * 1_000_000.0 / self.workers as f64
        }
    }
}

/// Writes the header and measurement lines
pub struct MeasurementReporter;

impl MeasurementReporter {
    pub fn header() -> &'static str {
        "Benchmarking creation of processes vs threads:"
    }

    /// Header followed by an empty line
    pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "{}\n", Self::header())?;
        out.flush()
    }

    pub fn write_measurement<W: Write>(out: &mut W, measurement: &Measurement) -> io::Result<()> {
        writeln!(out, "{}", measurement.line())?;
        out.flush()
    }

    /// Log a per-worker cost summary (stderr only)
    pub fn summary(measurements: &[Measurement]) {
        for m in measurements {
            info!(
                "{}: {:.1}us per worker ({} mode, {} started, {} joined)",
                m.label,
                m.per_worker_us(),
                m.mode.as_str(),
                m.started,
                m.joined
            );
        }
    }
}
