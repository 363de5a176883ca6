//! spawn-overhead-bench library
//!
//! Measures the cost of creating and joining processes, nested child
//! processes and threads running a no-op task.

pub mod benchmark;
pub mod config;
pub mod metrics;
pub mod utils;
