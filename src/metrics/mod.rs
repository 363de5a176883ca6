//! Measurement results and output

pub mod reporter;

pub use reporter::{Measurement, MeasurementReporter, LABEL_WIDTH};
