/// Batch measurement module for headless runs
///
/// This module provides functionality to:
/// - Run a configured simulation for a fixed number of steps without a console
/// - Sample cumulative collision statistics at a fixed interval
/// - Export the sampled records and the final histogram as CSV

pub mod export;
pub mod runner;

pub use export::{export_histogram, format_record, RecordWriter};
pub use runner::{BatchRunner, RunSummary};
