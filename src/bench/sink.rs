//! Results log sink.
//!
//! Appends one CSV row per benchmark run to a persistent results file:
//! strategy name, effective thread count, and minimum duration in
//! microseconds. The sink is deliberately non-fatal: a run whose results
//! file cannot be opened still produces its console report, and the
//! caller decides how loudly to complain.

use std::fs::OpenOptions;
use std::path::Path;

use crate::bench::harness::BenchmarkResult;

/// Appends one result row to the results log at `path`.
///
/// ## Behavior
/// Opens (or creates) `path` in append mode and writes a single
/// `strategy,threads,min_micros` record with no header, so repeated runs
/// accumulate one row each.
///
/// ## Errors
/// Any I/O or serialization failure is returned to the caller; the
/// computation that produced `result` is unaffected.

pub fn append_result(path: &Path, result: &BenchmarkResult) -> Result<(), csv::Error> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(&[
        result.strategy.to_string(),
        result.threads.to_string(),
        result.min_duration.as_micros().to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}
