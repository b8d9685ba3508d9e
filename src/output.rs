//! Console rendering for reports and raw trip rows.
//!
//! Reports are printed with their heading, elapsed time and a separator,
//! and mirrored as JSON debug events. Raw rows are written as CSV.

use anyhow::Result;
use csv::WriterBuilder;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use crate::reporters::Report;
use crate::trip::{Trip, TripTable};

/// Width of the dashed line printed between sections.
pub const SEPARATOR_WIDTH: usize = 40;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Logs a report as a JSON debug event.
pub fn log_json<R: Report>(report: &R) -> Result<()> {
    let json = serde_json::to_string(report)?;
    debug!(report = %json, "{}", R::HEADING);
    Ok(())
}

/// Runs `compute`, then prints its heading, result and elapsed time to `out`.
pub fn print_report<W, R, F>(out: &mut W, compute: F) -> Result<R>
where
    W: Write,
    R: Report,
    F: FnOnce() -> R,
{
    writeln!(out, "\n{}\n", R::HEADING)?;

    let start = Instant::now();
    let report = compute();
    let elapsed = start.elapsed();

    write!(out, "{report}")?;
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", separator())?;

    log_json(&report)?;
    Ok(report)
}

/// Writes `trips` as CSV rows, with a header, using the columns `table`
/// provides.
pub fn write_rows<W: Write>(out: &mut W, table: &TripTable, trips: &[Trip]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);

    writer.write_record(table.columns())?;
    for trip in trips {
        writer.write_record(table.record(trip))?;
    }
    writer.flush()?;

    Ok(())
}
