//! Report printing for command results
//!
//! Every report has a human-readable printer writing to any `io::Write`, plus
//! [`write_json`] for machine consumption. The `print_*` wrappers target
//! stdout.

mod analysis;
mod tracking;

pub use analysis::{write_audit_report, write_brand_summary, write_search_results};
pub use tracking::{write_batch_report, write_mining_report};

use serde::Serialize;
use std::io::{self, Write};

/// Writes any report as pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Prints a report to stdout, as JSON when `json` is set
pub fn print_report<T, P>(value: &T, json: bool, printer: P) -> io::Result<()>
where
    T: Serialize,
    P: FnOnce(&mut io::StdoutLock<'static>, &T) -> io::Result<()>,
{
    let mut stdout = io::stdout().lock();
    if json {
        write_json(&mut stdout, value)
    } else {
        printer(&mut stdout, value)
    }
}

/// Renders a signed velocity as "+3", "-2" or "0"
pub(crate) fn format_velocity(velocity: i64) -> String {
    if velocity > 0 {
        format!("+{}", velocity)
    } else {
        velocity.to_string()
    }
}

/// Renders a rank, with 0 shown as "-"
pub(crate) fn format_rank(rank: usize) -> String {
    if rank == 0 {
        "-".to_string()
    } else {
        rank.to_string()
    }
}
