use crate::batch::BatchReport;
use crate::mining::MiningReport;
use crate::output::{format_rank, format_velocity};
use std::io::{self, Write};

/// Writes a batch run summary with one line per updated keyword
pub fn write_batch_report<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    writeln!(out, "=== Rank Update ===\n")?;
    writeln!(out, "  Processed: {}", report.processed)?;
    writeln!(out, "  Updated:   {}", report.updated)?;
    writeln!(out, "  Skipped:   {}", report.skipped())?;
    writeln!(out)?;

    if !report.updates.is_empty() {
        writeln!(out, "Updated Keywords:")?;
        for update in &report.updates {
            writeln!(
                out,
                "  {:<40} rank {:>3} (was {:>3}, velocity {})",
                update.keyword,
                format_rank(update.rank),
                format_rank(update.prev_rank),
                format_velocity(update.velocity)
            )?;
        }
        writeln!(out)?;
    }

    if !report.failures.is_empty() {
        writeln!(out, "Skipped Keywords ({}):", report.failures.len())?;
        for failure in &report.failures {
            writeln!(out, "  - {}: {}", failure.keyword, failure.reason)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes mined suggestions, highest score first
pub fn write_mining_report<W: Write>(out: &mut W, report: &MiningReport) -> io::Result<()> {
    writeln!(out, "=== Keyword Suggestions for '{}' ===\n", report.seed)?;
    writeln!(
        out,
        "  {} unique suggestions, showing {}",
        report.count,
        report.suggestions.len()
    )?;
    writeln!(out)?;

    for suggestion in &report.suggestions {
        writeln!(
            out,
            "  {:>3}  {:<50} [{}]",
            suggestion.score, suggestion.keyword, suggestion.source
        )?;
    }

    Ok(())
}
