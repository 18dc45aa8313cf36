use crate::analysis::{AuditReport, BrandMentionSummary};
use crate::parse::SearchResult;
use std::io::{self, Write};

/// Writes parsed results in rank order
pub fn write_search_results<W: Write>(out: &mut W, query: &str, results: &[SearchResult]) -> io::Result<()> {
    writeln!(out, "=== Results for '{}' ===\n", query)?;

    if results.is_empty() {
        writeln!(out, "  No organic results found")?;
        return Ok(());
    }

    for result in results {
        writeln!(out, "{:>3}. {}", result.rank, result.title)?;
        writeln!(out, "     {}", result.link)?;
        writeln!(out, "     {}", result.snippet)?;
    }

    Ok(())
}

pub fn write_brand_summary<W: Write>(out: &mut W, brand: &str, summary: &BrandMentionSummary) -> io::Result<()> {
    writeln!(out, "=== Brand Visibility: {} ===\n", brand)?;
    writeln!(
        out,
        "  Mentions:   {} of {} results ({}%)",
        summary.mentions_count, summary.total_results, summary.visibility_percent
    )?;
    writeln!(out, "  Sentiment:  {:?}", summary.sentiment)?;

    if let Some(top) = &summary.top_result {
        writeln!(out, "  Top result: #{} {} ({})", top.rank, top.title, top.link)?;
    }

    Ok(())
}

pub fn write_audit_report<W: Write>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "=== Content Audit ===\n")?;
    writeln!(out, "  Score: {}/100", report.score)?;
    writeln!(out, "  {}", report.summary)?;
    writeln!(out)?;

    writeln!(out, "  Your page:  {} ({} words)", report.user_title, report.user_word_count)?;
    if let Some(title) = &report.competitor_title {
        writeln!(out, "  Competitor: {} ({} words)", title, report.competitor_word_count)?;
    }
    writeln!(out)?;

    write_list(out, "Pros", &report.pros)?;
    write_list(out, "Cons", &report.cons)?;
    write_list(out, "Missing Topics", &report.missing_entities)?;

    Ok(())
}

fn write_list<W: Write>(out: &mut W, heading: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}:", heading)?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    writeln!(out)
}
