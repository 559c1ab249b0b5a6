use std::fmt::Write;

use crate::api::BatchReport;
use crate::core::score::Comparison;

/// Console layout for a single comparison.
pub fn render_comparison(c: &Comparison) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Comparison Result:");
    let _ = writeln!(out, "String 1 : {}", c.aligned1);
    let _ = writeln!(out, "String 2 : {}", c.aligned2);
    let _ = writeln!(out, "Match    : {}", c.mask);
    let _ = writeln!(out, "Matches  : {} / {}", c.matches, c.aligned_len());
    let _ = writeln!(out, "Similarity: {:.2}%", c.similarity);
    out
}

/// One line per scored pair, one per skipped pair, then the totals.
pub fn render_batch(report: &BatchReport) -> String {
    let mut out = String::new();
    for o in &report.outcomes {
        let _ = writeln!(
            out,
            "line {}: {} vs {} -> {} {}/{} {:.2}% {}",
            o.line,
            o.first,
            o.second,
            o.comparison.mask,
            o.comparison.matches,
            o.comparison.aligned_len(),
            o.comparison.similarity,
            o.verdict
        );
    }
    for s in &report.skipped_pairs {
        let _ = writeln!(out, "line {}: skipped ({})", s.line, s.reason);
    }
    let _ = writeln!(
        out,
        "processed={} matched={} skipped={} threshold={:.2}%",
        report.processed, report.matched, report.skipped, report.threshold
    );
    out
}
