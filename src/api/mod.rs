//! High-level, ergonomic library API: score one pair under a set of
//! parameters, or score a whole pairs file into a `BatchReport`. Prefer these
//! entrypoints over the low-level `core` modules when integrating platesim.
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::ComparisonParams;
use crate::core::score::{Comparison, compare_strings_with_pad};
use crate::error::Result;
use crate::io::pairs::{StringPair, read_pairs_file};
use crate::io::prompt::validate_length;
use crate::types::Verdict;

/// Compare two strings using the padding character from `params`.
/// No length bounds are applied; see [`compare_validated`] for that.
pub fn compare(s1: &str, s2: &str, params: &ComparisonParams) -> Result<Comparison> {
    compare_strings_with_pad(s1, s2, params.pad)
}

/// Trim both strings, enforce the `[min_len, max_len]` bounds, then compare.
pub fn compare_validated(s1: &str, s2: &str, params: &ComparisonParams) -> Result<Comparison> {
    let first = validate_length(s1, params.min_len, params.max_len)?;
    let second = validate_length(s2, params.min_len, params.max_len)?;
    compare(first, second, params)
}

/// A scored pair from a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairOutcome {
    pub line: usize,
    pub first: String,
    pub second: String,
    pub verdict: Verdict,
    pub comparison: Comparison,
}

/// A pair that failed validation and was left out of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedPair {
    pub line: usize,
    pub reason: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub threshold: f64,
    pub processed: usize,
    pub matched: usize,
    pub skipped: usize,
    pub outcomes: Vec<PairOutcome>,
    pub skipped_pairs: Vec<SkippedPair>,
}

/// Score every pair. With `continue_on_error` a pair failing validation is
/// recorded as skipped; otherwise the first failure is returned.
pub fn compare_pairs(
    pairs: &[StringPair],
    params: &ComparisonParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;

    let mut report = BatchReport {
        generated_at: Utc::now(),
        threshold: params.threshold,
        processed: 0,
        matched: 0,
        skipped: 0,
        outcomes: Vec::with_capacity(pairs.len()),
        skipped_pairs: Vec::new(),
    };

    for pair in pairs {
        match compare_validated(&pair.first, &pair.second, params) {
            Ok(comparison) => {
                let verdict = comparison.verdict(params.threshold);
                debug!(
                    "line {}: {} vs {} -> {:.2}% {}",
                    pair.line, pair.first, pair.second, comparison.similarity, verdict
                );
                report.processed += 1;
                if verdict == Verdict::Match {
                    report.matched += 1;
                }
                report.outcomes.push(PairOutcome {
                    line: pair.line,
                    first: pair.first.clone(),
                    second: pair.second.clone(),
                    verdict,
                    comparison,
                });
            }
            Err(e) if continue_on_error => {
                warn!("Skipping line {}: {}", pair.line, e);
                report.skipped += 1;
                report.skipped_pairs.push(SkippedPair {
                    line: pair.line,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!("Batch comparison complete!");
    info!("Processed: {}", report.processed);
    info!("Matched: {}", report.matched);
    info!("Skipped: {}", report.skipped);
    Ok(report)
}

/// Read a pairs file and score it with [`compare_pairs`].
pub fn compare_pairs_file(
    path: &Path,
    params: &ComparisonParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    info!("Starting batch comparison from file: {:?}", path);
    let pairs = read_pairs_file(path)?;
    compare_pairs(&pairs, params, continue_on_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::io::parse_pairs;

    #[test]
    fn validated_compare_trims_and_bounds() {
        let params = ComparisonParams::default();
        let c = compare_validated("  KA01AB1234 ", "KA01AB1234", &params).unwrap();
        assert_eq!(c.similarity, 100.0);
        assert!(matches!(
            compare_validated("KA01", "KA01AB1234", &params),
            Err(Error::InvalidLength { len: 4, .. })
        ));
    }

    #[test]
    fn batch_counts_and_skips() {
        let pairs =
            parse_pairs("KA01AB1234,KA01AB1234\nKA01AB1234,0000000000\nAB,ABCDEF\n").unwrap();
        let params = ComparisonParams::default();

        let report = compare_pairs(&pairs, &params, true).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.matched, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.skipped_pairs[0].line, 3);
        assert_eq!(report.outcomes[1].verdict, Verdict::NoMatch);

        assert!(matches!(
            compare_pairs(&pairs, &params, false),
            Err(Error::InvalidLength { len: 2, .. })
        ));
    }

    #[test]
    fn batch_rejects_bad_params() {
        let params = ComparisonParams {
            threshold: -1.0,
            ..Default::default()
        };
        assert!(compare_pairs(&[], &params, true).is_err());
    }

    #[test]
    fn batch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(
            &path,
            "# first,second\nKA01AB1234,KA01AB1234\nMH12CD0001\tMH12CD0099\nKA01,KA01AB1234\n",
        )
        .unwrap();

        let report = compare_pairs_file(&path, &ComparisonParams::default(), true).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.matched, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.outcomes[0].line, 2);
        assert_eq!(report.outcomes[1].comparison.similarity, 80.0);
        assert_eq!(report.skipped_pairs[0].line, 4);

        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            compare_pairs_file(&missing, &ComparisonParams::default(), true),
            Err(Error::Io(_))
        ));
    }
}
