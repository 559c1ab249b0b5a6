use serde::Serialize;

use crate::api::BatchReport;
use crate::core::score::Comparison;
use crate::error::Result;
use crate::types::Verdict;

/// JSON document for a single comparison
#[derive(Debug, Serialize)]
pub struct ComparisonDocument<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub threshold: f64,
    pub verdict: Verdict,
    #[serde(flatten)]
    pub comparison: &'a Comparison,
}

pub fn comparison_to_json(
    first: &str,
    second: &str,
    comparison: &Comparison,
    threshold: f64,
) -> Result<String> {
    let doc = ComparisonDocument {
        first,
        second,
        threshold,
        verdict: comparison.verdict(threshold),
        comparison,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn batch_to_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
