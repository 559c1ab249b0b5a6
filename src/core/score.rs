use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::align::{align_strings, aligned_positions};
use crate::error::{Error, Result};
use crate::types::{Marker, MatchMask, Verdict};

/// Result of comparing two strings position by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub aligned1: String,
    pub aligned2: String,
    pub mask: MatchMask,
    pub matches: usize,
    /// `matches / aligned_len * 100`, over the padded length
    pub similarity: f64,
}

impl Comparison {
    pub fn aligned_len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_match(&self, threshold: f64) -> bool {
        self.similarity >= threshold
    }

    pub fn verdict(&self, threshold: f64) -> Verdict {
        if self.is_match(threshold) {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

/// Compare two strings with the default blank padding.
pub fn compare_strings(s1: &str, s2: &str) -> Result<Comparison> {
    compare_strings_with_pad(s1, s2, ' ')
}

/// Compare two non-empty strings character by character.
///
/// The shorter string is right-padded with `pad`; padded positions never
/// match, whatever character sits opposite them. Comparison is exact and
/// case-sensitive.
pub fn compare_strings_with_pad(s1: &str, s2: &str, pad: char) -> Result<Comparison> {
    if s1.is_empty() {
        return Err(Error::EmptyInput { arg: "first" });
    }
    if s2.is_empty() {
        return Err(Error::EmptyInput { arg: "second" });
    }

    let markers: Vec<Marker> = aligned_positions(s1, s2)
        .map(|pair| match pair {
            (Some(a), Some(b)) if a == b => Marker::Match,
            _ => Marker::Mismatch,
        })
        .collect();
    let mask = MatchMask::new(markers);
    let matches = mask.matches();
    let similarity = similarity_percent(matches, mask.len());

    let (aligned1, aligned2) = align_strings(s1, s2, pad);
    debug!(
        "Compared {:?} vs {:?}: {} / {} ({:.2}%)",
        s1,
        s2,
        matches,
        mask.len(),
        similarity
    );

    Ok(Comparison {
        aligned1,
        aligned2,
        mask,
        matches,
        similarity,
    })
}

/// Percentage of `matches` over `len`. Multiplies first so exact ratios
/// such as 7/10 land exactly on 70.0.
pub fn similarity_percent(matches: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    (matches as f64 * 100.0) / len as f64
}
