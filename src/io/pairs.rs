use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// One input pair read from a pairs file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPair {
    /// 1-based line number in the source file
    pub line: usize,
    pub first: String,
    pub second: String,
}

/// Parse pairs-file text: one `first,second` (or tab-separated) pair per
/// line. Blank lines and `#` comments are ignored.
pub fn parse_pairs(text: &str) -> Result<Vec<StringPair>> {
    let mut pairs = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c == '\t')
            .map(str::trim)
            .collect();
        match fields.as_slice() {
            [first, second] => pairs.push(StringPair {
                line,
                first: first.to_string(),
                second: second.to_string(),
            }),
            _ => {
                return Err(Error::Parse {
                    line,
                    reason: format!("expected 2 fields, found {}", fields.len()),
                });
            }
        }
    }
    Ok(pairs)
}

pub fn read_pairs_file(path: &Path) -> Result<Vec<StringPair>> {
    let text = fs::read_to_string(path)?;
    let pairs = parse_pairs(&text)?;
    info!("Read {} pairs from {:?}", pairs.len(), path);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commas_tabs_and_comments() {
        let text = "# first,second\nKA01AB1234,KA01AB1299\n\n  MH12CD0001\tMH12CD0002  \n";
        let pairs = parse_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].line, 2);
        assert_eq!(pairs[0].first, "KA01AB1234");
        assert_eq!(pairs[0].second, "KA01AB1299");
        assert_eq!(pairs[1].line, 4);
        assert_eq!(pairs[1].first, "MH12CD0001");
        assert_eq!(pairs[1].second, "MH12CD0002");
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = parse_pairs("A,B\nONLYONE\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = parse_pairs("A,B,C").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_pairs("A,B\tC").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_pairs("KA01AB1234,KA01AB1299\tMH12CD0001").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn keeps_empty_fields_for_later_validation() {
        let pairs = parse_pairs("KA01AB1234,").unwrap();
        assert_eq!(pairs[0].second, "");
    }
}
