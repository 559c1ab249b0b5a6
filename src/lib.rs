#![doc = r#"
platesim: position-by-position similarity scoring for short strings.

This crate compares two strings (typically licence plates read by an external
detector) character by character. The shorter string is right-padded to the
length of the longer one, a `*`/`x` match mask is built, and the similarity is
the share of matching positions over the padded length. It powers the
`platesim` CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
platesim = "0.1"
```

Quick start: compare two strings
--------------------------------
```rust
use platesim::{compare_strings, SIMILARITY_THRESHOLD};

fn main() -> platesim::Result<()> {
    let c = compare_strings("AB12CD", "AB12CD99")?;

    assert_eq!(c.aligned1, "AB12CD  ");
    assert_eq!(c.mask.to_string(), "******xx");
    assert_eq!(c.matches, 6);
    assert_eq!(c.similarity, 75.0);
    assert!(c.is_match(SIMILARITY_THRESHOLD));
    Ok(())
}
```

Note that the denominator is the padded length: a difference in length always
costs similarity.

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use platesim::{compare_pairs_file, ComparisonParams};

fn main() -> platesim::Result<()> {
    let params = ComparisonParams {
        threshold: 80.0,
        ..Default::default()
    };

    let report = compare_pairs_file(Path::new("pairs.csv"), &params, true)?;
    println!("processed={} matched={} skipped={}", report.processed, report.matched, report.skipped);
    Ok(())
}
```

Error handling
--------------
All public functions return `platesim::Result<T>`; match on `platesim::Error` to
handle specific cases.

```rust
use platesim::{compare_strings, Error};

match compare_strings("", "KA01AB1234") {
    Err(Error::EmptyInput { arg }) => assert_eq!(arg, "first"),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`]: high-level entry points and `BatchReport`.
- [`core`]: alignment, scoring and `ComparisonParams`.
- [`io`]: interactive prompt, pairs-file reader and output writers.
- [`generate`]: plate-like fixture strings.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod generate;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ComparisonParams;
pub use crate::core::score::Comparison;
pub use error::{Error, Result};
pub use types::{Marker, MatchMask, OutputFormat, SIMILARITY_THRESHOLD, Verdict};

// Scorer
pub use crate::core::align::align_strings;
pub use crate::core::score::{compare_strings, compare_strings_with_pad, similarity_percent};

// High-level API re-exports
pub use api::{
    BatchReport, PairOutcome, SkippedPair, compare, compare_pairs, compare_pairs_file,
    compare_validated,
};
