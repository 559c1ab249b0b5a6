//! I/O layer around the scorer: the interactive `prompt` loop, the
//! `pairs` file reader for batch runs, and `writers` for text and JSON
//! output.
pub mod prompt;
pub use prompt::{prompt_valid_string, validate_length};

pub mod pairs;
pub use pairs::{StringPair, parse_pairs, read_pairs_file};

pub mod writers;
