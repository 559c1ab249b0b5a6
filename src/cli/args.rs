use clap::Parser;
use std::path::PathBuf;

use platesim::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "platesim", version, about = "String similarity checker for licence plates")]
pub struct CliArgs {
    /// First string (single comparison mode; prompts when omitted)
    #[arg(short = 'a', long)]
    pub first: Option<String>,

    /// Second string (single comparison mode; prompts when omitted)
    #[arg(short = 'b', long)]
    pub second: Option<String>,

    /// File of comma- or tab-separated pairs, one per line (batch mode)
    #[arg(short, long)]
    pub pairs: Option<PathBuf>,

    /// Batch mode: skip pairs that fail length validation instead of stopping
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print N plate/variant pairs and N plate/invalid pairs in pairs-file format
    #[arg(long, value_name = "N")]
    pub generate: Option<usize>,

    /// Seed for --generate (random when omitted)
    #[arg(long, requires = "generate")]
    pub seed: Option<u64>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with comparison parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Similarity percentage at or above which a pair is a match
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Shortest accepted input after trimming
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Longest accepted input after trimming
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
