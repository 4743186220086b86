use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding numbers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file of whitespace/comma separated numbers (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Insert a line break every N symbols (0 = single line)
    #[arg(short = 'w', long, value_name = "N")]
    pub wrap: Option<usize>,

    /// Values encoded between progress checkpoints
    #[arg(long, value_name = "N")]
    pub suspend: Option<usize>,

    /// Treat input as unsigned integers in 0..=4095
    #[arg(long)]
    pub uint12: bool,
}

/// Arguments for decoding Base64 text
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Discard this many leading lines before decoding
    #[arg(short = 's', long, value_name = "N")]
    pub skip_lines: Option<usize>,

    /// Input bytes consumed between progress checkpoints
    #[arg(long, value_name = "N")]
    pub suspend: Option<usize>,

    /// Decode unsigned 12-bit integers instead of floats
    #[arg(long)]
    pub uint12: bool,

    /// Output a JSON array instead of one value per line
    #[arg(long)]
    pub json: bool,

    /// Decimal places for decoded floats
    #[arg(short = 'p', long, value_name = "P")]
    pub precision: Option<usize>,
}

/// Arguments for inspecting the Float12 encoding of numbers
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Numbers to inspect
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing the effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}
