use clap::Parser;
use std::path::PathBuf;

/// Rebuild the assembly hierarchy of tab-delimited BOM exports and write
/// indented and flattened parts lists to an xlsx workbook
#[derive(Parser, Debug)]
#[command(name = "bom-flat")]
#[command(version)]
#[command(
    about = "Convert tab-delimited BOM exports into indented and flattened xlsx parts lists",
    long_about = None
)]
pub struct Args {
    /// BOM exports to convert (defaults to every *.txt file in the current
    /// directory except the ignore file)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// File listing part numbers to leave out, one per line [default: ignore.txt]
    #[arg(short, long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,

    /// Directory for the workbooks (defaults to each BOM's own directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file (defaults to bom-flat.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject part numbers matching this regex. Replaces the built-in
    /// patterns; can be specified multiple times: -x "^$" -x "^TMP-"
    #[arg(short = 'x', long = "invalid-pattern", value_name = "REGEX")]
    pub invalid_patterns: Vec<String>,

    /// Print the reconstructed tree of each BOM to stdout
    #[arg(short, long)]
    pub tree: bool,

    /// Report every dropped row with its reason
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
