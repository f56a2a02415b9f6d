use clap::{ArgGroup, Parser, Subcommand};

use crate::common::DEFAULT_OUTPUT_FILENAME;
use crate::remote::EXAMPLE_DATA_URL;

#[derive(Parser)]
#[command(name = "affil-adder")]
#[command(about = "Link authors to numbered affiliations with superscript markers")]
#[command(version = "1.0.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format an author/affiliation table into an author line and numbered affiliation list
    Format(FormatArgs),

    /// Download the example author table to a local file
    FetchExample(FetchExampleArgs),
}

#[derive(Parser, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "example"])))]
pub struct FormatArgs {
    /// Table with columns Author, Affiliation1, Affiliation2, Affiliation3 (.xlsx, .xls, .ods, .csv, .parquet)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Use the example data instead of an input file
    #[arg(long)]
    pub example: bool,

    /// Location of the example data
    #[arg(long, default_value = EXAMPLE_DATA_URL)]
    pub example_url: String,

    /// Plain-text output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: String,

    /// Also write the display markup as an HTML fragment next to the output file
    #[arg(long, default_value = "false")]
    pub markup: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    pub stats_json: Option<String>,

    /// Number of input rows to preview (0 disables the preview)
    #[arg(long, default_value = "10")]
    pub preview_rows: usize,

    /// Timeout in seconds for the example data download
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct FetchExampleArgs {
    /// Location of the example data
    #[arg(long, default_value = EXAMPLE_DATA_URL)]
    pub url: String,

    /// Where to save the downloaded file
    #[arg(short, long, default_value = "dummy_data.xlsx")]
    pub output: String,

    /// Timeout in seconds for the download
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
