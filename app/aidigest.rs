//! Command-line interface for aidigest.
//!
//! Aggregates a directory into a single Markdown file and prints a summary of what
//! was included, ignored and skipped.

use aidigest::{
    AggregationResult, BinaryDetection, DEFAULT_IGNORE_FILE, DEFAULT_OUTPUT_FILE, DigestBuilder,
    DigestOptions, aggregate, output,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// aidigest — aggregate a codebase into one Markdown file
#[derive(Parser)]
#[command(name = "aidigest", version, about, long_about = None)]
struct Cli {
    /// Input directory
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// Output file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Disable default ignore patterns
    #[arg(long)]
    no_default_ignores: bool,

    /// Enable whitespace removal
    #[arg(long)]
    whitespace_removal: bool,

    /// Display a list of files included in the output
    #[arg(long)]
    show_output_files: bool,

    /// Custom ignore file name
    #[arg(long, default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: String,

    /// Binary detection strategy
    #[arg(long, default_value = "accurate", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Print the run statistics as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (DigestOptions, bool, bool) {
        let options = DigestBuilder::new(self.input)
            .output(self.output)
            .use_default_ignores(!self.no_default_ignores)
            .remove_whitespace(self.whitespace_removal)
            .ignore_file_name(self.ignore_file)
            .binary_detection(self.binary_detection)
            .follow_links(self.follow_links)
            .build();
        (options, self.show_output_files, self.json)
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aidigest=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let (options, show_output_files, json) = cli.into_options();

    match aggregate(&options) {
        Ok(result) => report(&result, &options, show_output_files, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn report(
    result: &AggregationResult,
    options: &DigestOptions,
    show_output_files: bool,
    json: bool,
) {
    if json {
        let json = serde_json::to_string_pretty(result).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
        return;
    }
    for line in output::summary_lines(result, options) {
        println!("{}", line);
    }
    if show_output_files {
        println!("Files included in the output:");
        for line in output::included_file_lines(result) {
            println!("{}", line);
        }
    }
    println!("Done! Wrote code base to {}", options.output.display());
}
