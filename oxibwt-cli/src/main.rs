//! OxiBWT CLI - sentinel-free Burrows-Wheeler Transform utility
//!
//! Applies the Lyndon-factorization based BWT to whole files and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_decode, cmd_encode, cmd_factor, cmd_test};
use oxibwt_core::TransformConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(
    author,
    version,
    about = "Sentinel-free Burrows-Wheeler Transform utility"
)]
#[command(long_about = "
OxiBWT applies a reversible, sentinel-free Burrows-Wheeler Transform to files.
The transformed file has the same length as the input and needs no index or
end marker to be inverted.

Examples:
  oxibwt encode book.txt
  oxibwt decode book.txt.bwts -o book.txt
  oxibwt factor book.txt --limit 20
  oxibwt factor book.txt --json
  oxibwt test book.txt
  oxibwt --sequential encode book.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Slices shorter than this are sorted sequentially
    #[arg(long, global = true, default_value_t = TransformConfig::DEFAULT.sequential_threshold)]
    threshold: usize,

    /// Sort on the calling thread only
    #[arg(long, global = true)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the forward transform to a file
    #[command(alias = "e")]
    Encode {
        /// Input file
        input: PathBuf,

        /// Output file (default: <input>.bwts)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply the inverse transform to a file
    #[command(alias = "d")]
    Decode {
        /// Transformed input file
        input: PathBuf,

        /// Output file (default: input without .bwts, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the Lyndon factorization of a file
    #[command(alias = "f")]
    Factor {
        /// Input file
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check that a file survives an encode/decode round trip
    #[command(alias = "t")]
    Test {
        /// Input file
        input: PathBuf,
    },
}

impl Cli {
    fn transform_config(&self) -> TransformConfig {
        TransformConfig::new(self.threshold, !self.sequential)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.transform_config();
    let result = match cli.command {
        Commands::Encode { input, output } => cmd_encode(&input, output.as_deref(), config),
        Commands::Decode { input, output } => cmd_decode(&input, output.as_deref()),
        Commands::Factor { input, json, limit } => cmd_factor(&input, json, limit),
        Commands::Test { input } => cmd_test(&input, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
