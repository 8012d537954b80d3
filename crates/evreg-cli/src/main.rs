mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evreg",
    version,
    about = "Turn electric-vehicle registration report PDFs into county and ZIP datasets"
)]
struct Cli {
    /// Log parsing details (debug level)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest every matching report in a directory and write both CSV datasets
    Ingest {
        /// Directory holding the report PDFs
        input_dir: PathBuf,

        /// Case-sensitive substring a report's file name must contain
        #[arg(short, long, default_value = "electric")]
        pattern: String,

        /// Directory the CSV files are written to
        #[arg(short = 'O', long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Parse a single report (PDF, or already-extracted .txt) and print its records
    Parse {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Print summary tables from previously written CSV datasets
    Summary {
        /// County-level CSV written by `ingest`
        county_csv: PathBuf,

        /// ZIP-level CSV written by `ingest`
        zip_csv: PathBuf,

        /// Rows in each top/bottom table
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,

        /// Minimum first-report count for a city to get a percent increase
        #[arg(long, default_value_t = evreg_core::analysis::DEFAULT_MIN_BASELINE)]
        min_baseline: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Ingest {
            input_dir,
            pattern,
            out_dir,
        } => commands::ingest::run(&input_dir, &pattern, &out_dir),
        Commands::Parse { input_file, output } => commands::parse::run(input_file, output),
        Commands::Summary {
            county_csv,
            zip_csv,
            top,
            min_baseline,
        } => commands::summary::run(&county_csv, &zip_csv, top, min_baseline),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
