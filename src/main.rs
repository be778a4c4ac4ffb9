//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Grouped report written to a file
//! word-frequency story.txt report.txt
//!
//! # JSON report on stdout, frequencies of 3 and above
//! word-frequency story.txt --format json --min-frequency 3
//!
//! # Every word with its count, most frequent first
//! word-frequency story.txt --format listing --order frequency
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Report written
//! - `1` - Invalid command-line arguments
//! - `2` - Input or output file could not be opened, read or written
//! - `3` - Any other failure

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use word_frequency::config::{self, ReportFormat, SortOrder};
use word_frequency::runner::{self, RunSummary};
use word_frequency::{AppError, telemetry};

/// Count word frequencies in a text file.
#[derive(Parser)]
#[command(name = "word-frequency")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to read
    input: PathBuf,

    /// File to write the report to (stdout if omitted)
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Words per line in the grouped report
    #[arg(short = 'n', long)]
    words_per_line: Option<usize>,

    /// Lowest frequency to include
    #[arg(short, long)]
    min_frequency: Option<u64>,

    /// Chain order before rendering
    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,

    /// Overwrite an existing output file without asking
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            exit_code_for(&e)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(words_per_line) = cli.words_per_line {
        config.words_per_line = words_per_line;
    }
    if let Some(min_frequency) = cli.min_frequency {
        config.min_frequency = min_frequency;
    }
    if let Some(order) = cli.order {
        config.order = order;
    }
    config.validate()?;

    telemetry::init(&config)?;
    config.print_summary();

    let summary = match &cli.output {
        Some(path) => {
            if !confirm_overwrite(path, cli.yes)? {
                eprintln!("{}", "Cancelled".yellow());
                return Ok(());
            }
            runner::run_to_file(&config, &cli.input, path)?
        }
        None => {
            let mut out = io::stdout().lock();
            runner::run(&config, &cli.input, &mut out)?
        }
    };

    print_summary(&summary, cli.output.as_deref());
    Ok(())
}

/// Returns whether `path` may be written.
///
/// Missing files and `--yes` need no confirmation. Without a terminal to ask
/// on, an existing file is an error rather than a silent overwrite.
fn confirm_overwrite(path: &Path, yes: bool) -> Result<bool> {
    if yes || !path.exists() {
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        anyhow::bail!(
            "{} already exists; pass --yes to overwrite it",
            path.display()
        );
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn print_summary(summary: &RunSummary, output: Option<&Path>) {
    let target = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    eprintln!(
        "{} {} words, {} distinct, highest frequency {} -> {}",
        "Counted".green().bold(),
        summary.ingest.words_counted.to_string().cyan(),
        summary.distinct_words.to_string().cyan(),
        summary.max_frequency.to_string().cyan(),
        target.bright_white()
    );

    if summary.ingest.dropped > 0 {
        eprintln!(
            "{} {} words could not be stored",
            "Warning:".yellow().bold(),
            summary.ingest.dropped
        );
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AppError>() {
        Some(app) if app.is_io() => ExitCode::from(2),
        _ => ExitCode::from(3),
    }
}
